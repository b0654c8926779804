//! Error types and handling for giturl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Parsing itself can only fail in one way: an input that looks like an
//! absolute URL but is rejected by the URL primitive. The remaining variants
//! belong to the strict transport parser and to the command-line wrapper.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for giturl operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum GitUrlError {
    #[error("Malformed URL '{input}': {reason}")]
    #[diagnostic(
        code(giturl::url::malformed),
        help(
            "Check the percent-escapes and host characters, or drop the scheme:// prefix \
             for SCP-like or local addresses"
        )
    )]
    MalformedUrl { input: String, reason: String },

    #[error("Not an absolute URL: {input}")]
    #[diagnostic(
        code(giturl::url::not_a_url),
        help(
            "Strict parsing expects scheme://host/path; \
             use plain parsing for host:path or local paths"
        )
    )]
    NotAUrl { input: String },

    #[error("Scheme '{scheme}' is not a supported transport: {input}")]
    #[diagnostic(
        code(giturl::url::unsupported_transport),
        help("Supported transports: ssh, git, git+ssh, http, https, ftp, ftps, rsync, file")
    )]
    UnsupportedTransport { scheme: String, input: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(giturl::io))]
    Io { message: String },

    #[error("Failed to render JSON: {message}")]
    #[diagnostic(code(giturl::json))]
    Json { message: String },
}

impl GitUrlError {
    /// Build a [`GitUrlError::MalformedUrl`] for `input`
    pub fn malformed(input: &str, reason: impl Into<String>) -> Self {
        GitUrlError::MalformedUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for GitUrlError {
    fn from(err: std::io::Error) -> Self {
        GitUrlError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GitUrlError {
    fn from(err: serde_json::Error) -> Self {
        GitUrlError::Json {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GitUrlError>;
