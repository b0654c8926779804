//! Git repository address parsing
//!
//! This module handles:
//! - Classifying a raw address as an absolute URL, SCP-like shorthand or local path
//! - Building a structured [`GitUrl`] for each grammar
//! - Serializing a [`GitUrl`] back into its canonical `scheme://` form
//!
//! Accepted forms follow the "GIT URLS" section of git-clone(1):
//!
//! ```text
//! ssh://[user@]host.xz[:port]/path/to/repo.git/
//! git://host.xz[:port]/path/to/repo.git/
//! http[s]://host.xz[:port]/path/to/repo.git/
//! ftp[s]://host.xz[:port]/path/to/repo.git/
//! [user@]host.xz:path/to/repo.git/
//! /path/to/repo.git/
//! file:///path/to/repo.git/
//! ```

pub mod build;
pub mod classify;
pub mod primitive;
pub mod scp;
pub mod serialize;
pub mod transport;

pub use classify::{Grammar, classify, is_scp_like};
pub use primitive::{UrlPrimitive, WhatwgUrl};
pub use scp::is_windows_drive_path;
pub use serialize::{compose, serialize, serialize_with};
pub use transport::Transport;

use crate::error::{GitUrlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structured form of a repository address
///
/// Built once per parse and never mutated by this crate. `host` carries the
/// port as a `:port` suffix; `user` is `None` unless the input spelled out
/// `user@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GitUrl {
    pub scheme: Transport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub host: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl GitUrl {
    /// Host-less `file` address for a filesystem path
    pub fn local(path: &str) -> Self {
        build::build_local(path)
    }

    /// Host without the `:port` suffix
    pub fn host_name(&self) -> &str {
        self.split_port().0
    }

    /// Port, when the host carries one
    pub fn port(&self) -> Option<u16> {
        self.split_port().1.and_then(|port| port.parse().ok())
    }

    fn split_port(&self) -> (&str, Option<&str>) {
        match self.host.rsplit_once(':') {
            // "::1" without brackets has no port; "[::1]:22" does
            Some((name, port))
                if !port.is_empty()
                    && port.bytes().all(|b| b.is_ascii_digit())
                    && (!name.contains(':') || name.ends_with(']')) =>
            {
                (name, Some(port))
            }
            _ => (&self.host, None),
        }
    }
}

impl fmt::Display for GitUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

impl FromStr for GitUrl {
    type Err = GitUrlError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a repository address using the `url` crate for absolute URLs
///
/// # Errors
///
/// Returns [`GitUrlError::MalformedUrl`] when `raw` has a `scheme://` prefix
/// but the URL itself is invalid. SCP-like and local inputs never fail.
pub fn parse(raw: &str) -> Result<GitUrl> {
    parse_with(raw, &WhatwgUrl)
}

/// Parse a repository address using `primitive` for absolute URLs
///
/// # Errors
///
/// Returns [`GitUrlError::MalformedUrl`] when `primitive` rejects an input
/// classified as an absolute URL.
pub fn parse_with<P: UrlPrimitive + ?Sized>(raw: &str, primitive: &P) -> Result<GitUrl> {
    build::build(raw, classify(raw), primitive)
}

/// Parse `raw` only if it is SCP-like shorthand
pub fn parse_scp(raw: &str) -> Option<GitUrl> {
    if classify(raw) != Grammar::ScpLike {
        return None;
    }
    scp::split_scp(raw).map(build::build_scp)
}

/// Treat `raw` as a local path regardless of its shape
pub fn parse_local(raw: &str) -> GitUrl {
    build::build_local(raw)
}

/// Parse `raw` as an absolute URL over one of the known git transports
///
/// # Errors
///
/// - [`GitUrlError::NotAUrl`] if `raw` has no `scheme://` prefix
/// - [`GitUrlError::MalformedUrl`] if the URL is invalid
/// - [`GitUrlError::UnsupportedTransport`] if the scheme is not a git transport
pub fn parse_transport(raw: &str) -> Result<GitUrl> {
    if classify(raw) != Grammar::AbsoluteUrl {
        return Err(GitUrlError::NotAUrl {
            input: raw.to_string(),
        });
    }

    let url = build::build(raw, Grammar::AbsoluteUrl, &WhatwgUrl)?;
    if !url.scheme.is_known() {
        return Err(GitUrlError::UnsupportedTransport {
            scheme: url.scheme.to_string(),
            input: raw.to_string(),
        });
    }
    Ok(url)
}
