//! Grammar classification for raw address strings

use super::scp;
use serde::Serialize;
use std::fmt;

/// Address grammar selected for a raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    /// `scheme://...`, handed to the URL primitive
    AbsoluteUrl,
    /// `[user@]host:path`, SSH shorthand
    ScpLike,
    /// Anything else: a filesystem path
    LocalPath,
}

impl Grammar {
    pub fn as_str(self) -> &'static str {
        match self {
            Grammar::AbsoluteUrl => "absolute-url",
            Grammar::ScpLike => "scp-like",
            Grammar::LocalPath => "local-path",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide which grammar `raw` is written in
///
/// Precedence: an explicit `scheme://` wins, then the SCP-like shape, and
/// everything else is a local path. Never fails.
pub fn classify(raw: &str) -> Grammar {
    let grammar = if scheme_end(raw).is_some() {
        Grammar::AbsoluteUrl
    } else if scp::split_scp(raw).is_some() {
        Grammar::ScpLike
    } else {
        Grammar::LocalPath
    };
    tracing::trace!(input = raw, %grammar, "classified address");
    grammar
}

/// Whether `raw` would be parsed as `[user@]host:path`
pub fn is_scp_like(raw: &str) -> bool {
    classify(raw) == Grammar::ScpLike
}

/// Byte offset of the `:` in `scheme://`, if `raw` starts with one
///
/// Only the first colon of the input counts. In `host:path/a://b` the first
/// colon is the SCP separator, so the later `://` does not make it a URL.
pub fn scheme_end(raw: &str) -> Option<usize> {
    let colon = raw.find(':')?;
    if !raw[colon..].starts_with("://") {
        return None;
    }
    is_scheme_token(&raw[..colon]).then_some(colon)
}

/// RFC 3986 scheme: a letter, then letters, digits, `+`, `-` or `.`
fn is_scheme_token(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
