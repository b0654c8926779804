//! Build a [`GitUrl`] for a classified input

use super::classify::Grammar;
use super::primitive::UrlPrimitive;
use super::scp::{self, ScpParts};
use super::{GitUrl, Transport};
use crate::error::{GitUrlError, Result};

/// Build the structured address for `raw` under `grammar`
///
/// Only [`Grammar::AbsoluteUrl`] can fail, when `primitive` rejects the
/// input. `file://` addresses never reach the primitive: everything after
/// `file://` is the local path, as git reads it. An SCP-like build whose
/// input does not actually have the SCP shape yields a local path, the same
/// as classification would have.
pub fn build<P: UrlPrimitive + ?Sized>(
    raw: &str,
    grammar: Grammar,
    primitive: &P,
) -> Result<GitUrl> {
    match grammar {
        Grammar::AbsoluteUrl => match file_url_path(raw) {
            Some(path) => Ok(build_local(path)),
            None => primitive.parse_absolute(raw).map_err(|reason| {
                tracing::debug!(input = raw, %reason, "url primitive rejected input");
                GitUrlError::malformed(raw, reason)
            }),
        },
        Grammar::ScpLike => Ok(scp::split_scp(raw).map_or_else(|| build_local(raw), build_scp)),
        Grammar::LocalPath => Ok(build_local(raw)),
    }
}

/// `[user@]host:path` is always SSH; the path is kept exactly as written
pub fn build_scp(parts: ScpParts<'_>) -> GitUrl {
    GitUrl {
        scheme: Transport::Ssh,
        user: parts.user.map(str::to_string),
        password: None,
        host: parts.host.to_string(),
        path: parts.path.to_string(),
        query: None,
        fragment: None,
    }
}

/// A local path becomes a host-less `file` address, with no escaping or absolutization
pub fn build_local(raw: &str) -> GitUrl {
    GitUrl {
        scheme: Transport::File,
        user: None,
        password: None,
        host: String::new(),
        path: raw.to_string(),
        query: None,
        fragment: None,
    }
}

/// Text after `file://`, scheme matched case-insensitively
fn file_url_path(raw: &str) -> Option<&str> {
    let (scheme, rest) = raw.split_once("://")?;
    scheme.eq_ignore_ascii_case("file").then_some(rest)
}
