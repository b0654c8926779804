//! SCP-like address matching
//!
//! Recognizes the `[user@]host:path` shorthand that scp and git accept for
//! SSH remotes. This module only answers "where is the separator colon";
//! whether an input should be read as SCP-like at all is decided by
//! [`classify`](super::classify::classify), which checks for an explicit
//! `scheme://` first.

/// The pieces of an SCP-like address, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScpParts<'a> {
    /// Text before `@`; `None` when there is no `@` or nothing precedes it
    pub user: Option<&'a str>,
    /// Host token, brackets kept for IPv6 literals
    pub host: &'a str,
    /// Everything after the separator colon, untouched
    pub path: &'a str,
}

/// Check for an absolute Windows path: one ASCII letter, `:`, then `\` or `/`
///
/// `C:\repo` and `c:/repo` would otherwise match the SCP pattern with a
/// one-letter host.
pub fn is_windows_drive_path(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && matches!(bytes[2], b'\\' | b'/')
}

/// Split `input` into user, host and path if it has the SCP-like shape
///
/// The separator is the first `:` of the input, or the first `:` after the
/// closing `]` of a bracketed host. Everything before the separator must be
/// free of `/`: a slash there means the user wrote a path that happens to
/// contain a colon (`./foo:bar`), which git treats as local.
pub fn split_scp(input: &str) -> Option<ScpParts<'_>> {
    if is_windows_drive_path(input) {
        return None;
    }

    let colon = separator_colon(input)?;
    let (authority, path) = (&input[..colon], &input[colon + 1..]);
    if authority.contains('/') {
        return None;
    }

    let (user, host) = match authority.rfind('@') {
        Some(at) => {
            let user = &authority[..at];
            (Some(user).filter(|u| !u.is_empty()), &authority[at + 1..])
        }
        None => (None, authority),
    };

    if !is_host_token(host) {
        return None;
    }

    Some(ScpParts { user, host, path })
}

/// A host that can stand in the authority of an `ssh://` URL
///
/// Bracketed hosts must hold an IPv6 literal. Bare hosts may not contain
/// whitespace, control characters, or characters a URL host forbids.
fn is_host_token(host: &str) -> bool {
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return inner.parse::<std::net::Ipv6Addr>().is_ok();
    }
    !host.is_empty()
        && !host.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '#' | '%' | '<' | '>' | '?' | '[' | '\\' | ']' | '^' | '|')
        })
}

/// Find the colon separating host from path
fn separator_colon(input: &str) -> Option<usize> {
    if let Some(open) = bracket_start(input) {
        // IPv6 literal: the separator must directly follow the closing bracket
        let close = open + input[open..].find(']')?;
        return (input.as_bytes().get(close + 1) == Some(&b':')).then_some(close + 1);
    }
    input.find(':')
}

/// Position of `[` when it opens the host, i.e. at the start or right after `user@`
fn bracket_start(input: &str) -> Option<usize> {
    let open = input.find('[')?;
    let prefix = &input[..open];
    let opens_host = prefix.is_empty()
        || (prefix.ends_with('@') && !prefix.contains(':') && !prefix.contains('/'));
    opens_host.then_some(open)
}
