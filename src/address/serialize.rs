//! Canonical string form of a [`GitUrl`]

use super::primitive::{UrlPrimitive, WhatwgUrl};
use super::{GitUrl, Transport};
use std::borrow::Cow;
use std::fmt::Write;

/// Serialize `url` into its canonical string using the `url` crate
pub fn serialize(url: &GitUrl) -> String {
    serialize_with(url, &WhatwgUrl)
}

/// Serialize `url` into its canonical string using `primitive`
///
/// Host-less `file` addresses are always written as `file://` + path, so a
/// bare local path comes back with an explicit scheme. Everything else goes
/// through the primitive's serializer.
pub fn serialize_with<P: UrlPrimitive + ?Sized>(url: &GitUrl, primitive: &P) -> String {
    if is_local_file(url) {
        return compose(url);
    }
    primitive.serialize_absolute(url)
}

/// Assemble `scheme://[user[:password]@]host[/]path[?query][#fragment]`
///
/// A `/` is inserted between host and a relative path, which is how
/// `host:path` becomes `ssh://host/path`. Host-less `file` addresses keep
/// their path exactly as given. Otherwise the only escaping applied is for
/// characters that would move a component boundary on re-parse: a stray
/// `%`, delimiters inside user or password, and `?`/`#` inside the path.
pub fn compose(url: &GitUrl) -> String {
    let mut out = format!("{}://", url.scheme);

    if url.user.is_some() || url.password.is_some() {
        let user = url.user.as_deref().unwrap_or_default();
        out.push_str(&escape_reserved(user, &['@', '/', '?', '#', ':']));
        if let Some(password) = &url.password {
            out.push(':');
            out.push_str(&escape_reserved(password, &['@', '/', '?', '#']));
        }
        out.push('@');
    }
    out.push_str(&url.host);
    out.push_str(&composed_path(url));

    if let Some(query) = &url.query {
        out.push('?');
        out.push_str(&escape_reserved(query, &['#']));
    }
    if let Some(fragment) = &url.fragment {
        out.push('#');
        out.push_str(&escape_reserved(fragment, &[]));
    }
    out
}

/// The path as [`compose`] writes it
pub(super) fn composed_path(url: &GitUrl) -> Cow<'_, str> {
    if is_local_file(url) {
        return Cow::Borrowed(&url.path);
    }
    let path = escape_reserved(&url.path, &['?', '#']);
    if path.is_empty() || path.starts_with('/') {
        path
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Whether `text` starts with `%` and two hex digits
pub(super) fn is_percent_escape(text: &str) -> bool {
    text.starts_with('%')
        && text
            .as_bytes()
            .get(1..3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
}

fn is_local_file(url: &GitUrl) -> bool {
    url.scheme == Transport::File && url.host.is_empty()
}

/// Percent-encode `reserved` characters and any `%` that does not start an escape
fn escape_reserved<'a>(text: &'a str, reserved: &[char]) -> Cow<'a, str> {
    let needs_escape = |pos: usize, c: char| {
        reserved.contains(&c) || (c == '%' && !is_percent_escape(&text[pos..]))
    };

    if !text.char_indices().any(|(pos, c)| needs_escape(pos, c)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 6);
    for (pos, c) in text.char_indices() {
        if needs_escape(pos, c) {
            let _ = write!(out, "%{:02X}", u32::from(c));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
