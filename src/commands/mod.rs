//! Command implementations for giturl CLI

pub mod classify;
pub mod completions;
pub mod normalize;
pub mod parse;
pub mod version;

use giturl::{GitUrl, Grammar, Result};

/// Parse one address, routing URLs through the transport check when `strict`
pub fn resolve(input: &str, strict: bool) -> Result<GitUrl> {
    if strict && giturl::classify(input) == Grammar::AbsoluteUrl {
        giturl::parse_transport(input)
    } else {
        giturl::parse(input)
    }
}
