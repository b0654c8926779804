//! giturl - parse and normalize git repository addresses
//!
//! Git accepts three address syntaxes for a remote:
//!
//! - standard URLs: `ssh://user@host.xz:22/path/to/repo.git`
//! - SCP-like shorthand: `user@host.xz:path/to/repo.git`
//! - local paths: `/srv/git/repo.git`
//!
//! [`parse`] decides which one a string is written in and returns a
//! [`GitUrl`]; [`serialize`] (also the `Display` impl) produces the
//! canonical `scheme://` form, so differently spelled addresses for the same
//! repository compare equal after a round trip.
//!
//! ```
//! let url = giturl::parse("git@github.com:owner/repo.git")?;
//! assert_eq!(url.scheme, giturl::Transport::Ssh);
//! assert_eq!(url.user.as_deref(), Some("git"));
//! assert_eq!(url.host, "github.com");
//! assert_eq!(url.path, "owner/repo.git");
//! assert_eq!(url.to_string(), "ssh://git@github.com/owner/repo.git");
//!
//! let local = giturl::parse("/srv/git/repo.git")?;
//! assert_eq!(giturl::serialize(&local), "file:///srv/git/repo.git");
//! # Ok::<(), giturl::GitUrlError>(())
//! ```

pub mod address;
pub mod error;

pub use crate::address::{
    GitUrl, Grammar, Transport, UrlPrimitive, WhatwgUrl, classify, compose, is_scp_like,
    is_windows_drive_path, parse, parse_local, parse_scp, parse_transport, parse_with, serialize,
    serialize_with,
};
pub use crate::error::{GitUrlError, Result};
