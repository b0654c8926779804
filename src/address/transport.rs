//! Transport schemes understood by git

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheme of a parsed address
///
/// The recognized git transports get their own variant; any other explicit
/// scheme is carried through verbatim as [`Transport::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Transport {
    Ssh,
    Git,
    GitSsh,
    Http,
    Https,
    Ftp,
    Ftps,
    Rsync,
    File,
    Other(String),
}

impl Transport {
    /// All recognized transports, in the order git documents them
    pub const KNOWN: [Transport; 9] = [
        Transport::Ssh,
        Transport::Git,
        Transport::GitSsh,
        Transport::Http,
        Transport::Https,
        Transport::Ftp,
        Transport::Ftps,
        Transport::Rsync,
        Transport::File,
    ];

    /// Map a scheme name onto a transport; unknown names become `Other`
    ///
    /// Scheme names are case-insensitive, as in RFC 3986.
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme.to_ascii_lowercase().as_str() {
            "ssh" => Transport::Ssh,
            "git" => Transport::Git,
            "git+ssh" => Transport::GitSsh,
            "http" => Transport::Http,
            "https" => Transport::Https,
            "ftp" => Transport::Ftp,
            "ftps" => Transport::Ftps,
            "rsync" => Transport::Rsync,
            "file" => Transport::File,
            _ => Transport::Other(scheme.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Transport::Ssh => "ssh",
            Transport::Git => "git",
            Transport::GitSsh => "git+ssh",
            Transport::Http => "http",
            Transport::Https => "https",
            Transport::Ftp => "ftp",
            Transport::Ftps => "ftps",
            Transport::Rsync => "rsync",
            Transport::File => "file",
            Transport::Other(scheme) => scheme,
        }
    }

    /// Whether this is one of the fixed set of git transports
    pub fn is_known(&self) -> bool {
        !matches!(self, Transport::Other(_))
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Transport {
    fn from(scheme: &str) -> Self {
        Transport::from_scheme(scheme)
    }
}

impl From<String> for Transport {
    fn from(scheme: String) -> Self {
        Transport::from_scheme(&scheme)
    }
}

impl From<Transport> for String {
    fn from(transport: Transport) -> Self {
        transport.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_transports_roundtrip_names() {
        for transport in Transport::KNOWN {
            assert_eq!(Transport::from_scheme(transport.as_str()), transport);
            assert!(transport.is_known());
        }
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(Transport::from_scheme("HTTPS"), Transport::Https);
        assert_eq!(Transport::from_scheme("Git+SSH"), Transport::GitSsh);
    }

    #[test]
    fn test_unknown_scheme_carried_verbatim() {
        let transport = Transport::from_scheme("svn+ssh");
        assert_eq!(transport, Transport::Other("svn+ssh".to_string()));
        assert_eq!(transport.to_string(), "svn+ssh");
        assert!(!transport.is_known());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Transport::GitSsh).unwrap();
        assert_eq!(json, "\"git+ssh\"");
        let back: Transport = serde_json::from_str("\"rsync\"").unwrap();
        assert_eq!(back, Transport::Rsync);
    }
}
