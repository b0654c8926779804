//! Library integration tests for address parsing and normalization

use giturl::{GitUrl, GitUrlError, Grammar, Transport, UrlPrimitive, compose, parse, serialize};

#[test]
fn test_scp_with_user() {
    let url = parse("user@host.xz:path/to/repo.git/").unwrap();
    assert_eq!(url.scheme, Transport::Ssh);
    assert_eq!(url.user.as_deref(), Some("user"));
    assert_eq!(url.host, "host.xz");
    assert_eq!(url.path, "path/to/repo.git/");
    assert_eq!(serialize(&url), "ssh://user@host.xz/path/to/repo.git/");
}

#[test]
fn test_scp_with_absolute_path() {
    let url = parse("host.xz:/path/to/repo.git/").unwrap();
    assert_eq!(url.scheme, Transport::Ssh);
    assert_eq!(url.user, None);
    assert_eq!(url.host, "host.xz");
    assert_eq!(url.path, "/path/to/repo.git/");
    assert_eq!(serialize(&url), "ssh://host.xz/path/to/repo.git/");
}

#[test]
fn test_local_absolute_path() {
    let url = parse("/path/to/repo.git/").unwrap();
    assert_eq!(url, GitUrl::local("/path/to/repo.git/"));
    assert_eq!(serialize(&url), "file:///path/to/repo.git/");
}

#[test]
fn test_git_url_with_port_round_trips() {
    let input = "git://host.xz:1234/path/to/repo.git/";
    let url = parse(input).unwrap();
    assert_eq!(url.host, "host.xz:1234");
    assert_eq!(url.port(), Some(1234));
    assert_eq!(serialize(&url), input);
}

#[test]
fn test_canonical_urls_round_trip_for_every_transport() {
    for scheme in ["git", "http", "https", "ftp", "ftps", "rsync", "git+ssh", "ssh"] {
        for authority in ["host.xz", "host.xz:1234"] {
            let input = format!("{scheme}://{authority}/path/to/repo.git/");
            let url = parse(&input).unwrap();
            assert_eq!(url.scheme.as_str(), scheme);
            assert_eq!(url.host, authority);
            assert_eq!(url.path, "/path/to/repo.git/");
            assert_eq!(serialize(&url), input);
        }
    }
}

#[test]
fn test_idempotent_normalization() {
    for input in [
        "user@host.xz:path/to/repo.git/",
        "host.xz:/path/to/repo.git/",
        "/path/to/repo.git/",
        "file:///path/to/repo.git/",
        "git@github.com:owner/repo.git",
        "https://user@host.xz:8443/repo.git?x=1#y",
        "[::1]:repo.git",
    ] {
        let once = serialize(&parse(input).unwrap());
        let twice = serialize(&parse(&once).unwrap());
        assert_eq!(once, twice, "{input}");
    }
}

#[test]
fn test_equivalent_spellings_share_canonical_form() {
    let spellings = [
        "git@github.com:owner/repo.git",
        "ssh://git@github.com/owner/repo.git",
        "git@github.com:/owner/repo.git",
    ];
    let canonical: Vec<String> = spellings
        .iter()
        .map(|s| parse(s).unwrap().to_string())
        .collect();
    assert!(canonical.iter().all(|c| c == "ssh://git@github.com/owner/repo.git"));
}

#[test]
fn test_malformed_url_has_no_partial_result() {
    let result = parse("ftp://host.xz/%GGrepo.git");
    match result {
        Err(GitUrlError::MalformedUrl { input, .. }) => {
            assert_eq!(input, "ftp://host.xz/%GGrepo.git");
        }
        other => panic!("expected MalformedUrl, got {other:?}"),
    }
}

#[test]
fn test_classification_is_total() {
    for input in ["", ":", "@", "::", "a:", "//", "[", "]:x", "\u{e9}:repo"] {
        let grammar = giturl::classify(input);
        assert!(
            matches!(
                grammar,
                Grammar::AbsoluteUrl | Grammar::ScpLike | Grammar::LocalPath
            ),
            "{input:?}"
        );
        if grammar != Grammar::AbsoluteUrl {
            assert!(parse(input).is_ok(), "{input:?}");
        }
    }
}

/// Rejects URLs containing "evil", accepts the rest via the default primitive
struct Blocklist;

impl UrlPrimitive for Blocklist {
    fn parse_absolute(&self, input: &str) -> Result<GitUrl, String> {
        if input.contains("evil") {
            return Err("blocked host".to_string());
        }
        giturl::WhatwgUrl.parse_absolute(input)
    }

    fn serialize_absolute(&self, url: &GitUrl) -> String {
        compose(url)
    }
}

#[test]
fn test_injected_primitive() {
    let err = giturl::parse_with("https://evil.example/repo.git", &Blocklist).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed URL 'https://evil.example/repo.git': blocked host"
    );

    let url = giturl::parse_with("https://good.example/repo.git", &Blocklist).unwrap();
    assert_eq!(
        giturl::serialize_with(&url, &Blocklist),
        "https://good.example/repo.git"
    );
}
