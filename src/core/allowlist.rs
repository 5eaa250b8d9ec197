//! # Asset Origin Allowlist
//!
//! Restricts which remote hosts may supply images to the client. Patterns are
//! declarative, loaded from `[[images]]` tables in the config file, and a URL
//! is permitted iff at least one pattern matches it.
//!
//! A pattern with an empty hostname matches *any* host. That entry shipped in
//! the original configuration and is kept functional, but it is logged at
//! startup so an over-broad allowlist is visible in the log file.

use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

/// A single remote-origin pattern: `{ protocol, hostname, port, pathname }`.
///
/// Absent fields are unconstrained. `pathname` may end in `/**` to match any
/// deeper path; otherwise it must match exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
    pub protocol: Option<String>,
    #[serde(default)]
    pub hostname: String,
    pub port: Option<String>,
    pub pathname: Option<String>,
}

impl RemotePattern {
    /// True when this pattern matches the parsed URL.
    fn matches(&self, url: &Url) -> bool {
        if let Some(ref protocol) = self.protocol
            && url.scheme() != protocol
        {
            return false;
        }

        // Empty hostname is the permissive wildcard: any host matches.
        if !self.hostname.is_empty() {
            match url.host_str() {
                Some(host) if host == self.hostname => {}
                _ => return false,
            }
        }

        if let Some(ref port) = self.port {
            let url_port = url.port_or_known_default();
            match port.parse::<u16>() {
                Ok(expected) if url_port == Some(expected) => {}
                _ => return false,
            }
        }

        match self.pathname {
            None => true,
            Some(ref pathname) => match pathname.strip_suffix("/**") {
                Some(prefix) => {
                    let path = url.path();
                    path == prefix || path.starts_with(&format!("{}/", prefix))
                }
                None => url.path() == pathname,
            },
        }
    }

    fn is_wildcard_host(&self) -> bool {
        self.hostname.is_empty()
    }
}

/// Ordered collection of remote patterns.
#[derive(Clone, Debug, Default)]
pub struct OriginAllowlist {
    patterns: Vec<RemotePattern>,
}

impl OriginAllowlist {
    /// Build an allowlist, logging any permissive wildcard entries.
    pub fn new(patterns: Vec<RemotePattern>) -> Self {
        for pattern in &patterns {
            if pattern.is_wildcard_host() {
                warn!(
                    "Image allowlist contains a wildcard entry (empty hostname, pathname {:?}): any host will be permitted by it",
                    pattern.pathname
                );
            }
        }
        Self { patterns }
    }

    /// True when `url` is allowed by some pattern. Unparseable URLs are
    /// rejected outright.
    pub fn permits(&self, url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };
        self.patterns.iter().any(|pattern| pattern.matches(&parsed))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(
        protocol: Option<&str>,
        hostname: &str,
        port: Option<&str>,
        pathname: Option<&str>,
    ) -> RemotePattern {
        RemotePattern {
            protocol: protocol.map(String::from),
            hostname: hostname.to_string(),
            port: port.map(String::from),
            pathname: pathname.map(String::from),
        }
    }

    #[test]
    fn test_exact_host_and_path_prefix() {
        let list = OriginAllowlist::new(vec![pattern(
            Some("https"),
            "cdn.example.com",
            None,
            Some("/avatars/**"),
        )]);
        assert!(list.permits("https://cdn.example.com/avatars/42.png"));
        assert!(list.permits("https://cdn.example.com/avatars/a/b.png"));
        assert!(!list.permits("https://cdn.example.com/banners/1.png"));
        assert!(!list.permits("https://other.example.com/avatars/42.png"));
    }

    #[test]
    fn test_protocol_mismatch_rejected() {
        let list = OriginAllowlist::new(vec![pattern(
            Some("https"),
            "cdn.example.com",
            None,
            None,
        )]);
        assert!(!list.permits("http://cdn.example.com/x.png"));
        assert!(list.permits("https://cdn.example.com/x.png"));
    }

    #[test]
    fn test_wildcard_host_matches_anything() {
        let list = OriginAllowlist::new(vec![pattern(None, "", None, Some("/**"))]);
        assert!(list.permits("https://anything.example/img.png"));
        assert!(list.permits("http://10.0.0.1/deep/path.png"));
    }

    #[test]
    fn test_port_constraint() {
        let list = OriginAllowlist::new(vec![pattern(
            Some("http"),
            "localhost",
            Some("8080"),
            None,
        )]);
        assert!(list.permits("http://localhost:8080/img.png"));
        assert!(!list.permits("http://localhost:9090/img.png"));
        // port 80 is the known default for http
        assert!(!list.permits("http://localhost/img.png"));
    }

    #[test]
    fn test_exact_pathname() {
        let list = OriginAllowlist::new(vec![pattern(
            None,
            "cdn.example.com",
            None,
            Some("/logo.png"),
        )]);
        assert!(list.permits("https://cdn.example.com/logo.png"));
        assert!(!list.permits("https://cdn.example.com/logo.png/extra"));
        assert!(!list.permits("https://cdn.example.com/other.png"));
    }

    #[test]
    fn test_prefix_wildcard_does_not_match_sibling() {
        // "/img/**" must not match "/imgs/x" even though it shares a prefix.
        let list = OriginAllowlist::new(vec![pattern(
            None,
            "cdn.example.com",
            None,
            Some("/img/**"),
        )]);
        assert!(list.permits("https://cdn.example.com/img/x.png"));
        assert!(list.permits("https://cdn.example.com/img"));
        assert!(!list.permits("https://cdn.example.com/imgs/x.png"));
    }

    #[test]
    fn test_unparseable_url_rejected() {
        let list = OriginAllowlist::new(vec![pattern(None, "", None, None)]);
        assert!(!list.permits("not a url"));
        assert!(!list.permits(""));
    }

    #[test]
    fn test_empty_allowlist_rejects_everything() {
        let list = OriginAllowlist::default();
        assert!(list.is_empty());
        assert!(!list.permits("https://cdn.example.com/img.png"));
    }
}
