// src/core/validator.rs

//! Syntactic URL validation.
//!
//! This check gates all network activity in the pipeline, so ambiguous
//! inputs (internationalized top-level labels, unusual schemes) are
//! rejected rather than given the benefit of the doubt. It is a pure
//! function: no network access, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::{Host, Url};

/// Schemes the pipeline will follow.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

// Registered hostnames: LDH labels up to 63 characters, and a purely
// alphabetic top-level label of at least two characters. The host is
// matched in its punycoded form, so an internationalized top-level label
// fails this grammar.
static RE_HOSTNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$").unwrap()
});

// The raw candidate must carry an explicit scheme and authority separator.
// `Url::parse` alone would quietly repair forms like "http:example.com".
static RE_SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap());

/// Returns true when `candidate` is an acceptable URL: an allow-listed
/// scheme, an authority holding either a registered hostname with a valid
/// top-level label or a literal IP address, an optional port in 1..=65535,
/// and an optional path/query/fragment.
///
/// Empty strings, strings with embedded whitespace, and strings lacking a
/// `scheme://` prefix are rejected outright.
pub fn validate(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return false;
    }
    if !RE_SCHEME_PREFIX.is_match(candidate) {
        return false;
    }

    let url = match Url::parse(candidate) {
        Ok(url) => url,
        Err(e) => {
            debug!(error = %e, "Candidate failed to parse.");
            return false;
        }
    };

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return false;
    }
    // The parser already rejects ports above 65535; zero it lets through.
    if url.port() == Some(0) {
        return false;
    }

    match url.host() {
        Some(Host::Domain(domain)) => RE_HOSTNAME.is_match(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_urls() {
        assert!(validate("http://example.com"));
        assert!(validate("https://example.com/path"));
        assert!(validate("https://sub.example.co.uk/a/b?q=1#frag"));
        assert!(validate("ftp://mirror.example.org/pub/file.tar.gz"));
        assert!(validate("http://example.com:8080/path"));
    }

    #[test]
    fn accepts_ip_literals() {
        assert!(validate("http://192.168.0.1/"));
        assert!(validate("http://127.0.0.1:8000/health"));
        assert!(validate("http://[::1]:8080/"));
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(!validate(""));
        assert!(!validate("http://exa mple.com"));
        assert!(!validate("http://example.com/a path"));
        assert!(!validate(" http://example.com"));
        assert!(!validate("http://example.com\n"));
    }

    #[test]
    fn rejects_missing_scheme_or_separator() {
        assert!(!validate("example.com"));
        assert!(!validate("www.example.com/path"));
        assert!(!validate("http:example.com"));
        assert!(!validate("http:/example.com"));
        assert!(!validate("://example.com"));
    }

    #[test]
    fn rejects_disallowed_schemes() {
        assert!(!validate("javascript://example.com"));
        assert!(!validate("file:///etc/passwd"));
        assert!(!validate("gopher://example.com"));
        assert!(!validate("data://example.com"));
    }

    #[test]
    fn rejects_malformed_authorities() {
        assert!(!validate("http://"));
        assert!(!validate("http://localhost"));
        assert!(!validate("http://example"));
        assert!(!validate("http://example."));
        assert!(!validate("http://example.c"));
        assert!(!validate("http://-bad-.com"));
        assert!(!validate("http://example.com."));
    }

    #[test]
    fn rejects_out_of_range_ports() {
        assert!(!validate("http://example.com:0/"));
        assert!(!validate("http://example.com:70000/"));
        assert!(validate("http://example.com:65535/"));
        assert!(validate("http://example.com:1/"));
    }

    #[test]
    fn rejects_numeric_top_level_labels() {
        assert!(!validate("http://example.123"));
        assert!(!validate("http://example.xn--p1ai"));
    }
}
