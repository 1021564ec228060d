//! Site and logo URL normalization.
//!
//! These helpers are deliberately literal: they prepend schemes and join
//! strings without canonicalising paths, so a relative logo reference like
//! `/logo.png` resolves to `https://host//logo.png`.

use crate::{Error, Result};
use url::Url;

/// Prefix that marks an input as already scheme-qualified (`http://`, `https://`).
pub const SCHEME_PREFIX: &str = "http";

/// Scheme prepended to bare domains.
pub const SECURE_SCHEME: &str = "https://";

/// Return `input` unchanged when it already starts with a scheme, otherwise
/// prefix it with `https://`.
///
/// ```
/// assert_eq!(logohue::url_utils::normalize_site_url("example.com"), "https://example.com");
/// assert_eq!(logohue::url_utils::normalize_site_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_site_url(input: &str) -> String {
    if input.starts_with(SCHEME_PREFIX) {
        input.to_string()
    } else {
        format!("{}{}", SECURE_SCHEME, input)
    }
}

/// Parse `url` and return its host, with `:port` appended when the URL names
/// a non-default port.
pub fn extract_host(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| Error::malformed(url, e))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| Error::malformed(url, "URL has no host"))?;
    Ok(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Resolve a logo reference found in markup against the site it came from.
///
/// Absolute references are returned untouched. Anything else is appended to
/// `https://<host[:port] of site>`, with a `/` inserted unless the reference already
/// ends with one.
pub fn resolve_logo_url(candidate: &str, site: &str) -> Result<String> {
    if candidate.starts_with(SCHEME_PREFIX) {
        return Ok(candidate.to_string());
    }

    let base = format!("{}{}", SECURE_SCHEME, extract_host(&normalize_site_url(site))?);
    if candidate.ends_with('/') {
        Ok(format!("{}{}", base, candidate))
    } else {
        Ok(format!("{}/{}", base, candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_identity_for_scheme_prefixed_input() {
        for s in ["http://a.test", "https://a.test/x?y=1", "httpfoo"] {
            assert_eq!(normalize_site_url(s), s);
        }
    }

    #[test]
    fn normalize_prepends_secure_scheme() {
        for s in ["a.test", "www.example.org/path", "", "ftp://x"] {
            let out = normalize_site_url(s);
            assert!(out.starts_with(SECURE_SCHEME));
            assert_eq!(&out[SECURE_SCHEME.len()..], s);
        }
    }

    #[test]
    fn extract_host_reads_host() {
        assert_eq!(extract_host("https://www.example.com/a/b").unwrap(), "www.example.com");
        assert_eq!(extract_host("http://127.0.0.1:8080/").unwrap(), "127.0.0.1:8080");
        assert_eq!(extract_host("https://example.com:443/").unwrap(), "example.com");
    }

    #[test]
    fn extract_host_rejects_malformed_input() {
        assert!(matches!(extract_host("not a url"), Err(Error::MalformedUrl { .. })));
        assert!(matches!(extract_host("https://"), Err(Error::MalformedUrl { .. })));
        assert!(matches!(extract_host("file:///tmp/x"), Err(Error::MalformedUrl { .. })));
    }

    #[test]
    fn resolve_relative_reference() {
        assert_eq!(resolve_logo_url("logo.png", "example.com").unwrap(), "https://example.com/logo.png");
        assert_eq!(
            resolve_logo_url("img/logo.svg", "http://example.com/index.html").unwrap(),
            "https://example.com/img/logo.svg"
        );
    }

    #[test]
    fn resolve_keeps_site_port() {
        assert_eq!(
            resolve_logo_url("logo.png", "example.com:8443").unwrap(),
            "https://example.com:8443/logo.png"
        );
        assert_eq!(
            resolve_logo_url("assets/logo.png", "http://127.0.0.1:3000").unwrap(),
            "https://127.0.0.1:3000/assets/logo.png"
        );
    }

    #[test]
    fn resolve_keeps_separators_literal() {
        assert_eq!(resolve_logo_url("/logo.png", "example.com").unwrap(), "https://example.com//logo.png");
        assert_eq!(resolve_logo_url("/", "example.com").unwrap(), "https://example.com/");
        assert_eq!(resolve_logo_url("assets/", "example.com").unwrap(), "https://example.comassets/");
    }

    #[test]
    fn resolve_is_idempotent_on_absolute_candidates() {
        let site = "example.com";
        for c in ["https://cdn.test/logo.png", "http://x.test/a.gif", "logo.png"] {
            let once = resolve_logo_url(c, site).unwrap();
            let twice = resolve_logo_url(&once, site).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn resolve_propagates_malformed_site() {
        let err = resolve_logo_url("logo.png", "http://").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));
    }
}
