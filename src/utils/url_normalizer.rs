//! Best-effort repair of user-typed URLs.
//!
//! The shortener service rejects anything that is not an absolute HTTP(S)
//! URL, but people type `example.com`, `htto://example.com` or
//! `http:example.com`. This module fixes what can be fixed at the string
//! level before the URL is submitted; no network validation is performed.

use regex::Regex;
use std::sync::LazyLock;

/// Leading 4-character token that differs from `http` in exactly one
/// position (case-insensitive). Transpositions, insertions and deletions
/// are deliberately not corrected.
static MISTYPED_HTTP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^hH][tT][tT][pP]|[hH][^tT][tT][pP]|[hH][tT][^tT][pP]|[hH][tT][tT][^pP])")
        .unwrap()
});

/// Broken leading sequence: `:`, `://`, one or more slashes, or `https:`
/// with the slashes mangled (`https:example.com`, `https:/example.com`).
static BAD_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(:/*|/+|https:/*)").unwrap());

/// `http:` with zero or more slashes (`http:example.com`, `http:/example.com`).
static BAD_PREFIX_HTTP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^http:/*").unwrap());

/// Something scheme-like is already present: `xxxx://...`, or the string
/// starts with a non-alphabetic character.
static SCHEME_PRESENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+://|[^a-zA-Z])").unwrap());

/// Normalizes a user-typed URL to a best-effort absolute form.
///
/// # Normalization Rules
///
/// Applied in order:
///
/// 1. **Mistyped scheme repair**: a leading token one substitution away
///    from `http` (e.g. `htto`, `hktp`) is replaced with `http`.
/// 2. **Bad-prefix normalization**: a leading `:`, run of slashes, or
///    `https:` with mangled slashes is replaced with `https://`.
/// 3. **HTTP-prefix normalization**: a leading `http:` with mangled
///    slashes is replaced with `http://`.
/// 4. **Scheme fallback**: if no scheme-like prefix remains, `https://`
///    is prepended.
///
/// The function is total and idempotent: any input produces some output,
/// and normalizing twice changes nothing. Pathological input yields a
/// possibly-nonsensical but well-prefixed string; the service decides
/// whether it is actually shortenable.
///
/// The empty string normalizes to `"https://"`.
///
/// # Examples
///
/// ```
/// use url_shortener_cli::utils::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("htto://example.com"), "http://example.com");
/// assert_eq!(normalize_url("//example.com"), "https://example.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    let url = MISTYPED_HTTP_REGEX.replace(input, "http");
    let url = BAD_PREFIX_REGEX.replace(&url, "https://");
    let url = BAD_PREFIX_HTTP_REGEX.replace(&url, "http://");

    if SCHEME_PRESENT_REGEX.is_match(&url) {
        url.into_owned()
    } else {
        format!("https://{url}")
    }
}

/// Final guard before submission: any non-empty value still lacking an
/// `http://` or `https://` prefix gets `https://` prepended.
///
/// [`normalize_url`] leaves some values untouched on purpose (anything
/// starting with a non-alphabetic character, or with a non-HTTP scheme
/// like `ftp://`); this makes sure what goes over the wire is at least
/// shaped like a web URL.
pub fn ensure_web_scheme(url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_domain() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_http_untouched() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_https_untouched() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_mistyped_first_char() {
        assert_eq!(normalize_url("kttp://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_mistyped_second_char() {
        assert_eq!(normalize_url("hktp://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_mistyped_third_char() {
        assert_eq!(normalize_url("htkp://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_mistyped_fourth_char() {
        assert_eq!(normalize_url("htto://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_mistyped_uppercase() {
        assert_eq!(normalize_url("hTTo://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_mistyped_https() {
        // `httos` repairs to `https`, then the bad-prefix rewrite fixes the slashes.
        assert_eq!(normalize_url("httos://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_transposition_not_corrected() {
        // `htpt` is a transposition, not a substitution; the scheme check
        // sees no `://` and an alphabetic start, so `https://` is prepended.
        assert_eq!(
            normalize_url("htpt//example.com"),
            "https://htpt//example.com"
        );
    }

    #[test]
    fn test_normalize_leading_colon() {
        assert_eq!(normalize_url(":example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_leading_colon_slashes() {
        assert_eq!(normalize_url("://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_single_leading_slash() {
        assert_eq!(normalize_url("/example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_double_leading_slash() {
        assert_eq!(normalize_url("//example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_https_missing_slashes() {
        assert_eq!(normalize_url("https:example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_https_one_slash() {
        assert_eq!(normalize_url("https:/example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_https_many_slashes() {
        assert_eq!(normalize_url("https:////example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_http_missing_slashes() {
        assert_eq!(normalize_url("http:example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_http_one_slash() {
        assert_eq!(normalize_url("http:/example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_http_many_slashes() {
        assert_eq!(normalize_url("http:///example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_other_scheme_untouched() {
        assert_eq!(normalize_url("ftp://example.com"), "ftp://example.com");
    }

    #[test]
    fn test_normalize_ip_address_untouched() {
        // Starts with a digit, so the scheme check leaves it alone.
        assert_eq!(normalize_url("192.168.1.1"), "192.168.1.1");
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize_url(""), "https://");
    }

    #[test]
    fn test_normalize_path_and_query_preserved() {
        assert_eq!(
            normalize_url("example.com/path?q=rust&lang=en"),
            "https://example.com/path?q=rust&lang=en"
        );
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "example.com",
            "http://example.com",
            "https://example.com",
            "htto://example.com",
            "//example.com",
            "http:example.com",
            "https:example.com",
            ":example.com",
            "ftp://example.com",
            "192.168.1.1",
            "",
            "banana",
            "http:////example.com/a#b",
            "hTTo://example.com",
        ];

        for input in inputs {
            let once = normalize_url(input);
            let twice = normalize_url(&once);
            assert_eq!(once, twice, "not idempotent for input {input:?}");
        }
    }

    #[test]
    fn test_ensure_web_scheme_prefixes_bare_value() {
        assert_eq!(ensure_web_scheme("192.168.1.1"), "https://192.168.1.1");
    }

    #[test]
    fn test_ensure_web_scheme_leaves_http() {
        assert_eq!(
            ensure_web_scheme("http://example.com"),
            "http://example.com"
        );
    }

    #[test]
    fn test_ensure_web_scheme_leaves_https() {
        assert_eq!(
            ensure_web_scheme("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn test_ensure_web_scheme_leaves_empty() {
        assert_eq!(ensure_web_scheme(""), "");
    }

    #[test]
    fn test_ensure_web_scheme_prefixes_other_scheme() {
        assert_eq!(
            ensure_web_scheme("ftp://example.com"),
            "https://ftp://example.com"
        );
    }
}
