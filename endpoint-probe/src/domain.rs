//! Host label extraction for the `Site` column

use once_cell::sync::Lazy;
use regex::Regex;

/// `scheme://host[rest]` where the host is a run of letters and dots
pub static HOST_LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)([[:alpha:].]+)([/?#]\S*)?$")
        .expect("Failed to compile host label regex")
});

/// Reduce a URL to the host label shown in the report.
///
/// Alphabetic hosts are taken verbatim from the URL text. Anything the
/// pattern does not cover (IP literals, ports, IDN hosts, garbage) falls back
/// to the host reported by a full URL parser, and finally to the trimmed
/// input itself, so every URL yields a label.
pub fn extract_host(url: &str) -> String {
    if let Some(host) = HOST_LABEL_PATTERN
        .captures(url.trim())
        .and_then(|captures| captures.get(2))
    {
        return host.as_str().to_string();
    }

    url::Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hosts() {
        assert_eq!(extract_host("http://example.com"), "example.com");
        assert_eq!(extract_host("https://missing.example"), "missing.example");
        assert_eq!(extract_host("http://example.com/"), "example.com");
    }

    #[test]
    fn test_hyphenated_host_is_kept_whole() {
        assert_eq!(extract_host("https://www.rust-lang.org/learn"), "www.rust-lang.org");
    }

    #[test]
    fn test_host_with_path_and_query() {
        assert_eq!(
            extract_host("https://docs.example.org/guide/intro?lang=en"),
            "docs.example.org"
        );
    }

    #[test]
    fn test_ip_literal_falls_back_to_url_parser() {
        assert_eq!(extract_host("http://127.0.0.1:8080/health"), "127.0.0.1");
    }

    #[test]
    fn test_port_is_not_part_of_label() {
        assert_eq!(extract_host("http://localhost:3000/"), "localhost");
    }

    #[test]
    fn test_unparseable_input_is_returned_trimmed() {
        assert_eq!(extract_host("  not a url  "), "not a url");
        assert_eq!(extract_host(""), "");
    }
}
