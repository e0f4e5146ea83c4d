use regex::Regex;

fn external_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^data:").expect("invalid data URI regex"),
                Regex::new(r"^blob:").expect("invalid blob URL regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a media reference points outside the repository.
///
/// Absolute URLs, data URIs and blob URLs are passed through normalisation untouched and are
/// never resolved against the filesystem. Matching is case-sensitive, as in the gallery
/// front-end.
pub fn is_external_reference(value: &str) -> bool {
    external_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::is_external_reference;

    #[test]
    fn detects_http_urls() {
        assert!(is_external_reference("https://example.com/a.jpg"));
        assert!(is_external_reference("http://example.com/a.jpg"));
    }

    #[test]
    fn detects_data_and_blob_uris() {
        assert!(is_external_reference("data:image/png;base64,abc"));
        assert!(is_external_reference("blob:https://example.com/1234"));
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        assert!(!is_external_reference("HTTP://example.com"));
    }

    #[test]
    fn keeps_relative_paths() {
        assert!(!is_external_reference("gallery/photo.png"));
        assert!(!is_external_reference("httpdocs/photo.png"));
    }
}
