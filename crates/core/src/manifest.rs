//! Manifest parsing: turns the input text file into (title, url) pairs.
//!
//! The manifest lists one article per line in the form
//! `...[Title]...https://url...`. Lines missing either token are skipped;
//! this is a filtering operation, not a validating one.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One parsed manifest line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Bracketed title, trimmed.
    pub title: String,
    /// First `https://` token on the line.
    pub url: String,
}

/// Parses manifest text into an ordered list of entries.
///
/// For each non-empty line containing both `[` and `]`, the first bracketed
/// substring becomes the title and the first `https://` run of
/// non-whitespace becomes the URL. A line contributes an entry only when
/// both are present. Output order matches input line order.
///
/// # Example
///
/// ```rust
/// use anthology_core::parse_manifest;
///
/// let entries = parse_manifest("1. [Sunrise] https://example.com/a");
/// assert_eq!(entries[0].title, "Sunrise");
/// assert_eq!(entries[0].url, "https://example.com/a");
/// ```
pub fn parse_manifest(text: &str) -> Vec<ManifestEntry> {
    let title_re = Regex::new(r"\[(.*?)\]").unwrap();
    let url_re = Regex::new(r"https://\S+").unwrap();

    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || !line.contains('[') || !line.contains(']') {
                return None;
            }
            let title = title_re.captures(line)?.get(1)?.as_str().trim().to_string();
            let url = url_re.find(line)?.as_str().to_string();
            Some(ManifestEntry { title, url })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_manifest_scenario() {
        let text = "1. [Sunrise] https://example.com/a\n2. not a valid line\n3. [Dusk] https://example.com/b";
        let entries = parse_manifest(text);
        assert_eq!(
            entries,
            vec![
                ManifestEntry { title: "Sunrise".to_string(), url: "https://example.com/a".to_string() },
                ManifestEntry { title: "Dusk".to_string(), url: "https://example.com/b".to_string() },
            ]
        );
    }

    #[rstest]
    #[case("[Only Title] no url here")]
    #[case("https://example.com/no-title")]
    #[case("[Unclosed https://example.com/a")]
    #[case("")]
    #[case("   ")]
    fn test_lines_missing_a_token_yield_nothing(#[case] line: &str) {
        assert!(parse_manifest(line).is_empty());
    }

    #[test]
    fn test_title_is_trimmed() {
        let entries = parse_manifest("[  Padded Title  ] https://example.com/a");
        assert_eq!(entries[0].title, "Padded Title");
    }

    #[test]
    fn test_first_bracket_and_first_url_win() {
        let entries = parse_manifest("[First] [Second] https://example.com/1 https://example.com/2");
        assert_eq!(entries[0].title, "First");
        assert_eq!(entries[0].url, "https://example.com/1");
    }

    #[test]
    fn test_order_matches_input() {
        let text = "[A] https://example.com/a\n[B] https://example.com/b\n[C] https://example.com/c";
        let titles: Vec<_> = parse_manifest(text).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_http_scheme_is_not_accepted() {
        assert!(parse_manifest("[Insecure] http://example.com/a").is_empty());
    }
}
