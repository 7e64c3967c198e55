//! Metric name sanitization and key building
//!
//! Metric identifiers are assembled from a namespace, a subsystem and any
//! number of trailing segments. Namespace and subsystem usually come from
//! configuration or user input, so they are sanitized first; trailing
//! segments are fixed names chosen by the caller and are joined verbatim.

/// Separator placed between key segments
pub const SEPARATOR: char = '_';

/// Whether `c` may appear in a sanitized identifier
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Turn arbitrary text into a metric-name-safe identifier segment.
///
/// Whitespace splits the text into words, which are rejoined with `_`.
/// Characters outside `[A-Za-z0-9_-]` are dropped from the word they appear
/// in, and words that end up empty are skipped, so separators never double
/// up and never lead or trail.
///
/// ```
/// use promkit_core::sanitize;
///
/// assert_eq!(sanitize("  http probe "), "http_probe");
/// assert_eq!(sanitize("subsystem(test)"), "subsystemtest");
/// assert_eq!(sanitize(""), "");
/// ```
pub fn sanitize(text: &str) -> String {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| word.chars().filter(|c| is_identifier_char(*c)).collect())
        .filter(|word: &String| !word.is_empty())
        .collect();
    words.join("_")
}

/// Join sanitized `namespace` and `subsystem` with the `extra` segments.
///
/// Empty segments at any position are omitted.
pub fn build_key(namespace: &str, subsystem: &str, extra: &[&str]) -> String {
    let namespace = sanitize(namespace);
    let subsystem = sanitize(subsystem);

    let mut key = String::new();
    let segments = [namespace.as_str(), subsystem.as_str()]
        .into_iter()
        .chain(extra.iter().copied())
        .filter(|segment| !segment.is_empty());
    for segment in segments {
        if !key.is_empty() {
            key.push(SEPARATOR);
        }
        key.push_str(segment);
    }
    key
}

/// Key shared by every metric under a namespace/subsystem pair
pub fn metric_prefix(namespace: &str, subsystem: &str) -> String {
    build_key(namespace, subsystem, &[])
}

/// Key identifying a single metric bundle
pub fn metric_key(namespace: &str, subsystem: &str, name: &str) -> String {
    build_key(namespace, subsystem, &[name])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize("hello   world"), "hello_world");
        assert_eq!(sanitize("\thello\n world  "), "hello_world");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn test_sanitize_drops_invalid_characters() {
        assert_eq!(sanitize("name@!$space"), "namespace");
        assert_eq!(sanitize("disk (sda1)"), "disk_sda1");
        assert_eq!(sanitize("@@ !!"), "");
        assert_eq!(sanitize("größe"), "gre");
    }

    #[test]
    fn test_sanitize_keeps_hyphen_and_underscore() {
        assert_eq!(sanitize("my-app_v2"), "my-app_v2");
    }

    #[test]
    fn test_build_key_empty() {
        assert_eq!(build_key("", "", &[""]), "");
        assert_eq!(build_key("", "", &[]), "");
    }

    #[test]
    fn test_build_key_namespace_name_metric() {
        assert_eq!(
            build_key("namespace", "", &["name", "metric"]),
            "namespace_name_metric"
        );
    }

    #[test]
    fn test_build_key_name_metric() {
        assert_eq!(build_key("", "", &["name", "metric"]), "name_metric");
    }

    #[test]
    fn test_build_key_namespace_subsystem_name() {
        assert_eq!(
            build_key("namespace", "subsystem", &["name", ""]),
            "namespace_subsystem_name"
        );
    }

    #[test]
    fn test_build_key_all_segments() {
        assert_eq!(
            build_key("namespace", "subsystem", &["name", "metric"]),
            "namespace_subsystem_name_metric"
        );
    }

    #[test]
    fn test_build_key_sanitizes_namespace_and_subsystem() {
        assert_eq!(
            build_key("name@!$space", "subsystem(test)", &["name", "metric"]),
            "namespace_subsystemtest_name_metric"
        );
    }

    #[test]
    fn test_prefix_and_key_shapes() {
        assert_eq!(metric_prefix("blackbox", "http"), "blackbox_http");
        assert_eq!(metric_prefix("", "http"), "http");
        assert_eq!(metric_key("blackbox", "http", "homepage"), "blackbox_http_homepage");
        assert_eq!(metric_key("blackbox", "http", ""), "blackbox_http");
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn proptest_sanitize_output_is_identifier(text in any::<String>()) {
            let out = sanitize(&text);
            prop_assert!(out.chars().all(is_identifier_char));
        }

        #[test]
        fn proptest_sanitize_is_idempotent(text in any::<String>()) {
            let once = sanitize(&text);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn proptest_build_key_has_no_empty_segments(
            namespace in "[ a-z@]{0,8}",
            subsystem in "[ a-z(]{0,8}",
            name in "[a-z]{0,6}",
        ) {
            let key = build_key(&namespace, &subsystem, &[&name]);
            prop_assert!(!key.starts_with(SEPARATOR));
            prop_assert!(!key.ends_with(SEPARATOR));
            prop_assert!(!key.contains("__"));
        }
    }
}
