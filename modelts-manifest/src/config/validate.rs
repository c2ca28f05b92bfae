//! Source-span lookup for configuration diagnostics.

use miette::SourceSpan;

/// Find the span of a key in the TOML source.
///
/// Matches bare (`key =`) and quoted (`"key" =`) keys at the start of a line,
/// including quoted keys whose backslashes are escaped in the source.
pub fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let candidates = [
        key.to_string(),
        format!("\"{}\"", key),
        format!("\"{}\"", key.replace('\\', "\\\\")),
        format!("'{}'", key),
    ];

    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        for candidate in &candidates {
            if let Some(rest) = trimmed.strip_prefix(candidate.as_str())
                && rest.trim_start().starts_with('=')
            {
                return Some(SourceSpan::from((offset + indent, candidate.len())));
            }
        }

        offset += line.len();
    }

    // No fallback - better to have no span than point to wrong location
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_bare_key() {
        let src = "snapshot = \"a.json\"\noutput_path = \"\"\n";
        let span = find_key_span(src, "output_path").unwrap();
        assert_eq!(span.offset(), 20);
        assert_eq!(span.len(), 11);
    }

    #[test]
    fn test_find_indented_key() {
        let src = "[custom_attributes]\n    fallback_return_type = \"\"\n";
        let span = find_key_span(src, "fallback_return_type").unwrap();
        assert_eq!(span.offset(), 24);
    }

    #[test]
    fn test_find_escaped_quoted_key() {
        let src = "\"Money\\\\Money\" = \"\"\n";
        let span = find_key_span(src, "Money\\Money").unwrap();
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), 14);
    }

    #[test]
    fn test_key_prefix_does_not_match() {
        let src = "output_path_extra = 1\n";
        assert!(find_key_span(src, "output_path").is_none());
    }

    #[test]
    fn test_key_in_value_does_not_match() {
        let src = "snapshot = \"output_path = x\"\n";
        assert!(find_key_span(src, "output_path").is_none());
    }
}
