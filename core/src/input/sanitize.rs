/// Trims the input and replaces curly quotes with their ASCII forms.
///
/// `“` and `”` become `"`, `‘` and `’` become `'`. Nothing else is touched.
pub fn sanitize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_straightens_double_quotes() {
        assert_eq!(
            sanitize("{“data”: [“A”, “1”]}"),
            r#"{"data": ["A", "1"]}"#
        );
    }

    #[test]
    fn test_sanitize_straightens_single_quotes() {
        assert_eq!(sanitize("‘it’s’"), "'it's'");
    }

    #[test]
    fn test_sanitize_trims_surrounding_whitespace() {
        assert_eq!(sanitize("\n\t {\"data\":[]}  \n"), r#"{"data":[]}"#);
    }

    #[test]
    fn test_sanitize_leaves_other_unicode_alone() {
        assert_eq!(sanitize("«ä» „x‟"), "«ä» „x‟");
    }
}
