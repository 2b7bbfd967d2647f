/// Whether `value` is a `#RRGGBB` or `#RGB` hex colour.
#[must_use]
pub fn is_valid_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_long_and_short_forms() {
        assert!(is_valid_hex_color("#FF6B6B"));
        assert!(is_valid_hex_color("#4ecdc4"));
        assert!(is_valid_hex_color("#abc"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_hex_color("FF6B6B"));
        assert!(!is_valid_hex_color("#FF6B6"));
        assert!(!is_valid_hex_color("#GGGGGG"));
        assert!(!is_valid_hex_color("#"));
        assert!(!is_valid_hex_color(""));
    }
}
