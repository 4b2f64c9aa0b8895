//! Token normalization

/// Lowercase `raw` and drop every character outside `[A-Za-z0-9_'-]`.
///
/// May return an empty string, which callers treat as "no token".
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize_token("KiNg"), "king");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize_token("\"woman,\""), "woman");
        assert_eq!(normalize_token("(paris)."), "paris");
    }

    #[test]
    fn test_keeps_allowed_symbols() {
        assert_eq!(normalize_token("rock-n-roll"), "rock-n-roll");
        assert_eq!(normalize_token("don't"), "don't");
        assert_eq!(normalize_token("snake_case9"), "snake_case9");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(normalize_token("café"), "caf");
        assert_eq!(normalize_token("日本"), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_token("!!!"), "");
        assert_eq!(normalize_token(""), "");
    }
}
