use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a letter, number or whitespace.
///
/// `\s` here is Unicode whitespace, so U+3000 and friends survive as
/// separators instead of being stripped like punctuation.
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("valid punctuation pattern"));

/// Any run of Unicode whitespace, not just ASCII.
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Canonical form of `text` used only for comparison.
///
/// # Normalization rules
///
/// - Removes every character that is not a Unicode letter, number or whitespace
/// - Collapses whitespace runs into a single space
/// - Trims both ends
/// - Lowercases each character on its own, without context rules such as
///   the Greek final sigma
///
/// # Examples
///
/// ```
/// use tagmend::normalize;
///
/// assert_eq!(normalize("Shape of You (Remix)"), "shape of you remix");
/// assert_eq!(normalize("晴天（live）"), "晴天live");
/// assert_eq!(normalize("  Anti-Hero  "), "antihero");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped = PUNCTUATION.replace_all(text, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_conversion() {
        assert_eq!(normalize("SING ME TO SLEEP"), "sing me to sleep");
        assert_eq!(normalize("ÉTÉ"), "été");
    }

    #[test]
    fn test_lowercase_is_per_character() {
        // Context-free: a trailing capital sigma maps to σ, not ς.
        assert_eq!(normalize("ΟΔΟΣ"), "οδοσ");
        assert!(normalize("ΟΔΟΣ(LIVE)").contains(&normalize("ΟΔΟΣ")));
    }

    #[test]
    fn test_punctuation_removal() {
        assert_eq!(normalize("Don't Stop!"), "dont stop");
        assert_eq!(normalize("(Official Video)"), "official video");
        assert_eq!(normalize("A.B.C."), "abc");
        assert_eq!(normalize("÷"), "");
    }

    #[test]
    fn test_full_width_punctuation_removal() {
        assert_eq!(normalize("晴天（live）"), "晴天live");
        assert_eq!(normalize("「夜曲」"), "夜曲");
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        assert_eq!(normalize("  hello \t\n  world  "), "hello world");
        assert_eq!(normalize("a - b"), "a b");
    }

    #[test]
    fn test_unicode_whitespace_is_kept_as_separator() {
        assert_eq!(normalize("晴天\u{3000}周杰伦"), "晴天 周杰伦");
    }

    #[test]
    fn test_numbers_are_kept() {
        assert_eq!(normalize("Track 01"), "track 01");
        assert_eq!(normalize("Ⅻ ²"), "ⅻ ²");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! ???"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Alan Walker _ Iselin Solheim");
        assert_eq!(normalize(&once), once);
    }
}
