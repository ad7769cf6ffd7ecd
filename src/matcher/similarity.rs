/// Levenshtein distance between `a` and `b`, counted in code points.
///
/// Insertions, deletions and substitutions each cost 1.
///
/// # Examples
///
/// ```
/// use tagmend::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("晴天", "雨天"), 1);
/// ```
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Similarity between two normalized strings, in `[0.0, 1.0]`.
///
/// - Identical strings score 1.0.
/// - An empty side scores 0.0.
/// - When one string contains the other, the score is the ratio of their
///   lengths in code points.
/// - Otherwise the score is `1 - distance / max_len`.
///
/// # Examples
///
/// ```
/// use tagmend::similarity;
///
/// assert_eq!(similarity("hello", "hello"), 1.0);
/// assert_eq!(similarity("hello world", "hello"), 5.0 / 11.0);
/// assert_eq!(similarity("", "hello"), 0.0);
/// ```
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if a.contains(b) || b.contains(a) {
        let (shorter, longer) = if len_a < len_b {
            (len_a, len_b)
        } else {
            (len_b, len_a)
        };
        return shorter as f64 / longer as f64;
    }

    let max_len = len_a.max(len_b);
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}
