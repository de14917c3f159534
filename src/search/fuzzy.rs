//! Greedy subsequence matcher with a consecutive-run bonus.

/// Flat bonus when the text starts with the whole pattern.
pub const PREFIX_BONUS: u32 = 10;

/// Score how well `pattern` matches `text` as an in-order subsequence.
///
/// Both sides are lower-cased. Characters are consumed greedily left to
/// right; each matched character is worth `1 + 2 * run`, where `run` is the
/// number of matches immediately preceding it, so a contiguous run of length
/// `L` is worth `L²`. A text that starts with the pattern earns
/// [`PREFIX_BONUS`] on top.
///
/// Returns 0 when some pattern character cannot be found in order, and for an
/// empty pattern. Scores saturate at `u32::MAX`.
pub fn fuzzy_score(pattern: &str, text: &str) -> u32 {
    let pattern = pattern.to_lowercase();
    if pattern.is_empty() {
        return 0;
    }
    let text = text.to_lowercase();

    let mut remaining = pattern.chars().peekable();
    let mut score: u32 = 0;
    let mut consecutive: u32 = 0;

    for text_char in text.chars() {
        let Some(&pattern_char) = remaining.peek() else {
            break;
        };
        if pattern_char == text_char {
            score = score.saturating_add(consecutive.saturating_mul(2).saturating_add(1));
            consecutive = consecutive.saturating_add(1);
            remaining.next();
        } else {
            consecutive = 0;
        }
    }

    if remaining.peek().is_some() {
        return 0;
    }

    if text.starts_with(&pattern) {
        score = score.saturating_add(PREFIX_BONUS);
    }

    score
}
