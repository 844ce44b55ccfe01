//! Cell text trimming.

use std::borrow::Cow;

/// Default truncation budget for table cells.
pub const DEFAULT_TRUNCATE_LEN: usize = 50;

/// Truncate to `max_len` characters with an ellipsis marker.
///
/// Input within budget is returned borrowed and unchanged. Counts
/// characters rather than bytes so multibyte text never splits a code
/// point. Total: no failure mode.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_len {
        return Cow::Borrowed(text);
    }
    let head: String = text.chars().take(max_len).collect();
    Cow::Owned(format!("{head}..."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert!(matches!(truncate("hello", 10), Cow::Borrowed(_)));
    }

    #[test]
    fn exact_length_is_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn empty_text_is_unchanged() {
        assert_eq!(truncate("", 50), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Five two-byte characters fit a five-char budget.
        assert_eq!(truncate("ééééé", 5), "ééééé");
        assert_eq!(truncate("éééééé", 5), "ééééé...");
    }
}
