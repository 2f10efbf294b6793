//! Word boundary classification for the word-jump motions.

/// Characters that separate words.
pub const WORD_SEPARATORS: &str = "`~!@#$%^&*()-=+[{]}\\|;:'\",.<>/? ";

/// Returns true if `c` separates words.
pub fn is_separator(c: char) -> bool {
    WORD_SEPARATORS.contains(c)
}

/// Same as [`is_separator`], treating a missing character as a non-separator.
pub fn is_separator_at(text: &[char], index: usize) -> bool {
    text.get(index).copied().is_some_and(is_separator)
}

/// Index of the first separator at or after `start`.
pub fn next_separator(text: &[char], start: usize) -> Option<usize> {
    (start..text.len()).find(|&i| is_separator(text[i]))
}

/// Scans backward from `start` down to index 1 for a separator followed by a
/// non-separator, returning the index of that non-separator.
pub fn previous_word_start(text: &[char], start: isize) -> Option<usize> {
    let mut i = start;
    while i > 0 {
        let idx = i as usize;
        if is_separator_at(text, idx) && !is_separator_at(text, idx + 1) {
            return Some(idx + 1);
        }
        i -= 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_separator_set() {
        for c in " .,;:!?()[]{}<>/\\|'\"`~@#$%^&*-=+".chars() {
            assert!(is_separator(c), "{c:?} should separate words");
        }
        for c in ['a', 'Z', '0', '_', '\t', 'é'] {
            assert!(!is_separator(c), "{c:?} should not separate words");
        }
    }

    #[test]
    fn test_next_separator() {
        let text = chars("hello world");
        assert_eq!(next_separator(&text, 0), Some(5));
        assert_eq!(next_separator(&text, 6), None);
    }

    #[test]
    fn test_previous_word_start() {
        let text = chars("hello world");
        assert_eq!(previous_word_start(&text, 5), Some(6));
        assert_eq!(previous_word_start(&text, 4), None);
        assert_eq!(previous_word_start(&text, -2), None);
    }

    #[test]
    fn test_previous_word_start_skips_separator_runs() {
        let text = chars("one, two");
        // ", " is a run; only the space before "two" qualifies
        assert_eq!(previous_word_start(&text, 5), Some(5));
    }

    #[test]
    fn test_missing_char_is_not_separator() {
        assert!(!is_separator_at(&chars("ab"), 7));
    }
}
