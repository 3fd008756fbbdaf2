//! Shared word-level display policies.

/// Longest shift of the focus point into a word.
pub const MAX_FOCUS_POINT: usize = 2;

/// Words longer than this (in chars) get extra display time.
pub const LONG_WORD_CHARS: usize = 8;

/// Sentence and clause punctuation, ASCII and full-width.
pub const PAUSE_PUNCTUATION: [char; 13] = [
    '.', ',', '!', '?', ';', ':', '。', '，', '！', '？', '；', '：', '、',
];

pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Optimal recognition point: about a third into the word, capped.
pub fn focus_point(word: &str) -> usize {
    let len = char_len(word);
    if len <= 1 {
        return 0;
    }
    (len / 3).min(MAX_FOCUS_POINT)
}

pub fn is_punctuation_terminated(word: &str) -> bool {
    word.chars()
        .next_back()
        .is_some_and(|last| PAUSE_PUNCTUATION.contains(&last))
}

/// First `max_words` whitespace-separated words of `text`, for log previews.
pub fn first_words_excerpt(text: &str, max_words: usize) -> &str {
    if text.is_empty() || max_words == 0 {
        return "";
    }

    let trimmed = text.trim_start();
    let mut words = 0usize;
    let mut in_word = false;

    for (idx, ch) in trimmed.char_indices() {
        if ch.is_whitespace() {
            if in_word {
                words += 1;
                if words >= max_words {
                    return &trimmed[..idx];
                }
            }
            in_word = false;
        } else {
            in_word = true;
        }
    }

    trimmed.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_point_follows_word_length() {
        assert_eq!(focus_point(""), 0);
        assert_eq!(focus_point("a"), 0);
        assert_eq!(focus_point("ab"), 0);
        assert_eq!(focus_point("abc"), 1);
        assert_eq!(focus_point("world."), 2);
        assert_eq!(focus_point("extraordinary"), 2);
        assert_eq!(focus_point("阅读。"), 1);
    }

    #[test]
    fn focus_point_is_a_valid_index() {
        for word in ["x", "ab", "abc", "abcd", "速读方法", "supercalifragilistic"] {
            let len = char_len(word);
            let point = focus_point(word);
            assert!(point < len || (len <= 1 && point == 0));
        }
    }

    #[test]
    fn punctuation_termination() {
        assert!(is_punctuation_terminated("world."));
        assert!(is_punctuation_terminated("however,"));
        assert!(is_punctuation_terminated("阅读。"));
        assert!(is_punctuation_terminated("甲、"));
        assert!(!is_punctuation_terminated("plain"));
        assert!(!is_punctuation_terminated("(aside)"));
        assert!(!is_punctuation_terminated(""));
    }

    #[test]
    fn excerpt_keeps_leading_words() {
        assert_eq!(first_words_excerpt("  one two  three four", 2), "one two");
        assert_eq!(first_words_excerpt("one two", 5), "one two");
        assert_eq!(first_words_excerpt("one", 0), "");
    }
}
