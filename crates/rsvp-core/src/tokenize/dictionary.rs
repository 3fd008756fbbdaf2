use std::collections::HashSet;

use super::Tokenizer;

/// Longest dictionary term tried at each position, in chars.
pub const MAX_MATCH_CHARS: usize = 4;

/// Built-in study and reading vocabulary.
pub const DEFAULT_DICTIONARY: [&str; 24] = [
    "研究", "学习", "方法", "知识", "管理", "系统", "思维", "工作", "效率", "提高", "增强", "记忆",
    "理解", "分析", "文章", "阅读", "速度", "认知", "笔记", "复习", "总结", "实践", "应用", "技巧",
];

/// Punctuation glued onto the preceding token instead of standing alone.
const ATTACHED_PUNCTUATION: [char; 15] = [
    '，', '。', '！', '？', '；', '：', '、', '（', '）', '“', '”', '‘', '’', '"', '\'',
];

/// Greedy maximum forward matching over a static dictionary.
///
/// Characters not covered by a dictionary term fall back to one token per
/// character, except ASCII alphanumeric runs which stay whole.
#[derive(Clone, Debug)]
pub struct DictionaryTokenizer {
    terms: HashSet<String>,
}

impl Default for DictionaryTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryTokenizer {
    pub fn new() -> Self {
        Self::with_terms(DEFAULT_DICTIONARY)
    }

    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(Into::into)
                .filter(|term: &String| !term.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Char length of the longest dictionary term starting at `pos`.
    fn longest_match(&self, text: &str, chars: &[(usize, char)], pos: usize) -> Option<usize> {
        let start = chars[pos].0;
        let window = MAX_MATCH_CHARS.min(chars.len() - pos);

        (1..=window).rev().find(|len| {
            let end = byte_offset(text, chars, pos + len);
            self.terms.contains(&text[start..end])
        })
    }
}

impl Tokenizer for DictionaryTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut tokens: Vec<String> = Vec::new();
        let mut pos = 0usize;

        while pos < chars.len() {
            let (start, ch) = chars[pos];

            if ch.is_whitespace() {
                pos += 1;
                continue;
            }

            if let Some(len) = self.longest_match(text, &chars, pos) {
                let end = byte_offset(text, &chars, pos + len);
                tokens.push(text[start..end].to_owned());
                pos += len;
                continue;
            }

            if ch.is_ascii_alphanumeric() {
                let mut run_end = pos + 1;
                while run_end < chars.len() && chars[run_end].1.is_ascii_alphanumeric() {
                    run_end += 1;
                }
                let end = byte_offset(text, &chars, run_end);
                tokens.push(text[start..end].to_owned());
                pos = run_end;
                continue;
            }

            if ATTACHED_PUNCTUATION.contains(&ch) {
                match tokens.last_mut() {
                    Some(last) => last.push(ch),
                    None => tokens.push(ch.to_string()),
                }
            } else {
                tokens.push(ch.to_string());
            }
            pos += 1;
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

fn byte_offset(text: &str, chars: &[(usize, char)], char_index: usize) -> usize {
    chars
        .get(char_index)
        .map(|(offset, _)| *offset)
        .unwrap_or(text.len())
}
