//! Frequency-ranked keyword extraction.

use core::cmp::Reverse;
use std::collections::HashMap;

use heapless::Vec as BoundedVec;

use crate::tokenize::Tokenizer;

pub const MAX_KEYWORDS: usize = 10;

/// Top keywords, most frequent first.
pub type Keywords = BoundedVec<String, MAX_KEYWORDS>;

const STOPWORDS: [&str; 24] = [
    "的", "是", "在", "了", "和", "与", "或", "对", "且", "the", "a", "an", "is", "are", "in", "on",
    "at", "to", "for", "with", "by", "of", "and", "or",
];

pub fn is_stopword(token: &str) -> bool {
    let lowered = token.to_lowercase();
    STOPWORDS.contains(&lowered.as_str())
}

/// Rank tokens by raw frequency, ties kept in first-occurrence order.
///
/// Stopwords (compared case-insensitively) and single-character tokens are
/// skipped; the original casing of each token is returned.
pub fn extract_keywords(text: &str, tokenizer: &dyn Tokenizer) -> Keywords {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokenizer.tokenize(text) {
        if token.chars().count() <= 1 || is_stopword(&token) {
            continue;
        }
        match slots.get(&token) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.sort_by_key(|(_, count)| Reverse(*count));

    let mut keywords = Keywords::new();
    for (token, _) in counts.into_iter().take(MAX_KEYWORDS) {
        if keywords.push(token).is_err() {
            break;
        }
    }
    keywords
}
