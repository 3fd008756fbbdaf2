//! Markdown to paragraphs of word tokens.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    keywords::{Keywords, extract_keywords},
    markup::{HeadingEntry, normalize, parse_headings},
    text_policy::first_words_excerpt,
    tokenize::{ScriptTokenizer, Tokenizer},
};

static RE_PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

const PREVIEW_WORDS: usize = 6;

/// One paragraph of tokens with the cross-references and keywords it mentions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParagraphResult {
    pub words: Vec<String>,
    pub cross_references: Vec<String>,
    pub keywords: Vec<String>,
}

/// Full segmentation output for one document version.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SegmentedDocument {
    pub paragraphs: Vec<ParagraphResult>,
    pub headings: Vec<HeadingEntry>,
    pub keywords: Keywords,
    pub cross_references: Vec<String>,
}

impl SegmentedDocument {
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|paragraph| paragraph.words.len())
            .sum()
    }
}

pub struct Segmenter {
    tokenizer: ScriptTokenizer,
}

impl Segmenter {
    pub fn new(use_dictionary_tokenizer: bool) -> Self {
        Self::with_tokenizer(ScriptTokenizer::new(use_dictionary_tokenizer))
    }

    pub fn with_tokenizer(tokenizer: ScriptTokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &ScriptTokenizer {
        &self.tokenizer
    }

    pub fn set_use_dictionary(&mut self, use_dictionary: bool) {
        self.tokenizer.set_use_dictionary(use_dictionary);
    }

    pub fn headings(&self, markdown: &str) -> Vec<HeadingEntry> {
        parse_headings(markdown)
    }

    /// Split `markdown` into tokenized paragraphs.
    ///
    /// Keywords are ranked once over the whole document. A cross-reference or
    /// keyword is attributed to every paragraph whose plain text contains it
    /// as a substring, so a short keyword can also match inside longer words.
    pub fn segment(&self, markdown: &str) -> SegmentedDocument {
        let normalized = normalize(markdown);
        let keywords = extract_keywords(&normalized.plain_text, &self.tokenizer);

        let paragraphs: Vec<ParagraphResult> = RE_PARAGRAPH_BREAK
            .split(&normalized.plain_text)
            .filter(|text| !text.trim().is_empty())
            .map(|text| ParagraphResult {
                words: self.tokenizer.tokenize(text),
                cross_references: mentioned_in(text, &normalized.cross_references),
                keywords: mentioned_in(text, &keywords),
            })
            .collect();

        debug!(
            "segment: done paragraphs={} keywords={} cross_references={} headings={} dictionary={} first={:?}",
            paragraphs.len(),
            keywords.len(),
            normalized.cross_references.len(),
            normalized.headings.len(),
            self.tokenizer.uses_dictionary(),
            first_words_excerpt(&normalized.plain_text, PREVIEW_WORDS)
        );

        SegmentedDocument {
            paragraphs,
            headings: normalized.headings,
            keywords,
            cross_references: normalized.cross_references,
        }
    }
}

fn mentioned_in(paragraph: &str, candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| paragraph.contains(candidate.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines_and_drops_empty_paragraphs() {
        let doc = Segmenter::new(true).segment("first one\n\n  \n\nsecond\nline\n\n\n");
        assert_eq!(doc.paragraphs.len(), 2);
        assert_eq!(doc.paragraphs[0].words, ["first", "one"]);
        assert_eq!(doc.paragraphs[1].words, ["second", "line"]);
        assert_eq!(doc.word_count(), 4);
    }

    #[test]
    fn headings_become_their_own_paragraphs() {
        let doc = Segmenter::new(true).segment("# Intro\nBody text here.");
        assert_eq!(doc.paragraphs.len(), 2);
        assert_eq!(doc.paragraphs[0].words, ["Intro"]);
        assert_eq!(doc.headings.len(), 1);
        assert_eq!(doc.headings[0].title, "Intro");
    }

    #[test]
    fn cross_references_attach_to_their_paragraph() {
        let doc = Segmenter::new(true).segment("See [[Alpha]] here.\n\nNothing linked.");
        assert_eq!(doc.cross_references, ["Alpha"]);
        assert_eq!(doc.paragraphs[0].cross_references, ["Alpha"]);
        assert!(doc.paragraphs[1].cross_references.is_empty());
    }

    #[test]
    fn keywords_are_document_global_and_substring_attributed() {
        let markdown = "reading reading speed\n\nspeedreading is fun";
        let doc = Segmenter::new(true).segment(markdown);
        assert_eq!(doc.keywords.as_slice(), ["reading", "speed", "speedreading", "fun"]);
        assert_eq!(doc.paragraphs[0].keywords, ["reading", "speed"]);
        assert_eq!(
            doc.paragraphs[1].keywords,
            ["reading", "speed", "speedreading", "fun"]
        );
    }

    #[test]
    fn cjk_paragraphs_route_through_dictionary() {
        let doc = Segmenter::new(true).segment("我爱阅读速读\n\nplain words");
        assert_eq!(doc.paragraphs[0].words, ["我", "爱", "阅读", "速", "读"]);
        assert_eq!(doc.paragraphs[1].words, ["plain", "words"]);

        let doc = Segmenter::new(false).segment("我爱阅读速读");
        assert_eq!(doc.paragraphs[0].words, ["我爱阅读速读"]);
    }

    #[test]
    fn empty_input_has_no_paragraphs() {
        let doc = Segmenter::new(true).segment("```\ncode only\n```");
        assert!(doc.paragraphs.is_empty());
        assert_eq!(doc.word_count(), 0);
    }
}
