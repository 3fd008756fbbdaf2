//! Reading cursor over a segmented document, with per-word timing.

use log::debug;

use crate::{
    config::ReaderConfig,
    error::ReaderError,
    keywords::Keywords,
    markup::HeadingEntry,
    outline::render_outline,
    segment::{SegmentedDocument, Segmenter},
    text_policy::{focus_point, is_punctuation_terminated},
};

mod navigation;
mod timing;

pub use timing::{LONG_WORD_MULTIPLIER, PARAGRAPH_END_MULTIPLIER};

/// One displayable word.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordRecord {
    pub text: String,
    /// Char index of the optimal recognition point.
    pub focus_point: usize,
    pub is_cross_reference: bool,
    pub is_keyword: bool,
    pub is_punctuation_terminated: bool,
    pub ends_paragraph: bool,
}

/// Zero-based line and char column in the source markdown.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

/// Flattened words of one loaded document plus the cursor into them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DocumentIndex {
    words: Vec<WordRecord>,
    /// Strictly increasing indices of paragraph-ending words.
    paragraph_boundaries: Vec<usize>,
    cursor: usize,
}

impl DocumentIndex {
    pub fn build(document: &SegmentedDocument) -> Self {
        let mut words = Vec::with_capacity(document.word_count());
        let mut paragraph_boundaries = Vec::with_capacity(document.paragraphs.len());

        for paragraph in &document.paragraphs {
            for word in &paragraph.words {
                words.push(WordRecord {
                    text: word.clone(),
                    focus_point: focus_point(word),
                    is_cross_reference: paragraph.cross_references.contains(word),
                    is_keyword: paragraph.keywords.contains(word),
                    is_punctuation_terminated: is_punctuation_terminated(word),
                    ends_paragraph: false,
                });
            }

            if paragraph.words.is_empty() {
                continue;
            }
            if let Some(last) = words.last_mut() {
                last.ends_paragraph = true;
                paragraph_boundaries.push(words.len() - 1);
            }
        }

        Self {
            words,
            paragraph_boundaries,
            cursor: 0,
        }
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn paragraph_boundaries(&self) -> &[usize] {
        &self.paragraph_boundaries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Owns the current document and answers cursor and timing queries.
///
/// Every call is synchronous; the host drives playback by scheduling
/// [`ReadingEngine::next`] with [`ReadingEngine::duration_ms`].
pub struct ReadingEngine {
    config: ReaderConfig,
    segmenter: Segmenter,
    index: DocumentIndex,
    headings: Vec<HeadingEntry>,
    keywords: Keywords,
}

impl Default for ReadingEngine {
    fn default() -> Self {
        let config = ReaderConfig::default();
        Self {
            config,
            segmenter: Segmenter::new(config.use_dictionary_tokenizer),
            index: DocumentIndex::default(),
            headings: Vec::new(),
            keywords: Keywords::new(),
        }
    }
}

impl ReadingEngine {
    pub fn new(config: ReaderConfig) -> Result<Self, ReaderError> {
        config.validate()?;
        Ok(Self {
            config,
            segmenter: Segmenter::new(config.use_dictionary_tokenizer),
            ..Self::default()
        })
    }

    /// Use a custom segmenter, e.g. one with a different CJK tokenizer.
    ///
    /// The segmenter's CJK routing follows `config.use_dictionary_tokenizer`.
    pub fn with_segmenter(
        config: ReaderConfig,
        mut segmenter: Segmenter,
    ) -> Result<Self, ReaderError> {
        config.validate()?;
        segmenter.set_use_dictionary(config.use_dictionary_tokenizer);
        Ok(Self {
            config,
            segmenter,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Replace the configuration snapshot.
    ///
    /// Timing changes apply immediately; a tokenizer change applies from the
    /// next [`ReadingEngine::load`].
    pub fn set_config(&mut self, config: ReaderConfig) -> Result<(), ReaderError> {
        config.validate()?;
        self.segmenter
            .set_use_dictionary(config.use_dictionary_tokenizer);
        self.config = config;
        Ok(())
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Rebuild the document index from `markdown`, discarding the previous one.
    ///
    /// With `start`, the cursor is placed at an estimate of the word at that
    /// source position: the text before it is segmented again and its words
    /// counted. Markup that changes word counts makes the estimate drift.
    pub fn load(&mut self, markdown: &str, start: Option<SourcePosition>) {
        let document = self.segmenter.segment(markdown);
        self.index = DocumentIndex::build(&document);
        self.headings = document.headings;
        self.keywords = document.keywords;

        let start_index = start
            .map(|position| self.approximate_word_index(markdown, position))
            .unwrap_or(0);
        self.set_position(start_index);

        debug!(
            "engine: load words={} paragraphs={} start={:?} cursor={}",
            self.index.len(),
            self.index.paragraph_boundaries.len(),
            start,
            self.index.cursor
        );
    }

    fn approximate_word_index(&self, markdown: &str, position: SourcePosition) -> usize {
        let prefix = text_before(markdown, position);
        let words_before = self.segmenter.segment(prefix).word_count();
        words_before.min(self.index.len().saturating_sub(1))
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    pub fn words(&self) -> &[WordRecord] {
        self.index.words()
    }

    pub fn paragraph_boundaries(&self) -> &[usize] {
        self.index.paragraph_boundaries()
    }

    pub fn total_words(&self) -> usize {
        self.index.len()
    }

    pub fn position(&self) -> usize {
        self.index.cursor
    }

    pub fn headings(&self) -> &[HeadingEntry] {
        &self.headings
    }

    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Markdown outline of keyword-flagged words and document headings.
    pub fn outline(&self) -> String {
        let keywords = self
            .index
            .words
            .iter()
            .filter(|word| word.is_keyword)
            .map(|word| word.text.as_str());
        render_outline(keywords, &self.headings)
    }
}

/// Source text up to `position`, with line and column clamped to the text.
fn text_before(markdown: &str, position: SourcePosition) -> &str {
    let mut offset = 0usize;
    let mut lines = markdown.split_inclusive('\n');

    for _ in 0..position.line {
        match lines.next() {
            Some(line) => offset += line.len(),
            None => return markdown,
        }
    }

    let Some(line) = lines.next() else {
        return markdown;
    };
    let content = line.strip_suffix('\n').unwrap_or(line);
    let column = content
        .char_indices()
        .nth(position.column)
        .map(|(idx, _)| idx)
        .unwrap_or(content.len());

    &markdown[..offset + column]
}
