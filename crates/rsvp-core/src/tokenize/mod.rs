//! Word tokenizers for plain reading text.

mod dictionary;

pub use dictionary::{DEFAULT_DICTIONARY, DictionaryTokenizer, MAX_MATCH_CHARS};

/// Splits plain text into displayable word tokens.
///
/// Every returned token is non-empty.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Whitespace tokenizer for space-delimited scripts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LatinTokenizer;

impl LatinTokenizer {
    pub const fn new() -> Self {
        Self
    }
}

impl Tokenizer for LatinTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    fn name(&self) -> &'static str {
        "latin"
    }
}

/// Whether `ch` lies in the CJK Unified Ideographs block.
pub fn is_cjk_ideograph(ch: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&ch)
}

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_ideograph)
}

/// Routes each text block to the CJK tokenizer or the whitespace tokenizer.
///
/// A block goes to the CJK tokenizer only when dictionary tokenization is
/// enabled and the block holds at least one CJK ideograph.
pub struct ScriptTokenizer {
    use_dictionary: bool,
    latin: LatinTokenizer,
    cjk: Box<dyn Tokenizer>,
}

impl ScriptTokenizer {
    pub fn new(use_dictionary: bool) -> Self {
        Self::with_cjk_tokenizer(use_dictionary, Box::new(DictionaryTokenizer::new()))
    }

    /// Swap in another segmenter for CJK blocks.
    pub fn with_cjk_tokenizer(use_dictionary: bool, cjk: Box<dyn Tokenizer>) -> Self {
        Self {
            use_dictionary,
            latin: LatinTokenizer::new(),
            cjk,
        }
    }

    pub fn uses_dictionary(&self) -> bool {
        self.use_dictionary
    }

    /// Turn CJK routing on or off, keeping the installed CJK tokenizer.
    pub fn set_use_dictionary(&mut self, use_dictionary: bool) {
        self.use_dictionary = use_dictionary;
    }

    pub fn select(&self, text: &str) -> &dyn Tokenizer {
        if self.use_dictionary && contains_cjk(text) {
            self.cjk.as_ref()
        } else {
            &self.latin
        }
    }
}

impl Tokenizer for ScriptTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.select(text).tokenize(text)
    }

    fn name(&self) -> &'static str {
        "script"
    }
}
