//! Markdown cleanup into plain reading text.
//!
//! Cleanup is a fixed sequence of pattern rewrites rather than a parser, so
//! malformed input never fails: anything a rule does not match is passed
//! through as literal text.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_CROSS_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());
static RE_CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static RE_INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]*`").unwrap());
static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());
static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static RE_HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*_]{3,}[ \t]*$").unwrap());
static RE_BOLD_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_BOLD_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static RE_ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static RE_ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.*?)_").unwrap());
static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.*?)$").unwrap());

/// One markdown heading found in the source document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeadingEntry {
    /// 1..=6
    pub level: u8,
    pub title: String,
    /// Byte offset of the heading line in the original markdown.
    pub source_offset: usize,
}

/// Output of [`normalize`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NormalizedText {
    pub plain_text: String,
    /// Cross-reference targets in first-seen order, without duplicates.
    pub cross_references: Vec<String>,
    pub headings: Vec<HeadingEntry>,
}

/// Strip markdown syntax, collecting cross-reference targets and headings.
pub fn normalize(markdown: &str) -> NormalizedText {
    let headings = parse_headings(markdown);

    let mut cross_references: Vec<String> = Vec::new();
    let text = RE_CROSS_REFERENCE.replace_all(markdown, |caps: &Captures<'_>| {
        let inner = &caps[1];
        let (target, display) = match inner.split_once('|') {
            Some((target, display)) => (target, display),
            None => (inner, inner),
        };
        if !cross_references.iter().any(|known| known == target) {
            cross_references.push(target.to_owned());
        }
        display.to_owned()
    });

    let text = RE_CODE_FENCE.replace_all(&text, "");
    let text = RE_INLINE_CODE.replace_all(&text, "");
    let text = RE_IMAGE.replace_all(&text, "");
    let text = RE_LINK.replace_all(&text, "${1}");
    let text = RE_HTML_TAG.replace_all(&text, "");
    let text = RE_HORIZONTAL_RULE.replace_all(&text, "");
    let text = RE_BOLD_STAR.replace_all(&text, "${1}");
    let text = RE_BOLD_UNDERSCORE.replace_all(&text, "${1}");
    let text = RE_ITALIC_STAR.replace_all(&text, "${1}");
    let text = RE_ITALIC_UNDERSCORE.replace_all(&text, "${1}");
    let text = RE_HEADING.replace_all(&text, "${2}\n");

    debug!(
        "markup: normalized source_bytes={} plain_bytes={} cross_references={} headings={}",
        markdown.len(),
        text.len(),
        cross_references.len(),
        headings.len()
    );

    NormalizedText {
        plain_text: text.into_owned(),
        cross_references,
        headings,
    }
}

/// Headings in source order, scanned from the unmodified markdown.
pub fn parse_headings(markdown: &str) -> Vec<HeadingEntry> {
    RE_HEADING
        .captures_iter(markdown)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(HeadingEntry {
                level: caps[1].len() as u8,
                title: caps[2].trim().to_owned(),
                source_offset: whole.start(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests;
