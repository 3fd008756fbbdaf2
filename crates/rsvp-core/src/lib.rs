//! Text segmentation and reading cursor for RSVP speed reading.
//!
//! Markdown goes through [`markup::normalize`], is split into paragraphs and
//! tokenized by [`segment::Segmenter`], then flattened into the word list that
//! [`engine::ReadingEngine`] walks and times.

pub mod config;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod markup;
pub mod outline;
pub mod playback;
pub mod progress;
pub mod segment;
pub mod stats;
pub mod text_policy;
pub mod tokenize;

pub use config::{PlaybackConfig, ReaderConfig};
pub use engine::{DocumentIndex, ReadingEngine, SourcePosition, WordRecord};
pub use error::ReaderError;
pub use markup::HeadingEntry;
pub use segment::{ParagraphResult, SegmentedDocument, Segmenter};
