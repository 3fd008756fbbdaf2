use log::warn;

use super::ReadingEngine;
use crate::{
    error::ReaderError,
    text_policy::{LONG_WORD_CHARS, char_len},
};

pub const PARAGRAPH_END_MULTIPLIER: f64 = 1.5;
pub const LONG_WORD_MULTIPLIER: f64 = 1.2;

const MS_PER_MINUTE: f64 = 60_000.0;

impl ReadingEngine {
    /// Fraction of the document read, `0.0` at the first word and `1.0` at the last.
    pub fn progress(&self) -> f64 {
        let total = self.index.len();
        if total <= 1 {
            return 0.0;
        }
        self.index.cursor as f64 / (total - 1) as f64
    }

    /// Display time for the word under the cursor at `speed_wpm`.
    ///
    /// Multipliers stack in order: punctuation pause (when enabled),
    /// paragraph end, long word. An empty document yields the base duration.
    pub fn duration_ms(&self, speed_wpm: f64) -> Result<f64, ReaderError> {
        if !speed_wpm.is_finite() || speed_wpm <= 0.0 {
            warn!("engine-timing: rejected speed_wpm={}", speed_wpm);
            return Err(ReaderError::InvalidSpeed(speed_wpm));
        }

        let mut duration = MS_PER_MINUTE / speed_wpm;
        let Some(word) = self.current() else {
            return Ok(duration);
        };

        if self.config.intelligent_pause && word.is_punctuation_terminated {
            duration *= self.config.pause_multiplier;
        }
        if word.ends_paragraph {
            duration *= PARAGRAPH_END_MULTIPLIER;
        }
        if char_len(&word.text) > LONG_WORD_CHARS {
            duration *= LONG_WORD_MULTIPLIER;
        }

        Ok(duration)
    }
}
