//! Error type shared by the engine and its configuration.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ReaderError {
    /// Words-per-minute must be a positive, finite number.
    #[error("invalid reading speed {0} wpm")]
    InvalidSpeed(f64),
    #[error("invalid punctuation pause multiplier {0}")]
    InvalidPauseMultiplier(f64),
}
