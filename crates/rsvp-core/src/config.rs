//! Configuration snapshots passed in by the host.

use log::warn;

use crate::error::ReaderError;

pub const DEFAULT_PAUSE_MULTIPLIER: f64 = 1.5;

/// Options that shape segmentation and per-word timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderConfig {
    /// Stretch words that end a sentence or clause.
    pub intelligent_pause: bool,
    pub pause_multiplier: f64,
    /// Route CJK paragraphs through the dictionary tokenizer.
    pub use_dictionary_tokenizer: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            intelligent_pause: true,
            pause_multiplier: DEFAULT_PAUSE_MULTIPLIER,
            use_dictionary_tokenizer: true,
        }
    }
}

impl ReaderConfig {
    pub fn validate(&self) -> Result<(), ReaderError> {
        if !self.pause_multiplier.is_finite() || self.pause_multiplier <= 0.0 {
            warn!(
                "config: rejected pause_multiplier={}",
                self.pause_multiplier
            );
            return Err(ReaderError::InvalidPauseMultiplier(self.pause_multiplier));
        }
        Ok(())
    }
}

/// Speed bounds used by the playback driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlaybackConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub wpm_step: u16,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            wpm: 400,
            min_wpm: 200,
            max_wpm: 1200,
            wpm_step: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ReaderConfig::default().validate().is_ok());
        assert_eq!(ReaderConfig::default().pause_multiplier, 1.5);
    }

    #[test]
    fn non_positive_multiplier_is_rejected() {
        let config = ReaderConfig {
            pause_multiplier: 0.0,
            ..ReaderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ReaderError::InvalidPauseMultiplier(0.0))
        );

        let config = ReaderConfig {
            pause_multiplier: f64::NAN,
            ..ReaderConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
