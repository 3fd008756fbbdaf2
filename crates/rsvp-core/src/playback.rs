//! Timer-driven playback state machine over a [`ReadingEngine`].
//!
//! The host calls [`Playback::tick`] from its timer with a monotonic clock;
//! words only advance inside `tick`, so pausing or stopping always lands
//! between two words.

use log::debug;

use crate::{
    config::PlaybackConfig,
    engine::ReadingEngine,
    error::ReaderError,
    stats::{ReadingSession, words_per_minute},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    Idle,
    Advanced,
    /// The cursor is on the last word; playback paused itself.
    EndOfText,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct SessionStart {
    started_ms: u64,
    start_position: usize,
    words_read: usize,
}

#[derive(Clone, Debug)]
pub struct Playback {
    config: PlaybackConfig,
    state: PlaybackState,
    next_word_ms: u64,
    session: Option<SessionStart>,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl Playback {
    pub const fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            state: PlaybackState::Stopped,
            next_word_ms: 0,
            session: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn wpm(&self) -> u16 {
        self.config.wpm
    }

    /// Deadline of the next advance while playing.
    pub fn next_word_ms(&self) -> Option<u64> {
        (self.state == PlaybackState::Playing).then_some(self.next_word_ms)
    }

    /// Start or resume. The current word stays on screen for its full duration.
    pub fn play(&mut self, now_ms: u64, engine: &ReadingEngine) -> Result<(), ReaderError> {
        if self.state == PlaybackState::Playing {
            return Ok(());
        }

        let delay = self.current_word_delay_ms(engine)?;
        if self.state == PlaybackState::Stopped {
            self.session = Some(SessionStart {
                started_ms: now_ms,
                start_position: engine.position(),
                words_read: 0,
            });
        }

        self.state = PlaybackState::Playing;
        self.next_word_ms = now_ms.saturating_add(delay);
        debug!(
            "playback: play now_ms={} position={}/{} wpm={} next_word_ms={}",
            now_ms,
            engine.position(),
            engine.total_words(),
            self.config.wpm,
            self.next_word_ms
        );
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            debug!("playback: pause");
        }
    }

    pub fn toggle(&mut self, now_ms: u64, engine: &ReadingEngine) -> Result<(), ReaderError> {
        match self.state {
            PlaybackState::Playing => {
                self.pause();
                Ok(())
            }
            PlaybackState::Paused | PlaybackState::Stopped => self.play(now_ms, engine),
        }
    }

    /// End the session, returning its summary when one was running.
    pub fn stop(
        &mut self,
        now_ms: u64,
        engine: &ReadingEngine,
        file_id: &str,
        file_name: &str,
    ) -> Option<ReadingSession> {
        self.state = PlaybackState::Stopped;
        let start = self.session.take()?;

        let duration_ms = now_ms.saturating_sub(start.started_ms);
        let session = ReadingSession {
            file_id: file_id.to_owned(),
            file_name: file_name.to_owned(),
            start_timestamp: start.started_ms,
            end_timestamp: now_ms,
            duration_ms,
            start_position: start.start_position,
            end_position: engine.position(),
            words_read: start.words_read,
            average_wpm: words_per_minute(start.words_read, duration_ms),
        };
        debug!(
            "playback: stop file_id={} words_read={} duration_ms={} end_position={}",
            file_id, session.words_read, duration_ms, session.end_position
        );
        Some(session)
    }

    /// Advance the engine once the current word's deadline has passed.
    pub fn tick(
        &mut self,
        now_ms: u64,
        engine: &mut ReadingEngine,
    ) -> Result<TickResult, ReaderError> {
        if self.state != PlaybackState::Playing || now_ms < self.next_word_ms {
            return Ok(TickResult::Idle);
        }

        if engine.next().is_none() {
            self.state = PlaybackState::Paused;
            debug!(
                "playback: end of text position={}/{}",
                engine.position(),
                engine.total_words()
            );
            return Ok(TickResult::EndOfText);
        }

        if let Some(session) = self.session.as_mut() {
            session.words_read = session.words_read.saturating_add(1);
        }
        self.next_word_ms = now_ms.saturating_add(self.current_word_delay_ms(engine)?);
        Ok(TickResult::Advanced)
    }

    /// Step the speed by `wpm_step` within bounds. Returns whether it changed.
    pub fn adjust_wpm(&mut self, increase: bool) -> bool {
        let next = if increase {
            self.config
                .wpm
                .saturating_add(self.config.wpm_step)
                .min(self.config.max_wpm)
        } else {
            self.config
                .wpm
                .saturating_sub(self.config.wpm_step)
                .max(self.config.min_wpm)
        };

        if next != self.config.wpm {
            self.config.wpm = next;
            true
        } else {
            false
        }
    }

    fn current_word_delay_ms(&self, engine: &ReadingEngine) -> Result<u64, ReaderError> {
        let duration = engine.duration_ms(f64::from(self.config.wpm))?;
        Ok(duration.round() as u64)
    }
}
