//! Reading-position persistence abstraction.

use std::collections::HashMap;

use crate::engine::ReadingEngine;

/// Where a reader stopped in a document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReadingProgress {
    /// Absolute word index.
    pub position: usize,
    /// Host clock, milliseconds.
    pub timestamp: u64,
}

impl ReadingProgress {
    pub fn capture(engine: &ReadingEngine, timestamp: u64) -> Self {
        Self {
            position: engine.position(),
            timestamp,
        }
    }

    /// Move `engine` back to this position, clamped to its current document.
    pub fn restore(&self, engine: &mut ReadingEngine) {
        engine.set_position(self.position);
    }
}

/// Abstract progress persistence backend, keyed by document identity.
///
/// Read before loading a document; written after playback ends or is
/// interrupted.
pub trait ProgressStore {
    type Error;

    fn load(&mut self, document_id: &str) -> Result<Option<ReadingProgress>, Self::Error>;
    fn save(&mut self, document_id: &str, progress: ReadingProgress) -> Result<(), Self::Error>;
}

/// Volatile store for hosts without persistence and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryProgressStore {
    entries: HashMap<String, ReadingProgress>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryProgressStore {
    type Error = core::convert::Infallible;

    fn load(&mut self, document_id: &str) -> Result<Option<ReadingProgress>, Self::Error> {
        Ok(self.entries.get(document_id).copied())
    }

    fn save(&mut self, document_id: &str, progress: ReadingProgress) -> Result<(), Self::Error> {
        self.entries.insert(document_id.to_owned(), progress);
        Ok(())
    }
}
