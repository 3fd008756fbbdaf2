use log::debug;

use super::{ReadingEngine, WordRecord};

impl ReadingEngine {
    /// Word under the cursor, `None` for an empty document.
    pub fn current(&self) -> Option<&WordRecord> {
        self.index.words.get(self.index.cursor)
    }

    /// Advance one word. `None` once the cursor sits on the last word.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&WordRecord> {
        if self.index.cursor + 1 >= self.index.len() {
            return None;
        }
        self.index.cursor += 1;
        self.current()
    }

    /// Move to an absolute word index, clamped into the document.
    pub fn set_position(&mut self, index: usize) {
        self.index.cursor = index.min(self.index.len().saturating_sub(1));
    }

    /// Move to `floor(fraction * total_words)`, clamped into the document.
    pub fn set_progress(&mut self, fraction: f64) {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let target = (fraction * self.index.len() as f64).floor() as usize;
        self.set_position(target);
    }

    /// Jump to the start of the next paragraph, or back to the previous
    /// paragraph boundary.
    ///
    /// Forward past the last paragraph lands on the last word; backward before
    /// the first boundary lands on word 0.
    pub fn jump_paragraph(&mut self, forward: bool) {
        let from = self.index.cursor;
        let boundaries = &self.index.paragraph_boundaries;

        let target = if forward {
            boundaries
                .iter()
                .find(|&&boundary| boundary > from)
                .map(|&boundary| boundary + 1)
                .unwrap_or(self.index.len().saturating_sub(1))
        } else {
            boundaries
                .iter()
                .rev()
                .find(|&&boundary| boundary < from)
                .copied()
                .unwrap_or(0)
        };

        self.set_position(target);
        debug!(
            "engine-nav: jump_paragraph forward={} from={} to={} total={}",
            forward,
            from,
            self.index.cursor,
            self.index.len()
        );
    }
}
