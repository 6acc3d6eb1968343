//! Score reporting seam.
//!
//! The engine and campaign layer call out through [`ScoreSink`] at match end
//! and wave completion. Submission is fire-and-forget: no response is needed
//! to continue play, and the persistence backend behind the sink is not this
//! crate's concern.

use serde::{Deserialize, Serialize};

use crate::enums::GameMode;

/// One score submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub score: u32,
    pub mode: GameMode,
    /// Wave reached (endless) or mission index (campaign).
    pub stage: u32,
}

/// Receiver for score submissions.
pub trait ScoreSink {
    fn submit(&mut self, entry: ScoreEntry);
}

/// Sink that drops every submission. Useful default for tests and for
/// shells that handle persistence elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn submit(&mut self, _entry: ScoreEntry) {}
}

/// Sink that keeps submissions in memory, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub entries: Vec<ScoreEntry>,
}

impl ScoreSink for MemorySink {
    fn submit(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
    }
}
