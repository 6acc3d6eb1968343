//! Endless-run orchestration.
//!
//! Tracks the wave counter, banked salvage, and accumulated score across
//! matches, and reports results through the score sink. The engine plays
//! one match at a time; this type strings them together.

use voidfleet_core::config::MatchConfig;
use voidfleet_core::enums::GameMode;
use voidfleet_core::score::{ScoreEntry, ScoreSink};
use voidfleet_core::state::ScoreTally;

use crate::endless::endless_config;
use crate::upgrades::MetaProgression;

/// Salvage awarded for clearing a wave.
fn wave_salvage(wave: u32) -> u32 {
    40 + 15 * wave
}

/// Score awarded for clearing a wave with the given tally.
fn wave_score(wave: u32, tally: &ScoreTally) -> u32 {
    100 * wave + 5 * tally.shots_hit + 20 * tally.ships_sunk
}

/// One player's endless session.
pub struct EndlessRun<S: ScoreSink> {
    player: String,
    wave: u32,
    total_score: u32,
    pub meta: MetaProgression,
    sink: S,
}

impl<S: ScoreSink> EndlessRun<S> {
    pub fn new(player: impl Into<String>, sink: S) -> Self {
        Self {
            player: player.into(),
            wave: 1,
            total_score: 0,
            meta: MetaProgression::default(),
            sink,
        }
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Configuration for the wave about to be played.
    pub fn next_config(&self) -> MatchConfig {
        endless_config(self.wave, &self.meta)
    }

    /// Record a cleared wave: bank salvage, accumulate score, report the
    /// running total, and advance to the next wave.
    pub fn record_victory(&mut self, tally: &ScoreTally) {
        self.meta.salvage += wave_salvage(self.wave);
        self.total_score += wave_score(self.wave, tally);
        self.submit();
        self.wave += 1;
    }

    /// Record a lost wave: the final score goes out, the run is over.
    /// The caller decides whether to retry the same wave.
    pub fn record_defeat(&mut self) {
        self.submit();
    }

    fn submit(&mut self) {
        self.sink.submit(ScoreEntry {
            player: self.player.clone(),
            score: self.total_score,
            mode: GameMode::Endless,
            stage: self.wave,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voidfleet_core::score::MemorySink;

    fn tally() -> ScoreTally {
        ScoreTally {
            shots_fired: 20,
            shots_hit: 8,
            stratagems_used: 2,
            ships_sunk: 2,
            turns_taken: 15,
        }
    }

    #[test]
    fn victory_advances_and_banks() {
        let mut run = EndlessRun::new("kestrel", MemorySink::default());
        assert_eq!(run.wave(), 1);

        run.record_victory(&tally());
        assert_eq!(run.wave(), 2);
        assert_eq!(run.meta.salvage, 55);
        assert_eq!(run.total_score(), 100 + 40 + 40);
    }

    #[test]
    fn scores_are_submitted_each_wave() {
        let mut run = EndlessRun::new("kestrel", MemorySink::default());
        run.record_victory(&tally());
        run.record_victory(&tally());
        run.record_defeat();

        let entries = &run.sink.entries;
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.player == "kestrel"));
        assert!(entries.iter().all(|e| e.mode == GameMode::Endless));
        // Cumulative score never shrinks.
        assert!(entries.windows(2).all(|w| w[0].score <= w[1].score));
        assert_eq!(entries[2].stage, 3, "Defeat reported at the fatal wave");
    }

    #[test]
    fn configs_scale_with_the_run() {
        let mut run = EndlessRun::new("kestrel", MemorySink::default());
        let first = run.next_config();
        for _ in 0..6 {
            run.record_victory(&tally());
        }
        let later = run.next_config();
        assert!(later.grid_size > first.grid_size);
        assert!(later.ai_smartness > first.ai_smartness);
        assert!(later.boss);
    }
}
