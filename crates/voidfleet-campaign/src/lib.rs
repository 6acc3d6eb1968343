//! Mission and wave configuration.
//!
//! Builds the [`voidfleet_core::config::MatchConfig`] values the engine
//! consumes: the hand-authored campaign missions, the endless-mode wave
//! generator with its scaling laws, and the between-wave meta-progression
//! that shapes the player's roster.

pub mod endless;
pub mod fleet;
pub mod missions;
pub mod run;
pub mod upgrades;
