//! The battle engine — turn resolution for one match.
//!
//! [`Battle`] owns the complete match state as one aggregate: both grids,
//! both fleets, rosters, boss bookkeeping, and the RNG. Every action is a
//! synchronous method that resolves atomically and returns its effects as
//! data; nothing here depends on wall-clock time. Completely headless,
//! enabling deterministic testing from `(config, seed)`.

pub mod battle;
pub mod combat;
pub mod snapshot;
pub mod stratagems;

pub use battle::{Battle, TurnReport};
pub use voidfleet_core as core;
