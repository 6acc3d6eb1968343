//! Events emitted by the engine for the presentation layer.
//!
//! The core is purely synchronous: every action returns its effects as data
//! and the shell decides how (and whether) to animate or announce them.

use serde::{Deserialize, Serialize};

use crate::enums::NoticeLevel;
use crate::types::Coord;

/// Effect events for the frontend. Delivery, timing, and display are
/// entirely the shell's concern; dropping them does not affect rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    /// A player emergency shield soaked an enemy attack.
    ShieldAbsorbed { at: Coord },
    /// An enemy shield was damaged and is now visible.
    ShieldCracked { at: Coord },
    /// An enemy shield collapsed.
    ShieldBroken { at: Coord },
    /// The boss took damage.
    BossDamaged { remaining_hp: i32 },
    /// The boss relocated and the enemy grid's attack history was wiped.
    BossWarped,
    /// A charged attack is inbound at the given origin.
    ChargeTelegraphed { origin: Coord, turns_left: u32 },
    /// The charged attack landed.
    ChargeDetonated { origin: Coord },
    /// The bulk stratagem reload began.
    ReloadStarted { turns: u32 },
    /// All stratagem counts were restored.
    ReloadComplete,
    /// The match reached a terminal state.
    MatchWon,
    MatchLost,
}

/// A short user-facing message with severity, for the shell's notice queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub turn: u32,
}
