//! Battle snapshot — the complete player-visible state sent to the shell
//! after each action.
//!
//! The enemy grid is masked: concealed shields, unstruck ships, and the
//! enemy arsenal never appear here. The engine builds these views; this
//! crate only defines their shape.

use serde::{Deserialize, Serialize};

use crate::enums::{Actor, CellState, ImpactMark, MatchPhase, Stratagem};
use crate::events::{EffectEvent, Notice};
use crate::types::ChargeState;

/// Complete visible state, serialized to the shell after every action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub phase: MatchPhase,
    pub turn: Actor,
    pub turn_count: u32,
    pub grid_size: u8,
    /// Player grid in row-major order, full knowledge.
    pub player_cells: Vec<PlayerCellView>,
    /// Enemy grid in row-major order, fog-of-war applied.
    pub enemy_cells: Vec<EnemyCellView>,
    pub stratagems: Vec<StratagemView>,
    /// Boss hull integrity, present only in boss missions.
    pub boss_hp: Option<i32>,
    /// Pending enemy charge telegraph, shown so the player can shield up.
    pub incoming_charge: Option<ChargeState>,
    /// Turns left on the bulk reload, if one is running.
    pub reload_turns: Option<u32>,
    pub radar_charges: u32,
    pub score: ScoreTally,
    /// Narrative hook id from the configuration, if any.
    pub dialogue: Option<String>,
    pub events: Vec<EffectEvent>,
    pub notices: Vec<Notice>,
}

/// One player-side cell. The player sees their own board fully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCellView {
    pub state: CellState,
    pub shielded: bool,
    pub impact: Option<ImpactMark>,
}

/// One enemy-side cell after fog-of-war masking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyCellView {
    /// Nothing known. Also covers ships concealed by a full-health shield.
    #[default]
    Unknown,
    Miss,
    Hit,
    /// A cracked shield: visible, still absorbing.
    Shield,
    /// A ship cell exposed by a radar sweep.
    ShipRevealed,
}

/// Player stratagem status for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratagemView {
    pub kind: Stratagem,
    pub remaining: u32,
    pub initial: u32,
    pub icon: String,
}

/// Running per-match tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub stratagems_used: u32,
    pub ships_sunk: u32,
    pub turns_taken: u32,
}
