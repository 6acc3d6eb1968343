//! Match configuration — the immutable per-match descriptor.
//!
//! Campaign missions and generated endless waves share this one shape, so
//! the engine has exactly one configuration-consumption path. A config is
//! produced by the mission catalog or the endless generator and consumed
//! once to initialize grids and rosters.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyWeapon, Stratagem};
use crate::ships::ShipSpec;

/// One player stratagem entry: the ability and how many uses the mission
/// grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratagemSlot {
    pub kind: Stratagem,
    pub count: u32,
}

impl StratagemSlot {
    pub fn new(kind: Stratagem, count: u32) -> Self {
        Self { kind, count }
    }
}

/// One enemy arsenal entry. Never visible to the player as a cell-level
/// resource; consumed only by the AI controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArsenalSlot {
    pub weapon: EnemyWeapon,
    pub count: u32,
}

impl ArsenalSlot {
    pub fn new(weapon: EnemyWeapon, count: u32) -> Self {
        Self { weapon, count }
    }
}

/// Complete description of one match, immutable once the match starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board edge length; both grids are square and the same size.
    pub grid_size: u8,
    /// Hulls available to the player (deployed during setup).
    pub player_fleet: Vec<ShipSpec>,
    /// Hulls the engine auto-places for the enemy.
    pub enemy_fleet: Vec<ShipSpec>,
    pub player_stratagems: Vec<StratagemSlot>,
    pub enemy_arsenal: Vec<ArsenalSlot>,
    /// Hunt-mode trigger chance, 0-100.
    pub ai_smartness: u8,
    /// Boss mission: the win condition is hull integrity, not coverage.
    pub boss: bool,
    /// When set, the player may start a bulk stratagem reload taking this
    /// many turns.
    pub reload_turns: Option<u32>,
    /// Enemy ship cells pre-assigned a full-health shield.
    pub shield_quota: u32,
    /// Radar sweeps available this match (endless-mode resource).
    pub radar_charges: u32,
    /// Opaque narrative hook consumed by the presentation layer.
    pub dialogue: Option<String>,
}

impl MatchConfig {
    /// A minimal configuration: empty rosters on the given grid. Mission
    /// builders start here and fill in what the mission needs.
    pub fn bare(grid_size: u8) -> Self {
        Self {
            grid_size,
            player_fleet: Vec::new(),
            enemy_fleet: Vec::new(),
            player_stratagems: Vec::new(),
            enemy_arsenal: Vec::new(),
            ai_smartness: 0,
            boss: false,
            reload_turns: None,
            shield_quota: 0,
            radar_charges: 0,
            dialogue: None,
        }
    }

    /// Distinct ship class count across the full player roster.
    pub fn player_class_count(&self) -> usize {
        let mut ids: Vec<&str> = self.player_fleet.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}
