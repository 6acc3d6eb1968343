//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Resolution state of a single board cell.
///
/// Transitions are forward-only: Empty -> Ship at placement time,
/// Ship | Empty -> Hit | Miss at attack time, and never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Hit and Miss are terminal: such a cell can never be attacked again.
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Hit | Self::Miss)
    }
}

/// Which side is acting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    #[default]
    Player,
    Enemy,
}

/// Top-level match state machine.
///
/// Won and Lost are terminal display states; leaving them requires
/// rebuilding the match from a fresh configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Placement phase: the player arranges the fleet.
    #[default]
    Setup,
    /// Turns alternate between player and enemy.
    Playing,
    Won,
    Lost,
}

/// Player-usable stratagems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stratagem {
    /// Defensive 1x1: marks one own cell to absorb a single enemy attack.
    EmergencyShield,
    /// Offensive 1x3 vertical strike on the enemy grid.
    OrbitalLaser,
    /// Offensive 3x3 area strike on the enemy grid.
    OrbitalHellbomb,
}

/// Enemy-side weapons, drawn from the per-mission arsenal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyWeapon {
    /// 3x3 area weapon that telegraphs for one turn before detonating.
    VoidLance,
    /// 2x2 area weapon fired without warning.
    PlasmaBarrage,
}

/// Cosmetic tag recording what kind of weapon struck a cell.
/// Informational only; never consulted by game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactMark {
    Laser,
    Hellbomb,
    Lance,
    Barrage,
}

/// Result of resolving one attack against one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// A ship cell was struck.
    Hit,
    /// Open water.
    Miss,
    /// A player-side emergency shield soaked the attack and was consumed.
    Absorbed,
    /// An enemy shield dropped from 2 to 1: damaged, now visible, still live.
    ShieldCracked,
    /// An enemy shield dropped from 1 to 0 and no longer intercepts.
    ShieldBroken,
}

/// Game mode tag attached to submitted scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Campaign,
    Endless,
}

/// Severity for user-facing notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Warning,
    Critical,
}
