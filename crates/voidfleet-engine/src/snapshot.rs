//! Snapshot building — the masked view of a battle for the shell.

use voidfleet_core::constants::ENEMY_SHIELD_FULL;
use voidfleet_core::enums::CellState;
use voidfleet_core::state::{
    BattleSnapshot, EnemyCellView, PlayerCellView, StratagemView,
};
use voidfleet_core::types::Cell;

use crate::battle::Battle;

impl Battle {
    /// Build the complete player-visible state. The player grid is shown
    /// in full; the enemy grid goes through fog-of-war masking. Buffered
    /// events and notices are included as-is (reports drain events, so
    /// normally only notices remain here).
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.phase,
            turn: self.turn,
            turn_count: self.turn_count,
            grid_size: self.config.grid_size,
            player_cells: self
                .player_grid
                .cells()
                .iter()
                .map(|cell| PlayerCellView {
                    state: cell.state,
                    shielded: cell.shielded,
                    impact: cell.impact,
                })
                .collect(),
            enemy_cells: self.enemy_grid.cells().iter().map(mask_enemy_cell).collect(),
            stratagems: self
                .stratagems
                .iter()
                .map(|slot| StratagemView {
                    kind: slot.kind,
                    remaining: slot.remaining,
                    initial: slot.initial,
                    icon: format!("stratagem-{:?}", slot.kind).to_lowercase(),
                })
                .collect(),
            boss_hp: if self.config.boss {
                self.boss_index().map(|_| self.boss_hp)
            } else {
                None
            },
            incoming_charge: self.charge,
            reload_turns: self.reload,
            radar_charges: self.radar_charges,
            score: self.score,
            dialogue: self.config.dialogue.clone(),
            events: self.events.clone(),
            notices: self.notices.clone(),
        }
    }
}

/// Fog-of-war for one enemy cell.
///
/// Resolved cells are public knowledge. A full-health shield conceals
/// everything under it, including from radar. A cracked shield is visible.
/// Beyond that, only radar-scanned ship cells show through.
fn mask_enemy_cell(cell: &Cell) -> EnemyCellView {
    match cell.state {
        CellState::Hit => EnemyCellView::Hit,
        CellState::Miss => EnemyCellView::Miss,
        _ if cell.shield_health >= ENEMY_SHIELD_FULL => EnemyCellView::Unknown,
        _ if cell.shield_health > 0 => EnemyCellView::Shield,
        CellState::Ship if cell.scanned => EnemyCellView::ShipRevealed,
        _ => EnemyCellView::Unknown,
    }
}
