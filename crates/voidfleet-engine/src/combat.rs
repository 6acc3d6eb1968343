//! Attack resolution against a defending grid.
//!
//! The same procedure serves both directions: player shots against the
//! enemy grid and enemy weapons against the player grid. Only the caller
//! knows who is shooting; the resolver only sees the defender's side.

use voidfleet_board::placement::ship_at;
use voidfleet_board::Grid;
use voidfleet_core::enums::{CellState, ImpactMark, ShotOutcome};
use voidfleet_core::events::EffectEvent;
use voidfleet_core::ships::PlacedShip;
use voidfleet_core::types::Coord;

/// Resolve one attack against one cell of the defending grid.
///
/// Shield interception comes first: a player-side emergency shield is
/// consumed whole, an enemy-side shield loses exactly one point. Only an
/// unshielded cell resolves against the fleet: covered becomes hit
/// (decrementing boss hull integrity when the covering ship is the boss),
/// uncovered becomes miss. A hit is never downgraded.
///
/// Returns `None` for out-of-bounds or already-resolved cells; such cells
/// are skipped, never re-resolved.
pub fn resolve_cell(
    grid: &mut Grid,
    fleet: &[PlacedShip],
    boss_index: Option<usize>,
    boss_hp: &mut i32,
    at: Coord,
    mark: Option<ImpactMark>,
    events: &mut Vec<EffectEvent>,
) -> Option<ShotOutcome> {
    let cell = grid.cell_mut(at)?;
    if cell.state.is_resolved() {
        return None;
    }

    if cell.shielded {
        cell.shielded = false;
        events.push(EffectEvent::ShieldAbsorbed { at });
        return Some(ShotOutcome::Absorbed);
    }

    if cell.shield_health > 0 {
        cell.shield_health -= 1;
        return Some(if cell.shield_health > 0 {
            events.push(EffectEvent::ShieldCracked { at });
            ShotOutcome::ShieldCracked
        } else {
            events.push(EffectEvent::ShieldBroken { at });
            ShotOutcome::ShieldBroken
        });
    }

    match ship_at(fleet, at) {
        Some(index) => {
            cell.state = CellState::Hit;
            cell.impact = mark;
            if boss_index == Some(index) {
                *boss_hp -= 1;
                events.push(EffectEvent::BossDamaged {
                    remaining_hp: *boss_hp,
                });
            }
            Some(ShotOutcome::Hit)
        }
        None => {
            cell.state = CellState::Miss;
            cell.impact = mark;
            Some(ShotOutcome::Miss)
        }
    }
}

/// Resolve an area attack: independent single-cell resolution over every
/// coordinate in the shape. Boss damage accumulates across the whole area
/// through `boss_hp`; the caller runs the win check once afterwards, not
/// per cell. Skipped cells (out of bounds, already resolved) produce no
/// entry.
pub fn resolve_area(
    grid: &mut Grid,
    fleet: &[PlacedShip],
    boss_index: Option<usize>,
    boss_hp: &mut i32,
    cells: &[Coord],
    mark: Option<ImpactMark>,
    events: &mut Vec<EffectEvent>,
) -> Vec<(Coord, ShotOutcome)> {
    cells
        .iter()
        .filter_map(|&at| {
            resolve_cell(grid, fleet, boss_index, boss_hp, at, mark, events)
                .map(|outcome| (at, outcome))
        })
        .collect()
}

/// The coordinates of a square area with the given edge length, anchored
/// at its top-left corner.
pub fn square_area(origin: Coord, edge: u8) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(edge as usize * edge as usize);
    for dy in 0..edge {
        for dx in 0..edge {
            cells.push(Coord::new(origin.x + dx, origin.y + dy));
        }
    }
    cells
}

/// True when every footprint cell of every ship in `fleet` is hit.
/// An empty fleet is never considered defeated.
pub fn fleet_destroyed(grid: &Grid, fleet: &[PlacedShip]) -> bool {
    !fleet.is_empty()
        && fleet.iter().all(|ship| {
            ship.cells()
                .all(|c| matches!(grid.cell(c), Some(cell) if cell.state == CellState::Hit))
        })
}

/// True when every cell of one ship is hit.
pub fn ship_destroyed(grid: &Grid, ship: &PlacedShip) -> bool {
    ship.cells()
        .all(|c| matches!(grid.cell(c), Some(cell) if cell.state == CellState::Hit))
}
