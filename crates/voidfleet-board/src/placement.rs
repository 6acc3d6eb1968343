//! Fleet placement: validation, commit, and randomized auto-placement.

use rand::Rng;

use voidfleet_core::constants::PLACEMENT_ATTEMPTS;
use voidfleet_core::enums::CellState;
use voidfleet_core::ships::{PlacedShip, ShipSpec};
use voidfleet_core::types::Coord;

use crate::grid::Grid;

/// Pure placement predicate: the footprint anchored at `origin` must stay
/// inside the grid on both axes and share no cell with any ship already in
/// `placed`. No side effects.
pub fn is_valid_placement(
    origin: Coord,
    spec: &ShipSpec,
    placed: &[PlacedShip],
    grid_size: u8,
) -> bool {
    if origin.x as u32 + spec.width as u32 > grid_size as u32
        || origin.y as u32 + spec.height as u32 > grid_size as u32
    {
        return false;
    }
    let candidate = PlacedShip::new(spec.clone(), origin);
    let valid = candidate
        .cells()
        .all(|c| placed.iter().all(|ship| !ship.covers(c)));
    valid
}

/// Commit a placement: append the record and mark every covered cell as
/// ship. Contract: the caller has already validated `(origin, spec)`
/// against `placed`; this function does not re-check.
pub fn place_ship(grid: &mut Grid, placed: &mut Vec<PlacedShip>, spec: ShipSpec, origin: Coord) {
    let ship = PlacedShip::new(spec, origin);
    for c in ship.cells() {
        if let Some(cell) = grid.cell_mut(c) {
            cell.state = CellState::Ship;
        }
    }
    placed.push(ship);
}

/// Index of the placed ship covering `at`, if any.
pub fn ship_at(placed: &[PlacedShip], at: Coord) -> Option<usize> {
    placed.iter().position(|ship| ship.covers(at))
}

/// Best-effort randomized placement of a whole fleet.
///
/// For each ship, up to [`PLACEMENT_ATTEMPTS`] candidates are drawn: a
/// uniform anchor plus, for rotatable hulls, a coin flip on transposing the
/// footprint. The first candidate that passes bounds and overlap wins. A
/// ship that never fits is silently left unplaced; that is an accepted
/// degraded outcome, not an error.
pub fn auto_place<R: Rng + ?Sized>(
    specs: &[ShipSpec],
    grid_size: u8,
    rng: &mut R,
) -> Vec<PlacedShip> {
    let mut placed = Vec::with_capacity(specs.len());
    for spec in specs {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let candidate = if spec.rotatable && rng.gen_bool(0.5) {
                spec.transposed()
            } else {
                spec.clone()
            };
            let origin = Coord::new(
                rng.gen_range(0..grid_size),
                rng.gen_range(0..grid_size),
            );
            if is_valid_placement(origin, &candidate, &placed, grid_size) {
                placed.push(PlacedShip::new(candidate, origin));
                break;
            }
        }
    }
    placed
}

/// Re-mark ship cells after a grid reset. Every cell covered by a placed
/// ship goes back to `Ship`; everything else stays as the reset left it.
pub fn remark_ships(grid: &mut Grid, placed: &[PlacedShip]) {
    for ship in placed {
        for c in ship.cells() {
            if let Some(cell) = grid.cell_mut(c) {
                cell.state = CellState::Ship;
            }
        }
    }
}
