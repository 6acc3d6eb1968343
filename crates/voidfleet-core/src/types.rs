//! Fundamental board types: coordinates and cells.

use serde::{Deserialize, Serialize};

use crate::enums::{CellState, ImpactMark};

/// A board coordinate. `x` is the column, `y` the row, both 0-indexed.
///
/// Coordinates are stored unsigned; whether a coordinate lies on a given
/// board is a per-grid question (grids range from 5x5 to 12x12), answered
/// by `Grid::in_bounds`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta. Returns `None` if either component would
    /// leave the representable (non-negative) range; the upper bound is
    /// checked against the grid, not here.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        if (0..=u8::MAX as i32).contains(&x) && (0..=u8::MAX as i32).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// The four axis-adjacent coordinates (up, down, left, right), in that
    /// order. Entries that would underflow are `None`; bounds against the
    /// grid are still the caller's concern.
    pub fn neighbors(self) -> [Option<Self>; 4] {
        [
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }
}

/// One board square.
///
/// `state` only ever moves forward along empty -> ship -> hit | miss;
/// hit and miss are terminal for the rest of the match. The two shield
/// fields belong to different sides: `shielded` is the player-side one-time
/// absorb, `shield_health` the enemy-side two-point ablative shield
/// (2 = undamaged and concealed, 1 = cracked and visible, 0 = none).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    pub shielded: bool,
    pub shield_health: u8,
    /// Cosmetic tag recording which weapon last struck this cell.
    pub impact: Option<ImpactMark>,
    /// Set by a radar sweep; grants the snapshot a peek at this cell.
    pub scanned: bool,
}

impl Cell {
    /// Whether an enemy-side shield would still intercept an attack here.
    pub fn shield_active(&self) -> bool {
        self.shield_health > 0
    }
}

/// A telegraphed multi-turn enemy attack: where it will land and how many
/// enemy turns remain before detonation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeState {
    pub origin: Coord,
    pub turns_left: u32,
}
