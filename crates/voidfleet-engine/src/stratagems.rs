//! Player stratagem shapes and legality.

use voidfleet_core::enums::{ImpactMark, Stratagem};
use voidfleet_core::types::Coord;

use crate::combat::square_area;

/// Whether a stratagem strikes the enemy grid (true) or prepares the
/// player's own board (false). Defensive use does not end the turn and
/// never triggers a win check.
pub fn is_offensive(kind: Stratagem) -> bool {
    match kind {
        Stratagem::EmergencyShield => false,
        Stratagem::OrbitalLaser | Stratagem::OrbitalHellbomb => true,
    }
}

/// Grid-size-dependent legality of the stratagem's footprint at `origin`.
pub fn shape_in_bounds(kind: Stratagem, origin: Coord, grid_size: u8) -> bool {
    if origin.x >= grid_size || origin.y >= grid_size {
        return false;
    }
    match kind {
        Stratagem::EmergencyShield => true,
        // 1x3 vertical: the bottom row must stay on the board.
        Stratagem::OrbitalLaser => origin.y + 2 < grid_size,
        // 3x3: both far edges must stay on the board.
        Stratagem::OrbitalHellbomb => origin.x + 2 < grid_size && origin.y + 2 < grid_size,
    }
}

/// The cells covered by the stratagem's footprint. Caller checks legality
/// first; this just enumerates the shape.
pub fn shape_cells(kind: Stratagem, origin: Coord) -> Vec<Coord> {
    match kind {
        Stratagem::EmergencyShield => vec![origin],
        Stratagem::OrbitalLaser => (0..3)
            .map(|dy| Coord::new(origin.x, origin.y + dy))
            .collect(),
        Stratagem::OrbitalHellbomb => square_area(origin, 3),
    }
}

/// Impact tag recorded on cells struck by the stratagem.
pub fn impact_mark(kind: Stratagem) -> Option<ImpactMark> {
    match kind {
        Stratagem::EmergencyShield => None,
        Stratagem::OrbitalLaser => Some(ImpactMark::Laser),
        Stratagem::OrbitalHellbomb => Some(ImpactMark::Hellbomb),
    }
}
