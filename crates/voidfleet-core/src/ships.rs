//! Ship templates and placed-ship records.

use serde::{Deserialize, Serialize};

use crate::types::Coord;

/// A ship template: everything about a hull class except where it sits.
///
/// `id` is the class identity used by the fleet-diversity rule at battle
/// start; `icon` is an opaque asset key for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub id: String,
    pub name: String,
    pub width: u8,
    pub height: u8,
    pub icon: String,
    /// Whether auto-placement may transpose width and height.
    pub rotatable: bool,
    /// Boss hulls use hull-integrity damage accounting and can warp.
    pub boss: bool,
}

impl ShipSpec {
    pub fn new(id: &str, name: &str, width: u8, height: u8) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            width,
            height,
            icon: format!("ship-{id}"),
            rotatable: true,
            boss: false,
        }
    }

    /// Swap width and height.
    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            ..self.clone()
        }
    }

    pub fn cell_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

/// A ship committed to the board at an anchor coordinate.
///
/// The anchor is the top-left cell of the footprint. Ships never move after
/// placement, with the single exception of boss warps handled by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedShip {
    pub spec: ShipSpec,
    pub origin: Coord,
}

impl PlacedShip {
    pub fn new(spec: ShipSpec, origin: Coord) -> Self {
        Self { spec, origin }
    }

    /// Every coordinate covered by this ship's footprint.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let origin = self.origin;
        (0..self.spec.height).flat_map(move |dy| {
            (0..self.spec.width)
                .map(move |dx| Coord::new(origin.x + dx, origin.y + dy))
        })
    }

    pub fn covers(&self, at: Coord) -> bool {
        at.x >= self.origin.x
            && at.y >= self.origin.y
            && at.x < self.origin.x + self.spec.width
            && at.y < self.origin.y + self.spec.height
    }
}
