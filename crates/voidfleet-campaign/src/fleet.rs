//! The hull catalog shared by missions and the endless generator.

use voidfleet_core::ships::ShipSpec;

/// Player escort: 1x2, rotatable.
pub fn lancer() -> ShipSpec {
    ShipSpec::new("lancer", "Lancer", 1, 2)
}

/// Player cruiser: 2x2.
pub fn vanguard() -> ShipSpec {
    ShipSpec::new("vanguard", "Vanguard", 2, 2)
}

/// Player capital ship: 2x4. Too long for the placement UI to rotate,
/// so auto-placement keeps its orientation fixed.
pub fn dreadnought() -> ShipSpec {
    let mut spec = ShipSpec::new("dreadnought", "Dreadnought", 2, 4);
    spec.rotatable = false;
    spec
}

/// Base enemy hull: 3x1, rotatable.
pub fn raider() -> ShipSpec {
    ShipSpec::new("raider", "Raider", 3, 1)
}

/// Heavier enemy hull: 2x2.
pub fn stalker() -> ShipSpec {
    ShipSpec::new("stalker", "Stalker", 2, 2)
}

/// The Harbinger: 3x3 boss. Fixed orientation; damage goes against hull
/// integrity and the engine may warp it between turns.
pub fn harbinger() -> ShipSpec {
    let mut spec = ShipSpec::new("harbinger", "Harbinger", 3, 3);
    spec.rotatable = false;
    spec.boss = true;
    spec
}
