//! Engine constants and tuning parameters.

// --- Grids ---

/// Smallest grid any configuration may request.
pub const MIN_GRID_SIZE: u8 = 5;

/// Largest grid any configuration may request.
pub const MAX_GRID_SIZE: u8 = 12;

// --- Placement ---

/// Randomized candidates tried per ship before auto-placement gives up
/// and leaves the ship unplaced.
pub const PLACEMENT_ATTEMPTS: u32 = 100;

// --- Boss ---

/// Harbinger hull integrity. Every struck footprint cell removes one point.
pub const BOSS_BASE_HP: i32 = 33;

/// Candidate anchors tried before a warp leaves the boss where it is.
pub const WARP_ATTEMPTS: u32 = 100;

// --- Enemy shields ---

/// Shield strength assigned to a freshly shielded enemy cell.
pub const ENEMY_SHIELD_FULL: u8 = 2;

// --- Enemy AI ---

/// Per-turn probability of starting a Void Lance charge.
pub const CHARGE_PROBABILITY: f64 = 0.15;

/// Per-turn probability of firing a Plasma Barrage.
pub const BARRAGE_PROBABILITY: f64 = 0.20;

/// Enemy turns between a charge telegraph and its detonation.
pub const CHARGE_COUNTDOWN_TURNS: u32 = 1;

// --- Battle start ---

/// Minimum ships the player must deploy before a battle may begin.
pub const MIN_DEPLOYED_SHIPS: usize = 2;

/// Minimum distinct ship classes deployed, when the roster has more than one.
pub const MIN_DEPLOYED_CLASSES: usize = 2;
