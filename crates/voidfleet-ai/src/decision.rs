//! The per-turn enemy decision procedure.

use rand::seq::SliceRandom;
use rand::Rng;

use voidfleet_board::Grid;
use voidfleet_core::constants::{BARRAGE_PROBABILITY, CHARGE_PROBABILITY};
use voidfleet_core::types::{ChargeState, Coord};

/// Everything the enemy controller looks at when choosing its action.
///
/// The AI sees the player grid fully (it is the defender's own board);
/// fairness comes from the decision rules, not information hiding.
pub struct AiContext<'a> {
    pub grid: &'a Grid,
    /// Hunt-mode trigger chance, 0-100.
    pub smartness: u8,
    /// Coordinate of the AI's last successful hit, if it still has a trail.
    pub last_hit: Option<Coord>,
    /// Pending telegraphed attack, if one is charging.
    pub charge: Option<ChargeState>,
    /// Remaining Void Lance (charged 3x3) uses.
    pub lance_uses: u32,
    /// Remaining Plasma Barrage (instant 2x2) uses.
    pub barrage_uses: u32,
}

/// The single action the enemy takes this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// Detonate the pending charge as a 3x3 area attack.
    Detonate { origin: Coord },
    /// Keep charging: countdown decrements, no board effect.
    ChargeTick,
    /// Start a new charge at the given 3x3 origin.
    BeginCharge { origin: Coord },
    /// Fire the instant 2x2 area weapon.
    Barrage { origin: Coord },
    /// Single-cell attack.
    Fire { target: Coord },
}

/// Choose the enemy action for this turn.
///
/// Branches are evaluated in strict priority order; the first applicable
/// one wins. Returns `None` only when no unresolved cell remains anywhere,
/// which a running match never reaches (the loss check fires first).
pub fn decide<R: Rng + ?Sized>(ctx: &AiContext, rng: &mut R) -> Option<AiAction> {
    // 1+2. A pending charge preempts everything: detonate at zero,
    // otherwise keep counting down.
    if let Some(charge) = ctx.charge {
        return Some(if charge.turns_left == 0 {
            AiAction::Detonate {
                origin: charge.origin,
            }
        } else {
            AiAction::ChargeTick
        });
    }

    let size = ctx.grid.size();

    // 3. Chance to begin a new charge.
    if ctx.lance_uses > 0 && size >= 3 && rng.gen_bool(CHARGE_PROBABILITY) {
        let origin = Coord::new(rng.gen_range(0..=size - 3), rng.gen_range(0..=size - 3));
        return Some(AiAction::BeginCharge { origin });
    }

    // 4. Chance to fire the instant area weapon. Origins whose whole 2x2
    // footprint is already resolved are excluded so the shot is never a
    // total waste; if nothing qualifies the roll falls through.
    if ctx.barrage_uses > 0 && size >= 2 && rng.gen_bool(BARRAGE_PROBABILITY) {
        let candidates = barrage_origins(ctx.grid);
        if let Some(&origin) = candidates.choose(rng) {
            return Some(AiAction::Barrage { origin });
        }
    }

    // 5. Targeted single shot: hunt the last hit's neighborhood on a
    // successful smartness roll, otherwise pick uniformly at random.
    if let Some(target) = hunt_target(ctx, rng).or_else(|| random_target(ctx.grid, rng)) {
        return Some(AiAction::Fire { target });
    }
    None
}

/// 2x2 origins covering at least one unresolved cell.
fn barrage_origins(grid: &Grid) -> Vec<Coord> {
    let size = grid.size();
    let mut origins = Vec::new();
    for y in 0..=size - 2 {
        for x in 0..=size - 2 {
            let origin = Coord::new(x, y);
            let fresh = area_cells(origin, 2)
                .into_iter()
                .any(|c| matches!(grid.cell(c), Some(cell) if !cell.state.is_resolved()));
            if fresh {
                origins.push(origin);
            }
        }
    }
    origins
}

/// Hunt mode: the four axis-adjacent cells of the last hit, shuffled,
/// filtered to in-bounds and unresolved; first survivor wins. Yields
/// nothing when the smartness roll fails, no hit is remembered, or the
/// whole neighborhood is already resolved.
fn hunt_target<R: Rng + ?Sized>(ctx: &AiContext, rng: &mut R) -> Option<Coord> {
    let last = ctx.last_hit?;
    if rng.gen_range(0u32..100) >= ctx.smartness as u32 {
        return None;
    }
    let mut neighbors: Vec<Coord> = last.neighbors().into_iter().flatten().collect();
    neighbors.shuffle(rng);
    neighbors
        .into_iter()
        .find(|&c| matches!(ctx.grid.cell(c), Some(cell) if !cell.state.is_resolved()))
}

fn random_target<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Coord> {
    grid.unresolved().choose(rng).copied()
}

fn area_cells(origin: Coord, edge: u8) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(edge as usize * edge as usize);
    for dy in 0..edge {
        for dx in 0..edge {
            cells.push(Coord::new(origin.x + dx, origin.y + dy));
        }
    }
    cells
}
