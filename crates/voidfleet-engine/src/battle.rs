//! The match aggregate and its action methods.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use voidfleet_ai::{decide, AiAction, AiContext};
use voidfleet_board::placement::{is_valid_placement, place_ship, remark_ships, ship_at};
use voidfleet_board::{placement, Grid};
use voidfleet_core::config::MatchConfig;
use voidfleet_core::constants::{
    BOSS_BASE_HP, CHARGE_COUNTDOWN_TURNS, ENEMY_SHIELD_FULL, MIN_DEPLOYED_CLASSES,
    MIN_DEPLOYED_SHIPS, PLACEMENT_ATTEMPTS, WARP_ATTEMPTS,
};
use voidfleet_core::enums::{
    Actor, EnemyWeapon, ImpactMark, MatchPhase, NoticeLevel, ShotOutcome, Stratagem,
};
use voidfleet_core::errors::{ActionError, DeployError};
use voidfleet_core::events::{EffectEvent, Notice};
use voidfleet_core::ships::{PlacedShip, ShipSpec};
use voidfleet_core::state::ScoreTally;
use voidfleet_core::types::{ChargeState, Coord};

use crate::combat::{
    fleet_destroyed, resolve_area, resolve_cell, ship_destroyed, square_area,
};
use crate::stratagems;

/// A player stratagem with its mission-configured and remaining charges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StratagemState {
    pub kind: Stratagem,
    pub remaining: u32,
    pub initial: u32,
}

/// An enemy arsenal entry with remaining uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArsenalState {
    pub weapon: EnemyWeapon,
    pub remaining: u32,
}

/// What one resolved action did: which cells it touched, what it triggered,
/// and where the match stands afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub actor: Actor,
    pub shots: Vec<(Coord, ShotOutcome)>,
    pub events: Vec<EffectEvent>,
    pub phase: MatchPhase,
    pub turn: Actor,
}

/// The complete state of one match.
///
/// Built fresh from `(config, seed)` for every mission or wave and
/// discarded afterwards. All mutation goes through the action methods,
/// which refuse anything out of turn or out of phase; exactly one action
/// is ever in flight.
pub struct Battle {
    pub(crate) config: MatchConfig,
    rng: ChaCha8Rng,
    pub(crate) phase: MatchPhase,
    pub(crate) turn: Actor,
    pub(crate) turn_count: u32,
    pub(crate) player_grid: Grid,
    pub(crate) enemy_grid: Grid,
    pub(crate) player_fleet: Vec<PlacedShip>,
    pub(crate) player_reserve: Vec<ShipSpec>,
    pub(crate) enemy_fleet: Vec<PlacedShip>,
    pub(crate) stratagems: Vec<StratagemState>,
    pub(crate) arsenal: Vec<ArsenalState>,
    pub(crate) boss_hp: i32,
    pub(crate) charge: Option<ChargeState>,
    pub(crate) last_hit: Option<Coord>,
    pub(crate) reload: Option<u32>,
    pub(crate) radar_charges: u32,
    pub(crate) score: ScoreTally,
    pub(crate) events: Vec<EffectEvent>,
    pub(crate) notices: Vec<Notice>,
}

impl Battle {
    /// Build a match from its configuration. The enemy fleet is seated by
    /// randomized auto-placement and the shield quota is spread over
    /// distinct enemy ship cells; the player fleet starts in reserve,
    /// waiting for deployment.
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut enemy_grid = Grid::new(config.grid_size);
        let enemy_fleet = placement::auto_place(&config.enemy_fleet, config.grid_size, &mut rng);
        remark_ships(&mut enemy_grid, &enemy_fleet);

        // Shield quota: full-health shields on distinct enemy ship cells,
        // drawn without replacement.
        let mut shield_sites: Vec<Coord> =
            enemy_fleet.iter().flat_map(|ship| ship.cells()).collect();
        shield_sites.shuffle(&mut rng);
        for &at in shield_sites.iter().take(config.shield_quota as usize) {
            if let Some(cell) = enemy_grid.cell_mut(at) {
                cell.shield_health = ENEMY_SHIELD_FULL;
            }
        }

        let stratagems = config
            .player_stratagems
            .iter()
            .map(|slot| StratagemState {
                kind: slot.kind,
                remaining: slot.count,
                initial: slot.count,
            })
            .collect();
        let arsenal = config
            .enemy_arsenal
            .iter()
            .map(|slot| ArsenalState {
                weapon: slot.weapon,
                remaining: slot.count,
            })
            .collect();

        Self {
            player_grid: Grid::new(config.grid_size),
            enemy_grid,
            player_fleet: Vec::new(),
            player_reserve: config.player_fleet.clone(),
            enemy_fleet,
            stratagems,
            arsenal,
            boss_hp: BOSS_BASE_HP,
            charge: None,
            last_hit: None,
            reload: None,
            radar_charges: config.radar_charges,
            score: ScoreTally::default(),
            events: Vec::new(),
            notices: Vec::new(),
            phase: MatchPhase::Setup,
            turn: Actor::Player,
            turn_count: 0,
            rng,
            config,
        }
    }

    // --- Accessors ---

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn turn(&self) -> Actor {
        self.turn
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn score(&self) -> ScoreTally {
        self.score
    }

    pub fn boss_hp(&self) -> Option<i32> {
        self.boss_index().map(|_| self.boss_hp)
    }

    pub fn pending_charge(&self) -> Option<ChargeState> {
        self.charge
    }

    pub fn radar_charges(&self) -> u32 {
        self.radar_charges
    }

    pub fn reload_remaining(&self) -> Option<u32> {
        self.reload
    }

    pub fn stratagem_remaining(&self, kind: Stratagem) -> u32 {
        self.stratagems
            .iter()
            .find(|s| s.kind == kind)
            .map_or(0, |s| s.remaining)
    }

    pub fn player_reserve(&self) -> &[ShipSpec] {
        &self.player_reserve
    }

    pub fn player_fleet(&self) -> &[PlacedShip] {
        &self.player_fleet
    }

    /// Drain buffered notices for the shell's message queue.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // --- Setup phase ---

    /// Deploy one reserve ship at `origin`, optionally transposed when the
    /// hull allows rotation. Rejected without mutation if the placement is
    /// blocked, out of bounds, or the setup phase is over.
    pub fn deploy_ship(
        &mut self,
        reserve_index: usize,
        origin: Coord,
        transposed: bool,
    ) -> Result<(), DeployError> {
        if self.phase != MatchPhase::Setup {
            return Err(DeployError::NotInSetup);
        }
        let spec = self
            .player_reserve
            .get(reserve_index)
            .ok_or(DeployError::NotInReserve)?;
        let candidate = if transposed && spec.rotatable {
            spec.transposed()
        } else {
            spec.clone()
        };
        if !is_valid_placement(origin, &candidate, &self.player_fleet, self.config.grid_size) {
            return Err(DeployError::InvalidPlacement);
        }
        place_ship(
            &mut self.player_grid,
            &mut self.player_fleet,
            candidate,
            origin,
        );
        self.player_reserve.remove(reserve_index);
        Ok(())
    }

    /// Seat every remaining reserve ship best-effort, in the same
    /// attempt-budgeted way the enemy fleet is placed. Ships that never
    /// fit stay in reserve.
    pub fn auto_deploy(&mut self) {
        if self.phase != MatchPhase::Setup {
            return;
        }
        let mut unseated = Vec::new();
        for spec in std::mem::take(&mut self.player_reserve) {
            let mut seated = false;
            for _ in 0..PLACEMENT_ATTEMPTS {
                let candidate = if spec.rotatable && self.rng.gen_bool(0.5) {
                    spec.transposed()
                } else {
                    spec.clone()
                };
                let origin = Coord::new(
                    self.rng.gen_range(0..self.config.grid_size),
                    self.rng.gen_range(0..self.config.grid_size),
                );
                if is_valid_placement(origin, &candidate, &self.player_fleet, self.config.grid_size)
                {
                    place_ship(
                        &mut self.player_grid,
                        &mut self.player_fleet,
                        candidate,
                        origin,
                    );
                    seated = true;
                    break;
                }
            }
            if !seated {
                unseated.push(spec);
            }
        }
        self.player_reserve = unseated;
    }

    /// Leave setup and start the exchange of turns. Requires at least two
    /// deployed ships, and two distinct classes when the roster offers
    /// more than one. Rejection leaves everything untouched.
    pub fn start(&mut self) -> Result<(), DeployError> {
        if self.phase != MatchPhase::Setup {
            return Err(DeployError::NotInSetup);
        }
        let err = if self.player_fleet.len() < MIN_DEPLOYED_SHIPS {
            Some(DeployError::TooFewShips)
        } else if self.config.player_class_count() > 1
            && self.deployed_class_count() < MIN_DEPLOYED_CLASSES
        {
            Some(DeployError::TooFewClasses)
        } else {
            None
        };
        if let Some(err) = err {
            self.notice(NoticeLevel::Warning, err.to_string());
            return Err(err);
        }
        self.phase = MatchPhase::Playing;
        self.turn = Actor::Player;
        Ok(())
    }

    // --- Player actions ---

    /// Standard single-cell attack on the enemy grid. Ends the player's
    /// turn unless it ends the match.
    pub fn fire(&mut self, at: Coord) -> Result<TurnReport, ActionError> {
        self.ensure_player_turn()?;
        let cell = self.enemy_grid.cell(at).ok_or(ActionError::OutOfBounds)?;
        if cell.state.is_resolved() {
            return Err(ActionError::CellResolved);
        }

        let hp_before = self.boss_hp;
        let boss_index = self.boss_index();
        let outcome = resolve_cell(
            &mut self.enemy_grid,
            &self.enemy_fleet,
            boss_index,
            &mut self.boss_hp,
            at,
            None,
            &mut self.events,
        )
        .ok_or(ActionError::CellResolved)?;

        self.score.shots_fired += 1;
        if outcome == ShotOutcome::Hit {
            self.score.shots_hit += 1;
            self.tally_sunk(at);
        }
        let shots = vec![(at, outcome)];
        Ok(self.finish_player_offense(shots, hp_before))
    }

    /// Dispatch a stratagem. Offensive shapes strike the enemy grid and
    /// end the turn; the emergency shield prepares the player's own board
    /// and does not. Rejections consume nothing.
    pub fn use_stratagem(
        &mut self,
        kind: Stratagem,
        origin: Coord,
    ) -> Result<TurnReport, ActionError> {
        self.ensure_player_turn()?;
        if self.reload.is_some() {
            return Err(ActionError::Reloading);
        }
        if self.stratagem_remaining(kind) == 0 {
            return Err(ActionError::NoCharges);
        }
        if !stratagems::shape_in_bounds(kind, origin, self.config.grid_size) {
            return Err(ActionError::ShapeOutOfBounds);
        }

        self.consume_stratagem(kind);
        self.score.stratagems_used += 1;

        if !stratagems::is_offensive(kind) {
            // Emergency shield: one-time absorb on an own cell.
            if let Some(cell) = self.player_grid.cell_mut(origin) {
                cell.shielded = true;
            }
            return Ok(self.report(Actor::Player, Vec::new()));
        }

        let hp_before = self.boss_hp;
        let boss_index = self.boss_index();
        let cells = stratagems::shape_cells(kind, origin);
        let shots = resolve_area(
            &mut self.enemy_grid,
            &self.enemy_fleet,
            boss_index,
            &mut self.boss_hp,
            &cells,
            stratagems::impact_mark(kind),
            &mut self.events,
        );
        for &(at, outcome) in &shots {
            self.score.shots_fired += 1;
            if outcome == ShotOutcome::Hit {
                self.score.shots_hit += 1;
                self.tally_sunk(at);
            }
        }
        Ok(self.finish_player_offense(shots, hp_before))
    }

    /// Radar sweep: reveal a 3x3 region of the enemy grid in the snapshot.
    /// Preparatory: no combat effect, does not end the turn.
    pub fn scan(&mut self, origin: Coord) -> Result<TurnReport, ActionError> {
        self.ensure_player_turn()?;
        if self.radar_charges == 0 {
            return Err(ActionError::NoRadarCharges);
        }
        // Same 3x3 legality as the hellbomb: both far edges on the board.
        let size = self.config.grid_size as u32;
        if origin.x as u32 + 2 >= size || origin.y as u32 + 2 >= size {
            return Err(ActionError::ShapeOutOfBounds);
        }
        self.radar_charges -= 1;
        for at in square_area(origin, 3) {
            if let Some(cell) = self.enemy_grid.cell_mut(at) {
                cell.scanned = true;
            }
        }
        Ok(self.report(Actor::Player, Vec::new()))
    }

    /// Start the bulk stratagem reload, where the mission enables it.
    /// While it runs no stratagem may be dispatched; when the countdown
    /// reaches zero every count resets to its configured value.
    pub fn begin_reload(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        let turns = self.config.reload_turns.ok_or(ActionError::ReloadUnavailable)?;
        if self.reload.is_some() {
            return Err(ActionError::Reloading);
        }
        self.reload = Some(turns);
        self.events.push(EffectEvent::ReloadStarted { turns });
        Ok(())
    }

    // --- Enemy turn ---

    /// Decide and execute exactly one enemy action, then hand the turn
    /// back to the player unless the match ended.
    pub fn play_enemy_turn(&mut self) -> Result<TurnReport, ActionError> {
        if self.phase != MatchPhase::Playing {
            return Err(ActionError::NotPlaying);
        }
        if self.turn != Actor::Enemy {
            return Err(ActionError::NotYourTurn);
        }

        let ctx = AiContext {
            grid: &self.player_grid,
            smartness: self.config.ai_smartness,
            last_hit: self.last_hit,
            charge: self.charge,
            lance_uses: self.weapon_remaining(EnemyWeapon::VoidLance),
            barrage_uses: self.weapon_remaining(EnemyWeapon::PlasmaBarrage),
        };
        let action = decide(&ctx, &mut self.rng);
        let shots = match action {
            Some(action) => self.execute_enemy_action(action),
            None => Vec::new(),
        };

        // Warp after any non-losing branch while the boss lives.
        if self.phase == MatchPhase::Playing {
            self.maybe_warp_boss();
        }

        if self.phase == MatchPhase::Playing {
            self.turn = Actor::Player;
            self.turn_count += 1;
            self.score.turns_taken = self.turn_count;
            self.tick_reload();
        }
        Ok(self.report(Actor::Enemy, shots))
    }

    fn execute_enemy_action(&mut self, action: AiAction) -> Vec<(Coord, ShotOutcome)> {
        match action {
            AiAction::Detonate { origin } => {
                let cells = square_area(origin, 3);
                let shots = self.enemy_strike(&cells, Some(ImpactMark::Lance));
                self.take_weapon_use(EnemyWeapon::VoidLance);
                self.charge = None;
                self.events.push(EffectEvent::ChargeDetonated { origin });
                self.check_loss();
                shots
            }
            AiAction::ChargeTick => {
                if let Some(charge) = &mut self.charge {
                    charge.turns_left -= 1;
                    let telegraph = *charge;
                    self.events.push(EffectEvent::ChargeTelegraphed {
                        origin: telegraph.origin,
                        turns_left: telegraph.turns_left,
                    });
                }
                Vec::new()
            }
            AiAction::BeginCharge { origin } => {
                let charge = ChargeState {
                    origin,
                    turns_left: CHARGE_COUNTDOWN_TURNS,
                };
                self.charge = Some(charge);
                self.events.push(EffectEvent::ChargeTelegraphed {
                    origin,
                    turns_left: charge.turns_left,
                });
                self.notice(NoticeLevel::Critical, "Incoming charged attack detected");
                Vec::new()
            }
            AiAction::Barrage { origin } => {
                let cells = square_area(origin, 2);
                let shots = self.enemy_strike(&cells, Some(ImpactMark::Barrage));
                self.take_weapon_use(EnemyWeapon::PlasmaBarrage);
                self.check_loss();
                shots
            }
            AiAction::Fire { target } => {
                let mut dummy_hp = 0;
                let outcome = resolve_cell(
                    &mut self.player_grid,
                    &self.player_fleet,
                    None,
                    &mut dummy_hp,
                    target,
                    None,
                    &mut self.events,
                );
                match outcome {
                    Some(ShotOutcome::Hit) => self.last_hit = Some(target),
                    // A shield soak breaks the AI's trail.
                    Some(ShotOutcome::Absorbed) => self.last_hit = None,
                    _ => {}
                }
                self.check_loss();
                outcome.map(|o| (target, o)).into_iter().collect()
            }
        }
    }

    /// Area attack against the player grid. Player ships have no boss, so
    /// hull-integrity accounting is inert here.
    fn enemy_strike(
        &mut self,
        cells: &[Coord],
        mark: Option<ImpactMark>,
    ) -> Vec<(Coord, ShotOutcome)> {
        let mut dummy_hp = 0;
        resolve_area(
            &mut self.player_grid,
            &self.player_fleet,
            None,
            &mut dummy_hp,
            cells,
            mark,
            &mut self.events,
        )
    }

    // --- Boss warp ---

    /// Relocate the boss to a fresh random anchor and wipe the enemy
    /// grid's attack history. With no fresh anchor inside the attempt
    /// budget the boss stays put; the history is wiped either way.
    fn maybe_warp_boss(&mut self) {
        let Some(boss) = self.boss_index() else {
            return;
        };
        if !self.config.boss || self.boss_hp <= 0 {
            return;
        }
        self.warp_boss(boss);
    }

    fn warp_boss(&mut self, boss: usize) {
        let spec = self.enemy_fleet[boss].spec.clone();
        let current = self.enemy_fleet[boss].origin;
        let size = self.config.grid_size;
        if size >= spec.width && size >= spec.height {
            let others: Vec<PlacedShip> = self
                .enemy_fleet
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != boss)
                .map(|(_, ship)| ship.clone())
                .collect();
            for _ in 0..WARP_ATTEMPTS {
                let origin = Coord::new(
                    self.rng.gen_range(0..=size - spec.width),
                    self.rng.gen_range(0..=size - spec.height),
                );
                if origin == current {
                    continue;
                }
                if is_valid_placement(origin, &spec, &others, size) {
                    self.enemy_fleet[boss].origin = origin;
                    break;
                }
            }
        }
        self.enemy_grid.reset();
        remark_ships(&mut self.enemy_grid, &self.enemy_fleet);
        self.events.push(EffectEvent::BossWarped);
    }

    // --- Shared bookkeeping ---

    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != MatchPhase::Playing {
            return Err(ActionError::NotPlaying);
        }
        if self.turn != Actor::Player {
            return Err(ActionError::NotYourTurn);
        }
        Ok(())
    }

    /// Close out an offensive player action: run the single win check for
    /// the whole action, warp the boss if it was wounded but survived, and
    /// hand the turn to the enemy if play continues.
    fn finish_player_offense(
        &mut self,
        shots: Vec<(Coord, ShotOutcome)>,
        boss_hp_before: i32,
    ) -> TurnReport {
        if self.enemy_defeated() {
            self.phase = MatchPhase::Won;
            self.events.push(EffectEvent::MatchWon);
        } else {
            if self.boss_hp < boss_hp_before {
                self.maybe_warp_boss();
            }
            self.turn = Actor::Enemy;
        }
        self.report(Actor::Player, shots)
    }

    fn enemy_defeated(&self) -> bool {
        match self.boss_index() {
            Some(_) if self.config.boss => self.boss_hp <= 0,
            _ => fleet_destroyed(&self.enemy_grid, &self.enemy_fleet),
        }
    }

    fn check_loss(&mut self) {
        if fleet_destroyed(&self.player_grid, &self.player_fleet) {
            self.phase = MatchPhase::Lost;
            self.events.push(EffectEvent::MatchLost);
        }
    }

    fn tick_reload(&mut self) {
        if let Some(turns) = self.reload {
            if turns <= 1 {
                for slot in &mut self.stratagems {
                    slot.remaining = slot.initial;
                }
                self.reload = None;
                self.events.push(EffectEvent::ReloadComplete);
                self.notice(NoticeLevel::Info, "Stratagems reloaded");
            } else {
                self.reload = Some(turns - 1);
            }
        }
    }

    fn consume_stratagem(&mut self, kind: Stratagem) {
        if let Some(slot) = self.stratagems.iter_mut().find(|s| s.kind == kind) {
            slot.remaining = slot.remaining.saturating_sub(1);
        }
    }

    fn weapon_remaining(&self, weapon: EnemyWeapon) -> u32 {
        self.arsenal
            .iter()
            .find(|s| s.weapon == weapon)
            .map_or(0, |s| s.remaining)
    }

    fn take_weapon_use(&mut self, weapon: EnemyWeapon) {
        if let Some(slot) = self.arsenal.iter_mut().find(|s| s.weapon == weapon) {
            slot.remaining = slot.remaining.saturating_sub(1);
        }
    }

    pub(crate) fn boss_index(&self) -> Option<usize> {
        self.enemy_fleet.iter().position(|ship| ship.spec.boss)
    }

    /// Distinct ship classes among the deployed player fleet.
    fn deployed_class_count(&self) -> usize {
        let mut ids: Vec<&str> = self
            .player_fleet
            .iter()
            .map(|ship| ship.spec.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    fn tally_sunk(&mut self, at: Coord) {
        if let Some(index) = ship_at(&self.enemy_fleet, at) {
            if ship_destroyed(&self.enemy_grid, &self.enemy_fleet[index]) {
                self.score.ships_sunk += 1;
            }
        }
    }

    fn notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
            turn: self.turn_count,
        });
    }

    fn report(&mut self, actor: Actor, shots: Vec<(Coord, ShotOutcome)>) -> TurnReport {
        TurnReport {
            actor,
            shots,
            events: std::mem::take(&mut self.events),
            phase: self.phase,
            turn: self.turn,
        }
    }

    // --- Test hooks ---

    /// Build a match with a hand-laid enemy fleet, bypassing randomized
    /// placement. Test-only.
    #[cfg(test)]
    pub(crate) fn with_enemy_layout(
        config: MatchConfig,
        seed: u64,
        layout: Vec<(ShipSpec, Coord)>,
    ) -> Self {
        let mut battle = Self::new(
            MatchConfig {
                enemy_fleet: Vec::new(),
                shield_quota: 0,
                ..config
            },
            seed,
        );
        for (spec, origin) in layout {
            place_ship(&mut battle.enemy_grid, &mut battle.enemy_fleet, spec, origin);
        }
        battle
    }

    /// Direct mutable access to an enemy cell. Test-only.
    #[cfg(test)]
    pub(crate) fn enemy_cell_mut(&mut self, at: Coord) -> &mut voidfleet_core::types::Cell {
        self.enemy_grid.cell_mut(at).unwrap()
    }

    /// Force the enemy to resolve a specific single-cell shot, bypassing
    /// the decision procedure. Test-only.
    #[cfg(test)]
    pub(crate) fn force_enemy_fire(&mut self, target: Coord) -> TurnReport {
        assert_eq!(self.turn, Actor::Enemy);
        let shots = self.execute_enemy_action(AiAction::Fire { target });
        if self.phase == MatchPhase::Playing {
            self.maybe_warp_boss();
        }
        if self.phase == MatchPhase::Playing {
            self.turn = Actor::Player;
            self.turn_count += 1;
            self.tick_reload();
        }
        self.report(Actor::Enemy, shots)
    }

    /// Install a pending charge. Test-only.
    #[cfg(test)]
    pub(crate) fn set_charge(&mut self, origin: Coord, turns_left: u32) {
        self.charge = Some(ChargeState { origin, turns_left });
    }

    /// Override the boss hull integrity. Test-only.
    #[cfg(test)]
    pub(crate) fn set_boss_hp(&mut self, hp: i32) {
        self.boss_hp = hp;
    }

    #[cfg(test)]
    pub(crate) fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    #[cfg(test)]
    pub(crate) fn enemy_fleet(&self) -> &[PlacedShip] {
        &self.enemy_fleet
    }

    #[cfg(test)]
    pub(crate) fn enemy_grid(&self) -> &Grid {
        &self.enemy_grid
    }
}
