//! Endless-mode wave generation.
//!
//! Difficulty scales monotonically with the wave number: the grid grows,
//! the enemy roster thickens, the AI sharpens, and enemy ship cells start
//! arriving shielded. The player side scales separately through
//! meta-progression.

use voidfleet_core::config::{ArsenalSlot, MatchConfig};
use voidfleet_core::constants::MAX_GRID_SIZE;
use voidfleet_core::enums::EnemyWeapon;

use crate::fleet;
use crate::upgrades::MetaProgression;

/// AI smartness cap for endless waves.
const SMARTNESS_CAP: u32 = 90;

/// First wave carrying the Harbinger.
const BOSS_FIRST_WAVE: u32 = 6;

/// Radar sweeps granted per wave.
pub const RADAR_CHARGES_PER_WAVE: u32 = 3;

/// Build the configuration for endless wave `wave` (1-based).
pub fn endless_config(wave: u32, meta: &MetaProgression) -> MatchConfig {
    let wave = wave.max(1);

    let mut config = MatchConfig::bare(grid_size(wave));
    config.ai_smartness = smartness(wave) as u8;

    // Roster: one base hull always; stalkers join after wave 2, growing
    // with the wave; the Harbinger arrives at wave 6.
    config.enemy_fleet.push(fleet::raider());
    if wave > 2 {
        for _ in 0..(wave / 3 + 1) {
            config.enemy_fleet.push(fleet::stalker());
        }
    }
    if wave >= BOSS_FIRST_WAVE {
        config.enemy_fleet.push(fleet::harbinger());
        config.boss = true;
    }

    let barrages = wave / 3;
    if barrages > 0 {
        config
            .enemy_arsenal
            .push(ArsenalSlot::new(EnemyWeapon::PlasmaBarrage, barrages));
    }
    if wave > 8 {
        config
            .enemy_arsenal
            .push(ArsenalSlot::new(EnemyWeapon::VoidLance, 1));
    }

    config.shield_quota = shield_quota(wave);
    config.radar_charges = RADAR_CHARGES_PER_WAVE;
    config.player_fleet = meta.player_fleet();
    config.player_stratagems = meta.player_stratagems();
    config
}

/// Smartness: 10 + 5 per wave, capped at 90.
fn smartness(wave: u32) -> u32 {
    (10 + 5 * wave).min(SMARTNESS_CAP)
}

/// Grid edge: starts at 6, grows by 2 every 2 waves, capped at 12.
fn grid_size(wave: u32) -> u8 {
    (6 + 2 * ((wave - 1) / 2)).min(MAX_GRID_SIZE as u32) as u8
}

/// Shielded-cell quota: none before wave 5, then stepping up to 20 from
/// wave 20 on. The engine clamps to the actual enemy cell count.
pub fn shield_quota(wave: u32) -> u32 {
    match wave {
        0..=4 => 0,
        5..=9 => 4,
        10..=14 => 8,
        15..=19 => 14,
        _ => 20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave1_is_the_floor() {
        let config = endless_config(1, &MetaProgression::default());
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.ai_smartness, 15);
        assert!(!config.boss);
        assert!(config.enemy_arsenal.is_empty());
        assert_eq!(config.shield_quota, 0);
        assert_eq!(config.enemy_fleet.len(), 1);
    }

    #[test]
    fn wave9_composition() {
        let config = endless_config(9, &MetaProgression::default());
        assert_eq!(config.ai_smartness, 55);
        assert!(config.boss, "Harbinger present past wave 5");
        assert!(config
            .enemy_fleet
            .iter()
            .any(|s| s.boss));
        let barrage = config
            .enemy_arsenal
            .iter()
            .find(|s| s.weapon == EnemyWeapon::PlasmaBarrage)
            .unwrap();
        assert_eq!(barrage.count, 3);
        // Lance only past wave 8.
        assert!(config
            .enemy_arsenal
            .iter()
            .any(|s| s.weapon == EnemyWeapon::VoidLance));
        // Stalkers: wave/3 + 1 = 4.
        let stalkers = config
            .enemy_fleet
            .iter()
            .filter(|s| s.id == "stalker")
            .count();
        assert_eq!(stalkers, 4);
    }

    #[test]
    fn grid_grows_by_2_every_2_waves() {
        let meta = MetaProgression::default();
        let sizes: Vec<u8> = (1..=10)
            .map(|w| endless_config(w, &meta).grid_size)
            .collect();
        assert_eq!(sizes, vec![6, 6, 8, 8, 10, 10, 12, 12, 12, 12]);
    }

    #[test]
    fn smartness_caps_at_90() {
        let meta = MetaProgression::default();
        assert_eq!(endless_config(16, &meta).ai_smartness, 90);
        assert_eq!(endless_config(40, &meta).ai_smartness, 90);
    }

    #[test]
    fn no_lance_before_wave_9() {
        let meta = MetaProgression::default();
        assert!(!endless_config(8, &meta)
            .enemy_arsenal
            .iter()
            .any(|s| s.weapon == EnemyWeapon::VoidLance));
        assert!(endless_config(9, &meta)
            .enemy_arsenal
            .iter()
            .any(|s| s.weapon == EnemyWeapon::VoidLance));
    }

    #[test]
    fn shield_quota_steps() {
        assert_eq!(shield_quota(4), 0);
        assert_eq!(shield_quota(5), 4);
        assert_eq!(shield_quota(12), 8);
        assert_eq!(shield_quota(19), 14);
        assert_eq!(shield_quota(20), 20);
        assert_eq!(shield_quota(35), 20);
    }

    #[test]
    fn meta_progression_reaches_the_config() {
        let meta = MetaProgression {
            ammo_tier: 2,
            reinforcement_tier: 1,
            salvage: 0,
        };
        let config = endless_config(3, &meta);
        assert_eq!(config.player_fleet.len(), 3);
        assert_eq!(config.player_stratagems[1].count, 4);
    }
}
