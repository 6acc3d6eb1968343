//! Campaign mission catalog — hand-authored configurations.
//!
//! Each mission builds the same [`MatchConfig`] shape the endless
//! generator emits, so the engine consumes both through one path.

use voidfleet_core::config::{ArsenalSlot, MatchConfig, StratagemSlot};
use voidfleet_core::enums::{EnemyWeapon, Stratagem};

use crate::fleet;

/// Number of campaign missions.
pub fn mission_count() -> usize {
    4
}

/// Build the configuration for a campaign mission (0-based index).
pub fn mission(index: usize) -> Option<MatchConfig> {
    match index {
        0 => Some(first_patrol()),
        1 => Some(shielded_convoy()),
        2 => Some(long_siege()),
        3 => Some(harbinger_finale()),
        _ => None,
    }
}

/// Mission 1: "First Patrol"
/// Small grid, single raider, dull AI. Teaches firing and deployment.
fn first_patrol() -> MatchConfig {
    let mut config = MatchConfig::bare(6);
    config.player_fleet = vec![fleet::lancer(), fleet::vanguard()];
    config.enemy_fleet = vec![fleet::raider()];
    config.player_stratagems = vec![StratagemSlot::new(Stratagem::OrbitalLaser, 1)];
    config.ai_smartness = 20;
    config.dialogue = Some("briefing-first-patrol".to_string());
    config
}

/// Mission 2: "Shielded Convoy"
/// Two hulls under shields; introduces the barrage and the radar sweep.
fn shielded_convoy() -> MatchConfig {
    let mut config = MatchConfig::bare(8);
    config.player_fleet = vec![fleet::lancer(), fleet::lancer(), fleet::vanguard()];
    config.enemy_fleet = vec![fleet::raider(), fleet::stalker()];
    config.player_stratagems = vec![
        StratagemSlot::new(Stratagem::EmergencyShield, 1),
        StratagemSlot::new(Stratagem::OrbitalLaser, 2),
    ];
    config.enemy_arsenal = vec![ArsenalSlot::new(EnemyWeapon::PlasmaBarrage, 2)];
    config.ai_smartness = 45;
    config.shield_quota = 3;
    config.radar_charges = 1;
    config.dialogue = Some("briefing-shielded-convoy".to_string());
    config
}

/// Mission 3: "Long Siege"
/// Big roster on both sides with the bulk reload enabled.
fn long_siege() -> MatchConfig {
    let mut config = MatchConfig::bare(10);
    config.player_fleet = vec![
        fleet::lancer(),
        fleet::lancer(),
        fleet::vanguard(),
        fleet::dreadnought(),
    ];
    config.enemy_fleet = vec![
        fleet::raider(),
        fleet::raider(),
        fleet::stalker(),
        fleet::stalker(),
    ];
    config.player_stratagems = vec![
        StratagemSlot::new(Stratagem::EmergencyShield, 2),
        StratagemSlot::new(Stratagem::OrbitalLaser, 2),
        StratagemSlot::new(Stratagem::OrbitalHellbomb, 1),
    ];
    config.enemy_arsenal = vec![ArsenalSlot::new(EnemyWeapon::PlasmaBarrage, 3)];
    config.ai_smartness = 60;
    config.shield_quota = 5;
    config.reload_turns = Some(3);
    config.dialogue = Some("briefing-long-siege".to_string());
    config
}

/// Mission 4: "The Harbinger"
/// Boss finale: the Harbinger with a stalker escort, full arsenal.
fn harbinger_finale() -> MatchConfig {
    let mut config = MatchConfig::bare(10);
    config.player_fleet = vec![
        fleet::lancer(),
        fleet::lancer(),
        fleet::vanguard(),
        fleet::dreadnought(),
    ];
    config.enemy_fleet = vec![fleet::harbinger(), fleet::stalker()];
    config.player_stratagems = vec![
        StratagemSlot::new(Stratagem::EmergencyShield, 2),
        StratagemSlot::new(Stratagem::OrbitalLaser, 3),
        StratagemSlot::new(Stratagem::OrbitalHellbomb, 2),
    ];
    config.enemy_arsenal = vec![
        ArsenalSlot::new(EnemyWeapon::PlasmaBarrage, 2),
        ArsenalSlot::new(EnemyWeapon::VoidLance, 2),
    ];
    config.ai_smartness = 75;
    config.boss = true;
    config.reload_turns = Some(4);
    config.dialogue = Some("briefing-harbinger".to_string());
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_dense() {
        for index in 0..mission_count() {
            assert!(mission(index).is_some(), "Mission {index} missing");
        }
        assert!(mission(mission_count()).is_none());
    }

    #[test]
    fn every_mission_is_playable() {
        for index in 0..mission_count() {
            let config = mission(index).unwrap();
            assert!(config.grid_size >= 5);
            assert!(
                config.player_fleet.len() >= 2,
                "Mission {index}: the start rule needs at least two ships"
            );
            assert!(!config.enemy_fleet.is_empty());
            assert!(config.ai_smartness <= 100);
            assert!(config.dialogue.is_some());
        }
    }

    #[test]
    fn only_the_finale_has_a_boss() {
        for index in 0..mission_count() {
            let config = mission(index).unwrap();
            let has_boss_hull = config.enemy_fleet.iter().any(|s| s.boss);
            assert_eq!(config.boss, has_boss_hull);
            assert_eq!(config.boss, index == 3);
        }
    }
}
