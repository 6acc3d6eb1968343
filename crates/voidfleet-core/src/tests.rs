#[cfg(test)]
mod tests {
    use crate::config::{ArsenalSlot, MatchConfig, StratagemSlot};
    use crate::enums::*;
    use crate::errors::{ActionError, DeployError};
    use crate::events::{EffectEvent, Notice};
    use crate::score::{MemorySink, ScoreEntry, ScoreSink};
    use crate::ships::{PlacedShip, ShipSpec};
    use crate::state::BattleSnapshot;
    use crate::types::{Cell, Coord};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_cell_state_serde() {
        let variants = vec![
            CellState::Empty,
            CellState::Ship,
            CellState::Hit,
            CellState::Miss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: CellState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_shot_outcome_serde() {
        let variants = vec![
            ShotOutcome::Hit,
            ShotOutcome::Miss,
            ShotOutcome::Absorbed,
            ShotOutcome::ShieldCracked,
            ShotOutcome::ShieldBroken,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ShotOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_effect_event_serde() {
        let events = vec![
            EffectEvent::ShieldAbsorbed {
                at: Coord::new(2, 2),
            },
            EffectEvent::BossDamaged { remaining_hp: 30 },
            EffectEvent::BossWarped,
            EffectEvent::ChargeTelegraphed {
                origin: Coord::new(1, 1),
                turns_left: 1,
            },
            EffectEvent::ReloadComplete,
            EffectEvent::MatchWon,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: EffectEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_notice_serde() {
        let notice = Notice {
            level: NoticeLevel::Critical,
            message: "INCOMING CHARGED ATTACK".to_string(),
            turn: 12,
        };
        let json = serde_json::to_string(&notice).unwrap();
        let back: Notice = serde_json::from_str(&json).unwrap();
        assert_eq!(notice, back);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = BattleSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BattleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(snapshot.turn, back.turn);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Coordinates ----

    #[test]
    fn test_coord_offset() {
        let c = Coord::new(3, 3);
        assert_eq!(c.offset(1, 0), Some(Coord::new(4, 3)));
        assert_eq!(c.offset(-3, -3), Some(Coord::new(0, 0)));
        assert_eq!(c.offset(-4, 0), None, "Negative x must be rejected");
        assert_eq!(c.offset(0, -4), None, "Negative y must be rejected");
    }

    #[test]
    fn test_coord_neighbors_at_origin() {
        let n = Coord::new(0, 0).neighbors();
        assert_eq!(n[0], None, "No cell above the origin");
        assert_eq!(n[1], Some(Coord::new(0, 1)));
        assert_eq!(n[2], None, "No cell left of the origin");
        assert_eq!(n[3], Some(Coord::new(1, 0)));
    }

    // ---- Cells ----

    #[test]
    fn test_cell_defaults() {
        let cell = Cell::default();
        assert_eq!(cell.state, CellState::Empty);
        assert!(!cell.shielded);
        assert_eq!(cell.shield_health, 0);
        assert!(!cell.shield_active());
        assert!(cell.impact.is_none());
    }

    #[test]
    fn test_resolved_states() {
        assert!(!CellState::Empty.is_resolved());
        assert!(!CellState::Ship.is_resolved());
        assert!(CellState::Hit.is_resolved());
        assert!(CellState::Miss.is_resolved());
    }

    // ---- Ships ----

    #[test]
    fn test_placed_ship_footprint() {
        let ship = PlacedShip::new(ShipSpec::new("raider", "Raider", 3, 1), Coord::new(2, 4));
        let cells: Vec<Coord> = ship.cells().collect();
        assert_eq!(
            cells,
            vec![Coord::new(2, 4), Coord::new(3, 4), Coord::new(4, 4)]
        );
        assert!(ship.covers(Coord::new(4, 4)));
        assert!(!ship.covers(Coord::new(5, 4)));
        assert!(!ship.covers(Coord::new(2, 5)));
    }

    #[test]
    fn test_spec_transposed() {
        let spec = ShipSpec::new("raider", "Raider", 3, 1);
        let t = spec.transposed();
        assert_eq!((t.width, t.height), (1, 3));
        assert_eq!(t.id, spec.id);
    }

    // ---- Config ----

    #[test]
    fn test_config_class_count() {
        let mut config = MatchConfig::bare(6);
        assert_eq!(config.player_class_count(), 0);
        config.player_fleet.push(ShipSpec::new("a", "A", 1, 2));
        config.player_fleet.push(ShipSpec::new("a", "A", 1, 2));
        config.player_fleet.push(ShipSpec::new("b", "B", 2, 2));
        assert_eq!(config.player_class_count(), 2);
    }

    #[test]
    fn test_config_serde() {
        let mut config = MatchConfig::bare(8);
        config.player_stratagems = vec![StratagemSlot::new(Stratagem::OrbitalLaser, 2)];
        config.enemy_arsenal = vec![ArsenalSlot::new(EnemyWeapon::PlasmaBarrage, 1)];
        config.ai_smartness = 40;
        config.dialogue = Some("wave-intro".to_string());
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    // ---- Errors ----

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            ActionError::CellResolved.to_string(),
            "that cell is already resolved"
        );
        assert_eq!(
            DeployError::TooFewShips.to_string(),
            "deploy at least two ships before launching"
        );
    }

    // ---- Score sink ----

    #[test]
    fn test_memory_sink_collects() {
        let mut sink = MemorySink::default();
        sink.submit(ScoreEntry {
            player: "kestrel".to_string(),
            score: 420,
            mode: GameMode::Endless,
            stage: 7,
        });
        assert_eq!(sink.entries.len(), 1);
        assert_eq!(sink.entries[0].score, 420);
    }
}
