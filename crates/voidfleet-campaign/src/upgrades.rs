//! Between-wave meta-progression.
//!
//! Salvage earned from cleared waves buys permanent upgrades along two
//! axes: ammo (stratagem charges per wave) and reinforcement (extra hulls
//! in the player roster). Both layer onto a fixed base roster.

use serde::{Deserialize, Serialize};

use voidfleet_core::config::StratagemSlot;
use voidfleet_core::enums::Stratagem;
use voidfleet_core::ships::ShipSpec;

use crate::fleet;

/// Max upgrade tier for either axis.
pub const MAX_UPGRADE_TIER: u32 = 3;

/// Cost for a given upgrade axis at a given current tier.
/// Returns None if already at max tier.
pub fn upgrade_cost(axis: UpgradeAxis, current_tier: u32) -> Option<u32> {
    if current_tier >= MAX_UPGRADE_TIER {
        return None;
    }
    let base = match axis {
        UpgradeAxis::Ammo => [60, 120, 200],
        UpgradeAxis::Reinforcement => [80, 160, 260],
    };
    Some(base[current_tier as usize])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeAxis {
    Ammo,
    Reinforcement,
}

/// Persistent progression carried between endless waves.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaProgression {
    pub ammo_tier: u32,
    pub reinforcement_tier: u32,
    pub salvage: u32,
}

impl MetaProgression {
    pub fn tier_for(&self, axis: UpgradeAxis) -> u32 {
        match axis {
            UpgradeAxis::Ammo => self.ammo_tier,
            UpgradeAxis::Reinforcement => self.reinforcement_tier,
        }
    }

    /// Buy the next tier on an axis out of banked salvage. Returns the
    /// amount spent, or an error message.
    pub fn purchase(&mut self, axis: UpgradeAxis) -> Result<u32, String> {
        let current = self.tier_for(axis);
        let cost = upgrade_cost(axis, current)
            .ok_or_else(|| format!("{axis:?} already at max tier"))?;
        if self.salvage < cost {
            return Err(format!(
                "Insufficient salvage: have {}, need {cost}",
                self.salvage
            ));
        }
        self.salvage -= cost;
        match axis {
            UpgradeAxis::Ammo => self.ammo_tier += 1,
            UpgradeAxis::Reinforcement => self.reinforcement_tier += 1,
        }
        Ok(cost)
    }

    /// The player fleet for the next wave: the fixed base pair plus one
    /// reinforcement hull per tier, heaviest last.
    pub fn player_fleet(&self) -> Vec<ShipSpec> {
        let mut ships = vec![fleet::lancer(), fleet::vanguard()];
        if self.reinforcement_tier >= 1 {
            ships.push(fleet::lancer());
        }
        if self.reinforcement_tier >= 2 {
            ships.push(fleet::vanguard());
        }
        if self.reinforcement_tier >= 3 {
            ships.push(fleet::dreadnought());
        }
        ships
    }

    /// The stratagem roster for the next wave: base counts plus one
    /// charge per ammo tier on every slot.
    pub fn player_stratagems(&self) -> Vec<StratagemSlot> {
        vec![
            StratagemSlot::new(Stratagem::EmergencyShield, 2 + self.ammo_tier),
            StratagemSlot::new(Stratagem::OrbitalLaser, 2 + self.ammo_tier),
            StratagemSlot::new(Stratagem::OrbitalHellbomb, 1 + self.ammo_tier),
        ]
    }
}
