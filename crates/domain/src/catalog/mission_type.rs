use serde::{Deserialize, Serialize};
use std::fmt;

/// The archetypes of side mission the game offers.
///
/// Declaration order is the order in which the catalog tests invitations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionType {
    /// Pick up something from the task contact, then deliver it to another contact
    Courier,
    /// Contact's engines are damaged; they ask for a DamCon team member
    DamagedEngines,
    /// No task to perform; just meet the mission giver to get some energy
    EnergyOffer,
    /// Ship held hostage with a ransom demand of 900 energy
    EnergyRansom,
    /// Contact sends a suspicious message; explodes if you get close
    ExplosionTrap,
    /// Contact sends a suspicious message; releases fighters if you get close
    FighterTrap,
    /// Contact's sensors are out and it needs guidance to a station
    FlyingBlind,
    /// Ship hijacked; approach from within a nebula to complete
    Hijackers,
    /// Contact is out of energy; get close with at least 100 energy
    JumpStart,
    /// Contact's computer is malfunctioning; hit them with an EMP
    RebootComputer,
    /// Launch a shuttle to rendezvous with the contact
    ShuttleRescue,
}

/// Grouping used by displays when listing missions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionCategory {
    Missions,
    OfferingEnergy,
}

impl MissionType {
    pub fn all() -> &'static [MissionType] {
        &[
            MissionType::Courier,
            MissionType::DamagedEngines,
            MissionType::EnergyOffer,
            MissionType::EnergyRansom,
            MissionType::ExplosionTrap,
            MissionType::FighterTrap,
            MissionType::FlyingBlind,
            MissionType::Hijackers,
            MissionType::JumpStart,
            MissionType::RebootComputer,
            MissionType::ShuttleRescue,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissionType::Courier => "COURIER",
            MissionType::DamagedEngines => "DAMAGED_ENGINES",
            MissionType::EnergyOffer => "ENERGY_OFFER",
            MissionType::EnergyRansom => "ENERGY_RANSOM",
            MissionType::ExplosionTrap => "EXPLOSION_TRAP",
            MissionType::FighterTrap => "FIGHTER_TRAP",
            MissionType::FlyingBlind => "FLYING_BLIND",
            MissionType::Hijackers => "HIJACKERS",
            MissionType::JumpStart => "JUMP_START",
            MissionType::RebootComputer => "REBOOT_COMPUTER",
            MissionType::ShuttleRescue => "SHUTTLE_RESCUE",
        }
    }

    /// Energy offers are listed apart from real missions.
    pub fn category(&self) -> MissionCategory {
        match self {
            MissionType::EnergyOffer => MissionCategory::OfferingEnergy,
            _ => MissionCategory::Missions,
        }
    }

    pub fn is_trap(&self) -> bool {
        matches!(self, MissionType::ExplosionTrap | MissionType::FighterTrap)
    }
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MissionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MissionType::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown mission type: {}", s))
    }
}
