//! Mission rewards
//!
//! Invitations describe what the giver will hand over using a small fixed
//! vocabulary of phrases ("give you two more nuclear torpedoes", ...). Each
//! phrase maps to exactly one [`Reward`]; rewards that are never announced
//! that way carry no token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the player receives for completing a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reward {
    #[default]
    None,
    Coolant,
    Nukes,
    Energy,
    EnhanceShields,
    DoubleProductionSpeed,
    Probes,
    Unknown,
}

impl Reward {
    pub fn all() -> &'static [Reward] {
        &[
            Reward::None,
            Reward::Coolant,
            Reward::Nukes,
            Reward::Energy,
            Reward::EnhanceShields,
            Reward::DoubleProductionSpeed,
            Reward::Probes,
            Reward::Unknown,
        ]
    }

    /// Short label for display tiles
    pub fn label(&self) -> &'static str {
        match self {
            Reward::None => "no reward",
            Reward::Coolant => "coolant",
            Reward::Nukes => "nukes",
            Reward::Energy => "energy",
            Reward::EnhanceShields => "shields",
            Reward::DoubleProductionSpeed => "prod speed",
            Reward::Probes => "probes",
            Reward::Unknown => "unknown",
        }
    }

    /// The phrase an invitation uses to promise this reward, if any
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Reward::Coolant => Some("give you more engineering coolant"),
            Reward::Nukes => Some("give you two more nuclear torpedoes"),
            Reward::Energy => Some("charge your batteries"),
            Reward::EnhanceShields => Some("enhance your shield generators"),
            Reward::DoubleProductionSpeed => Some("double our production speed"),
            Reward::None | Reward::Probes | Reward::Unknown => None,
        }
    }

    /// Returns the reward promised by the given phrase, or `None` if the
    /// phrase is not part of the vocabulary.
    pub fn from_token(token: &str) -> Option<Reward> {
        Reward::all()
            .iter()
            .copied()
            .find(|reward| reward.token() == Some(token))
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
