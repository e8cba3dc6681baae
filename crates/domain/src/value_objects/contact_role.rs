//! Roles a contact can play in a mission

use serde::{Deserialize, Serialize};
use std::fmt;

/// The part a contact plays in a mission.
///
/// A mission has at most one contact per role, and always has a `Giver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactRole {
    /// The contact which gave the mission
    Giver,
    /// The contact the player must interact with before collecting the reward
    Task,
    /// The contact which has the player's reward
    Reward,
}

impl ContactRole {
    pub fn all() -> &'static [ContactRole] {
        &[ContactRole::Giver, ContactRole::Task, ContactRole::Reward]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactRole::Giver => "GIVER",
            ContactRole::Task => "TASK",
            ContactRole::Reward => "REWARD",
        }
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContactRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "giver" => Ok(ContactRole::Giver),
            "task" => Ok(ContactRole::Task),
            "reward" => Ok(ContactRole::Reward),
            _ => Err(format!("Unknown contact role: {}", s)),
        }
    }
}
