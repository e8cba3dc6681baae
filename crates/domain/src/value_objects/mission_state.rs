use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a mission.
///
/// `Pending` is the only non-terminal state; a mission never moves between
/// the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionState {
    /// Mission is not complete
    #[default]
    Pending,
    /// Mission has succeeded
    Success,
    /// Mission has failed
    Failure,
}

impl MissionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MissionState::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissionState::Pending => "PENDING",
            MissionState::Success => "SUCCESS",
            MissionState::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for MissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MissionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(MissionState::Pending),
            "success" => Ok(MissionState::Success),
            "failure" => Ok(MissionState::Failure),
            _ => Err(format!("Unknown mission state: {}", s)),
        }
    }
}
