//! Per-archetype flags: when the reward arrives, and what finishing means.

use serde::{Deserialize, Serialize};

use super::MissionState;

/// When the reward for a completed mission reaches the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RewardDelivery {
    /// Handed over as the final step completes
    #[default]
    Immediate,
    /// Dropped off by the giver at the next station it docks with
    AtStation,
}

/// What running out of steps means for a mission archetype.
///
/// Traps complete their single step when they spring, which is a failure for
/// the player. For those archetypes the polarity is inverted everywhere: a
/// trap whose contact disappears before springing is a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOutcome {
    #[default]
    Success,
    Failure,
}

impl CompletionOutcome {
    /// State reached when the final step is satisfied
    pub fn on_steps_complete(&self) -> MissionState {
        match self {
            CompletionOutcome::Success => MissionState::Success,
            CompletionOutcome::Failure => MissionState::Failure,
        }
    }

    /// State reached when a contact needed by a remaining step disappears
    pub fn on_contact_lost(&self) -> MissionState {
        match self {
            CompletionOutcome::Success => MissionState::Failure,
            CompletionOutcome::Failure => MissionState::Success,
        }
    }
}
