//! Mission mutation outcomes.

use serde::{Deserialize, Serialize};

use crate::value_objects::MissionState;
use crate::ContactId;

/// What happened to a mission as the result of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissionUpdate {
    /// A new mission was recognised from an invitation
    Created,
    /// A step was satisfied and the mission is still pending
    StepCompleted { step_index: usize },
    /// The final step was satisfied
    Concluded { state: MissionState },
    /// A contact needed by a remaining step disappeared from the world
    ContactLost {
        contact: ContactId,
        state: MissionState,
    },
}

impl MissionUpdate {
    /// True if the mission left `Pending` with this update.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Concluded { .. } | Self::ContactLost { .. })
    }
}
