//! Mission snapshot DTOs
//!
//! Read-only views of tracked missions for displays. Contact names are
//! resolved at snapshot time, so a summary stays readable after the
//! contact has left the world.

use serde::{Deserialize, Serialize};

use missionwatch_domain::{MissionCategory, MissionState, MissionType, Reward, RewardDelivery};

/// Placeholder shown for a step whose contact has no known name
pub const UNKNOWN_CONTACT: &str = "unknown contact";

/// One step of a mission checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i32>,
    pub contact_name: String,
    pub complete: bool,
}

/// A mission as a display sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionSummary {
    pub mission_type: MissionType,
    pub category: MissionCategory,
    pub reward: Reward,
    pub reward_delivery: RewardDelivery,
    pub state: MissionState,
    pub step_index: usize,
    pub step_count: usize,
    pub steps: Vec<StepSummary>,
}

impl MissionSummary {
    /// Steps the player still has to perform.
    pub fn remaining_steps(&self) -> impl Iterator<Item = &StepSummary> {
        self.steps.iter().filter(|step| !step.complete)
    }

    /// Renders the summary as a console checklist.
    pub fn checklist(&self) -> String {
        let mut out = format!(
            "MISSION {} - Reward: {} - {}",
            self.mission_type, self.reward, self.state
        );
        for step in &self.steps {
            let mark = if step.complete { '\u{221a}' } else { ' ' };
            out.push_str(&format!("\n  [{mark}] {}", step.contact_name));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courier() -> MissionSummary {
        MissionSummary {
            mission_type: MissionType::Courier,
            category: MissionCategory::Missions,
            reward: Reward::Nukes,
            reward_delivery: RewardDelivery::Immediate,
            state: MissionState::Pending,
            step_index: 1,
            step_count: 2,
            steps: vec![
                StepSummary {
                    contact_id: Some(2),
                    contact_name: "Deep Space 4".to_string(),
                    complete: true,
                },
                StepSummary {
                    contact_id: Some(1),
                    contact_name: "Anaan Science".to_string(),
                    complete: false,
                },
            ],
        }
    }

    #[test]
    fn checklist_marks_completed_steps() {
        assert_eq!(
            courier().checklist(),
            "MISSION COURIER - Reward: nukes - PENDING\n  [\u{221a}] Deep Space 4\n  [ ] Anaan Science"
        );
    }

    #[test]
    fn remaining_steps_skips_completed() {
        let summary = courier();
        let names: Vec<_> = summary
            .remaining_steps()
            .map(|step| step.contact_name.as_str())
            .collect();
        assert_eq!(names, vec!["Anaan Science"]);
    }

    #[test]
    fn serializes_with_vocabulary_tokens() {
        let json = serde_json::to_value(courier()).unwrap();
        assert_eq!(json["mission_type"], "COURIER");
        assert_eq!(json["state"], "PENDING");
        assert_eq!(json["steps"][0]["contact_name"], "Deep Space 4");
    }
}
