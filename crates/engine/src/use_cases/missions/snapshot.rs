//! Mission snapshots for displays.
//!
//! The tracker is owned by the dispatcher and never shared. Displays on other
//! tasks or threads read immutable summaries published through a
//! [`MissionBoard`] instead.

use tokio::sync::watch;

use missionwatch_domain::Mission;
use missionwatch_shared::summary::UNKNOWN_CONTACT;
use missionwatch_shared::{MissionSummary, StepSummary};

use super::MissionTracker;

/// Builds the display view of one mission, naming contacts as the tracker
/// currently knows them.
pub fn summarize(tracker: &MissionTracker, mission: &Mission) -> MissionSummary {
    let steps = mission
        .ordered_contacts()
        .into_iter()
        .enumerate()
        .map(|(index, contact)| StepSummary {
            contact_id: contact.map(i32::from),
            contact_name: contact
                .and_then(|id| tracker.contact_name(id))
                .unwrap_or_else(|| UNKNOWN_CONTACT.to_string()),
            complete: index < mission.step_index(),
        })
        .collect();

    MissionSummary {
        mission_type: mission.mission_type(),
        category: mission.mission_type().category(),
        reward: mission.reward(),
        reward_delivery: mission.reward_delivery(),
        state: mission.state(),
        step_index: mission.step_index(),
        step_count: mission.step_count(),
        steps,
    }
}

/// Latest list of active missions, shared with any number of readers.
#[derive(Debug)]
pub struct MissionBoard {
    sender: watch::Sender<Vec<MissionSummary>>,
}

impl Default for MissionBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MissionBoard {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self { sender }
    }

    /// Replaces the published list with the tracker's active missions.
    ///
    /// Readers are only woken when the list actually changed.
    pub fn publish(&self, tracker: &MissionTracker) -> bool {
        let snapshot: Vec<_> = tracker.iter().map(|mission| summarize(tracker, mission)).collect();

        self.sender.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<MissionSummary>> {
        self.sender.subscribe()
    }

    /// A copy of the latest published list.
    pub fn current(&self) -> Vec<MissionSummary> {
        self.sender.borrow().clone()
    }
}
