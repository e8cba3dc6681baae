//! Feed dispatch - applies feed events to the registry and tracker in order.
//!
//! One dispatcher owns the tracker. Deletions reach the registry before the
//! tracker, as they do in the live game, so the tracker must rely on its own
//! record of the deleted contact.

use std::sync::Arc;

use tokio::sync::mpsc;

use missionwatch_domain::{Contact, ContactId};
use missionwatch_shared::{ContactSeen, FeedEvent, ObjectDeleted};

use super::{MissionBoard, MissionNotice, MissionTracker};
use crate::infrastructure::registry::InMemoryContactRegistry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub events: usize,
    pub notices: usize,
}

pub struct FeedDispatcher {
    registry: Arc<InMemoryContactRegistry>,
    tracker: MissionTracker,
    board: Arc<MissionBoard>,
}

impl FeedDispatcher {
    pub fn new(
        registry: Arc<InMemoryContactRegistry>,
        tracker: MissionTracker,
        board: Arc<MissionBoard>,
    ) -> Self {
        Self {
            registry,
            tracker,
            board,
        }
    }

    pub fn tracker(&self) -> &MissionTracker {
        &self.tracker
    }

    pub fn board(&self) -> &Arc<MissionBoard> {
        &self.board
    }

    /// Applies one event and republishes the mission board.
    pub fn apply(&mut self, event: FeedEvent) -> Vec<MissionNotice> {
        let notices = match event {
            FeedEvent::Contact(seen) => self.on_contact(seen),
            FeedEvent::Message(message) => self.tracker.on_message(&message),
            FeedEvent::Deleted { target_id, kind } => {
                self.registry.remove(ContactId::new(target_id));
                if kind.is_contact() {
                    self.tracker.on_object_deleted(&ObjectDeleted { target_id })
                } else {
                    Vec::new()
                }
            }
            FeedEvent::SessionEnd => {
                tracing::info!(
                    active = self.tracker.active_mission_count(),
                    "Session ended, clearing missions"
                );
                self.tracker.clear();
                self.registry.clear();
                Vec::new()
            }
            FeedEvent::Unknown => Vec::new(),
        };

        self.board.publish(&self.tracker);
        notices
    }

    /// Applies events until the channel closes, handing every notice to
    /// `on_notice` as it is produced.
    pub async fn run<F>(
        mut self,
        mut events: mpsc::Receiver<FeedEvent>,
        mut on_notice: F,
    ) -> DispatchStats
    where
        F: FnMut(MissionNotice),
    {
        let mut stats = DispatchStats::default();

        while let Some(event) = events.recv().await {
            stats.events += 1;
            for notice in self.apply(event) {
                stats.notices += 1;
                on_notice(notice);
            }
        }

        tracing::info!(
            events = stats.events,
            notices = stats.notices,
            active = self.tracker.active_mission_count(),
            "Feed drained"
        );
        stats
    }

    fn on_contact(&mut self, seen: ContactSeen) -> Vec<MissionNotice> {
        if !seen.kind.is_contact() {
            return Vec::new();
        }

        let mut contact = match seen.name {
            Some(name) => Contact::new(seen.id, name),
            None => Contact::unnamed(seen.id),
        };
        contact.side = seen.side;
        self.registry.upsert(contact);

        // A parked invitation may have been waiting for exactly this contact
        self.tracker.retry_deferred()
    }
}

#[cfg(test)]
mod tests {
    use missionwatch_domain::{MissionState, MissionType, MissionUpdate};
    use missionwatch_shared::{IncomingMessage, ObjectKind};

    use super::*;
    use crate::infrastructure::ports::ContactRegistry;
    use crate::use_cases::missions::{TrackerConfig, UnresolvedContactPolicy};

    const RANSOM: &str = "We are holding this ship hostage!  Bring us 900 energy, and no tricks, or we blow this ship into dust!!";
    const COURIER: &str = "Help us help you.\nFirst, dock with Deep Space 4 and pick up some supplies we need. Then, dock with us, and we'll give you two more nuclear torpedoes.";

    fn dispatcher(config: TrackerConfig) -> FeedDispatcher {
        let registry = Arc::new(InMemoryContactRegistry::new());
        let tracker = MissionTracker::new(registry.clone(), config);
        FeedDispatcher::new(registry, tracker, Arc::new(MissionBoard::new()))
    }

    fn contact(id: i32, name: &str) -> FeedEvent {
        FeedEvent::Contact(ContactSeen {
            id,
            name: Some(name.to_string()),
            side: None,
            kind: ObjectKind::Npc,
        })
    }

    fn message(from: &str, body: &str) -> FeedEvent {
        FeedEvent::Message(IncomingMessage::new(from, body))
    }

    #[test]
    fn deletion_reaches_registry_before_tracker() {
        let mut dispatcher = dispatcher(TrackerConfig::default());
        dispatcher.apply(contact(5, "Vesta Transport"));
        dispatcher.apply(message("Vesta Transport", RANSOM));
        assert_eq!(dispatcher.board().current().len(), 1);

        let notices = dispatcher.apply(FeedEvent::Deleted {
            target_id: 5,
            kind: ObjectKind::Npc,
        });

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].mission.mission_type(), MissionType::EnergyRansom);
        assert_eq!(notices[0].mission.state(), MissionState::Failure);
        assert!(dispatcher.registry.lookup_by_id(ContactId::new(5)).is_none());
        assert!(dispatcher.board().current().is_empty());
    }

    #[test]
    fn non_contact_objects_are_not_registered() {
        let mut dispatcher = dispatcher(TrackerConfig::default());
        dispatcher.apply(FeedEvent::Contact(ContactSeen {
            id: 8,
            name: Some("Artemis".to_string()),
            side: Some(0),
            kind: ObjectKind::PlayerShip,
        }));
        assert!(dispatcher.registry.is_empty());

        let notices = dispatcher.apply(FeedEvent::Deleted {
            target_id: 8,
            kind: ObjectKind::Other,
        });
        assert!(notices.is_empty());
    }

    #[test]
    fn arriving_contact_resolves_deferred_invitation() {
        let mut dispatcher = dispatcher(TrackerConfig {
            unresolved: UnresolvedContactPolicy::Defer,
            ..TrackerConfig::default()
        });
        dispatcher.apply(contact(1, "Anaan Science"));
        assert!(dispatcher.apply(message("Anaan Science", COURIER)).is_empty());
        assert_eq!(dispatcher.tracker().deferred_count(), 1);

        let notices = dispatcher.apply(contact(2, "Deep Space 4"));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].mission.mission_type(), MissionType::Courier);
        assert_eq!(dispatcher.tracker().active_mission_count(), 1);
    }

    #[test]
    fn session_end_clears_everything() {
        let mut dispatcher = dispatcher(TrackerConfig::default());
        dispatcher.apply(contact(5, "Vesta Transport"));
        dispatcher.apply(message("Vesta Transport", RANSOM));

        dispatcher.apply(FeedEvent::SessionEnd);
        assert_eq!(dispatcher.tracker().active_mission_count(), 0);
        assert!(dispatcher.registry.is_empty());
        assert!(dispatcher.board().current().is_empty());
    }

    #[tokio::test]
    async fn run_drains_channel_in_order() {
        let dispatcher = dispatcher(TrackerConfig::default());
        let board = Arc::clone(dispatcher.board());
        let (tx, rx) = mpsc::channel(8);

        for event in [
            contact(5, "Vesta Transport"),
            message("Vesta Transport", RANSOM),
            message("Vesta Transport", RANSOM),
        ] {
            tx.send(event).await.unwrap();
        }
        drop(tx);

        let mut seen = Vec::new();
        let stats = dispatcher
            .run(rx, |notice| seen.push((notice.update, notice.summary.mission_type)))
            .await;
        assert_eq!(
            stats,
            DispatchStats {
                events: 3,
                notices: 1
            }
        );
        assert_eq!(seen, vec![(MissionUpdate::Created, MissionType::EnergyRansom)]);
        assert_eq!(board.current().len(), 1);
    }
}
