//! Mission tracker - the set of active side missions.
//!
//! Fed synchronously with comms messages and object deletions by a single
//! dispatcher. Detects new missions from invitations, advances existing ones,
//! and archives missions as soon as they reach a terminal state.
//!
//! The tracker holds no locks. Readers on other threads go through
//! [`super::MissionBoard`] snapshots instead.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use missionwatch_domain::{
    Contact, ContactId, ExtractionError, Mission, MissionCatalog, MissionKey, MissionUpdate,
};
use missionwatch_shared::{IncomingMessage, MissionSummary, ObjectDeleted};

use super::deferred::{DeferredInvitation, DeferredInvitations};
use super::snapshot::summarize;
use crate::infrastructure::ports::ContactRegistry;

pub const DEFAULT_DEFERRED_CAPACITY: usize = 16;

// =============================================================================
// Configuration
// =============================================================================

/// What to do with an invitation naming a contact the registry has not seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedContactPolicy {
    /// Abandon the candidate; the game will resend the invitation
    #[default]
    Drop,
    /// Park the invitation and retry it on later messages
    Defer,
}

impl UnresolvedContactPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Defer => "defer",
        }
    }
}

impl fmt::Display for UnresolvedContactPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnresolvedContactPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "defer" => Ok(Self::Defer),
            other => Err(format!("unknown unresolved-contact policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    pub unresolved: UnresolvedContactPolicy,
    /// Parked invitations kept under [`UnresolvedContactPolicy::Defer`]
    pub deferred_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            unresolved: UnresolvedContactPolicy::Drop,
            deferred_capacity: DEFAULT_DEFERRED_CAPACITY,
        }
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// A mission that changed during a dispatch, as it stood afterwards.
#[derive(Debug, Clone)]
pub struct MissionNotice {
    pub mission: Mission,
    pub update: MissionUpdate,
    /// Display view taken while every involved contact was still known
    pub summary: MissionSummary,
}

/// Callback invoked once per mission change.
pub type MissionListener = Box<dyn Fn(&Mission) + Send + Sync>;

// =============================================================================
// Tracker
// =============================================================================

pub struct MissionTracker {
    catalog: MissionCatalog,
    registry: Arc<dyn ContactRegistry>,
    config: TrackerConfig,
    /// Active missions in insertion order
    active: Vec<Mission>,
    keys: HashSet<MissionKey>,
    /// Every contact involved in a notified mission, as last seen
    contacts: HashMap<ContactId, Contact>,
    deferred: DeferredInvitations,
    listeners: Vec<MissionListener>,
}

impl MissionTracker {
    /// Creates a tracker over the built-in mission catalog.
    pub fn new(registry: Arc<dyn ContactRegistry>, config: TrackerConfig) -> Self {
        Self::with_catalog(MissionCatalog::builtin().clone(), registry, config)
    }

    pub fn with_catalog(
        catalog: MissionCatalog,
        registry: Arc<dyn ContactRegistry>,
        config: TrackerConfig,
    ) -> Self {
        Self {
            catalog,
            registry,
            config,
            active: Vec::new(),
            keys: HashSet::new(),
            contacts: HashMap::new(),
            deferred: DeferredInvitations::new(config.deferred_capacity),
            listeners: Vec::new(),
        }
    }

    /// Registers a callback notified once per mission change.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&Mission) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    // =========================================================================
    // Event intake
    // =========================================================================

    /// Handles an incoming comms message.
    ///
    /// New invitations take precedence: only when the message extracted no
    /// mission at all is it offered to active missions, and then to the first
    /// one (in insertion order) that accepts it.
    pub fn on_message(&mut self, message: &IncomingMessage) -> Vec<MissionNotice> {
        let mut notices = self.retry_deferred();
        // Missions admitted from the deferred queue have changed already
        let admitted: HashSet<MissionKey> =
            notices.iter().map(|notice| notice.mission.key()).collect();

        let Some(sender) = self.registry.lookup_by_name(&message.from) else {
            tracing::debug!(from = %message.from, "Ignoring message from unknown sender");
            return notices;
        };

        let registry = &self.registry;
        let extracted = self
            .catalog
            .extract(&sender, &message.body, |name| registry.lookup_by_name(name));

        let mut any_extracted = false;
        for extraction in extracted {
            match extraction {
                Ok(mission) => {
                    any_extracted = true;
                    notices.extend(self.admit(mission));
                }
                Err(err) => self.handle_unresolved(&sender, &message.body, err),
            }
        }

        if !any_extracted {
            notices.extend(self.advance(sender.id, &message.body, &admitted));
        }

        self.archive_concluded();
        notices
    }

    /// Handles the removal of a world object.
    ///
    /// Only contacts recorded from earlier mission updates are considered; the
    /// registry may already have forgotten the deleted object.
    pub fn on_object_deleted(&mut self, event: &ObjectDeleted) -> Vec<MissionNotice> {
        let id = ContactId::new(event.target_id);

        let discarded = self.deferred.discard_sender(id);
        if discarded > 0 {
            tracing::debug!(contact = %id, discarded, "Discarded deferred invitations from deleted contact");
        }

        let Some(contact) = self.contacts.get(&id).cloned() else {
            return Vec::new();
        };

        let mut notices = Vec::new();
        for index in 0..self.active.len() {
            if let Some(update) = self.active[index].on_contact_deleted(id) {
                let mission = &self.active[index];
                tracing::info!(
                    mission_type = %mission.mission_type(),
                    giver = %mission.giver(),
                    contact = %id,
                    contact_name = contact.name().unwrap_or_default(),
                    state = %mission.state(),
                    "Mission ended by contact loss"
                );
                notices.push(self.notify(index, update));
            }
        }

        self.archive_concluded();

        let still_needed = self
            .active
            .iter()
            .any(|mission| mission.contacts().any(|(_, bound)| bound == id));
        if !still_needed {
            self.contacts.remove(&id);
        }
        notices
    }

    /// Re-attempts parked invitations whose contacts may have arrived since.
    pub fn retry_deferred(&mut self) -> Vec<MissionNotice> {
        if self.config.unresolved != UnresolvedContactPolicy::Defer || self.deferred.is_empty() {
            return Vec::new();
        }

        let mut notices = Vec::new();
        for parked in self.deferred.take_all() {
            let Some(sender) = self.registry.lookup_by_id(parked.sender) else {
                self.deferred.park(parked);
                continue;
            };

            let registry = &self.registry;
            let attempt = self.catalog.extract_kind(
                parked.mission_type,
                &sender,
                &parked.body,
                |name| registry.lookup_by_name(name),
            );

            match attempt {
                Some(Ok(mission)) => {
                    tracing::debug!(
                        mission_type = %parked.mission_type,
                        giver = %parked.sender,
                        "Deferred invitation resolved"
                    );
                    notices.extend(self.admit(mission));
                }
                Some(Err(_)) => {
                    self.deferred.park(parked);
                }
                None => {}
            }
        }

        notices
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn active_mission_count(&self) -> usize {
        self.active.len()
    }

    /// Visits active missions in insertion order.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Mission),
    {
        self.active.iter().for_each(visitor);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mission> {
        self.active.iter()
    }

    /// Invitations waiting for a contact to arrive.
    pub fn deferred_count(&self) -> usize {
        self.deferred.len()
    }

    /// Current display name of a contact, falling back to the last name seen
    /// in a mission update.
    pub fn contact_name(&self, id: ContactId) -> Option<String> {
        self.registry
            .lookup_by_id(id)
            .and_then(|contact| contact.name)
            .or_else(|| self.contacts.get(&id).and_then(|contact| contact.name.clone()))
    }

    /// Forgets all missions, cached contacts and parked invitations.
    ///
    /// Listeners and the catalog are kept for the next session.
    pub fn clear(&mut self) {
        self.active.clear();
        self.keys.clear();
        self.contacts.clear();
        self.deferred.clear();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn admit(&mut self, mission: Mission) -> Option<MissionNotice> {
        let key = mission.key();
        if !self.keys.insert(key) {
            tracing::debug!(
                mission_type = %key.mission_type,
                giver = %key.giver,
                "Absorbing repeated invitation"
            );
            return None;
        }

        tracing::info!(
            mission_type = %key.mission_type,
            giver = %key.giver,
            reward = %mission.reward(),
            "Mission offered"
        );

        self.active.push(mission);
        Some(self.notify(self.active.len() - 1, MissionUpdate::Created))
    }

    fn advance(
        &mut self,
        sender: ContactId,
        body: &str,
        skip: &HashSet<MissionKey>,
    ) -> Option<MissionNotice> {
        let registry = &self.registry;
        let cache = &self.contacts;
        let name_of = |id: ContactId| {
            registry
                .lookup_by_id(id)
                .and_then(|contact| contact.name)
                .or_else(|| cache.get(&id).and_then(|contact| contact.name.clone()))
        };

        let (index, update) = self
            .active
            .iter_mut()
            .enumerate()
            .filter(|(_, mission)| !skip.contains(&mission.key()))
            .find_map(|(index, mission)| mission.offer(sender, body, &name_of).map(|u| (index, u)))?;

        let mission = &self.active[index];
        if update.is_terminal() {
            tracing::info!(
                mission_type = %mission.mission_type(),
                giver = %mission.giver(),
                state = %mission.state(),
                "Mission concluded"
            );
        } else {
            tracing::info!(
                mission_type = %mission.mission_type(),
                giver = %mission.giver(),
                step = mission.step_index(),
                steps = mission.step_count(),
                "Mission advanced"
            );
        }

        Some(self.notify(index, update))
    }

    fn handle_unresolved(&mut self, sender: &Contact, body: &str, err: ExtractionError) {
        match self.config.unresolved {
            UnresolvedContactPolicy::Drop => {
                tracing::debug!(error = %err, giver = %sender.id, "Dropping invitation");
            }
            UnresolvedContactPolicy::Defer => {
                tracing::debug!(error = %err, giver = %sender.id, "Deferring invitation");
                let evicted = self.deferred.park(DeferredInvitation {
                    sender: sender.id,
                    mission_type: err.mission_type(),
                    body: body.to_string(),
                });
                if let Some(evicted) = evicted {
                    tracing::debug!(
                        mission_type = %evicted.mission_type,
                        giver = %evicted.sender,
                        "Deferred invitation evicted"
                    );
                }
            }
        }
    }

    /// Records the mission's contacts and tells every listener.
    fn notify(&mut self, index: usize, update: MissionUpdate) -> MissionNotice {
        let mission = &self.active[index];

        for (_, id) in mission.contacts() {
            let contact = self
                .registry
                .lookup_by_id(id)
                .or_else(|| self.contacts.get(&id).cloned())
                .unwrap_or_else(|| Contact::unnamed(id));
            self.contacts.insert(id, contact);
        }

        for listener in &self.listeners {
            listener(mission);
        }

        MissionNotice {
            mission: mission.clone(),
            update,
            summary: summarize(self, mission),
        }
    }

    /// Drops missions that left `Pending`, keeping the order of the rest.
    fn archive_concluded(&mut self) {
        let keys = &mut self.keys;
        self.active.retain(|mission| {
            if mission.state().is_terminal() {
                keys.remove(&mission.key());
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use missionwatch_domain::{ContactRole, MissionState, MissionType, Reward};

    use super::*;
    use crate::infrastructure::ports::MockContactRegistry;
    use crate::infrastructure::registry::InMemoryContactRegistry;

    const COURIER: &str = "Help us help you.\nFirst, dock with Deep Space 4 and pick up some supplies we need. Then, dock with us, and we'll give you two more nuclear torpedoes.";
    const PICKUP: &str =
        "Transfer complete, Captain. Please proceed to Anaan Science to deliver the supplies.";
    const DELIVERED: &str = "Transfer complete, Captain.  Thanks for your help!";
    const RANSOM: &str = "We are holding this ship hostage!  Bring us 900 energy, and no tricks, or we blow this ship into dust!!";

    const ANAAN: ContactId = ContactId::new(1);
    const DS4: ContactId = ContactId::new(2);
    const KRAKEN: ContactId = ContactId::new(3);

    fn world() -> Arc<InMemoryContactRegistry> {
        let registry = Arc::new(InMemoryContactRegistry::new());
        registry.upsert(Contact::new(ANAAN, "Anaan Science"));
        registry.upsert(Contact::new(DS4, "Deep Space 4"));
        registry.upsert(Contact::new(KRAKEN, "Kraken Station"));
        registry
    }

    fn tracker(registry: Arc<InMemoryContactRegistry>) -> MissionTracker {
        MissionTracker::new(registry, TrackerConfig::default())
    }

    fn deferring(registry: Arc<InMemoryContactRegistry>) -> MissionTracker {
        MissionTracker::new(
            registry,
            TrackerConfig {
                unresolved: UnresolvedContactPolicy::Defer,
                ..TrackerConfig::default()
            },
        )
    }

    fn msg(from: &str, body: &str) -> IncomingMessage {
        IncomingMessage::new(from, body)
    }

    fn counting(tracker: &mut MissionTracker) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        tracker.add_listener(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn unknown_sender_is_ignored() {
        let mut registry = MockContactRegistry::new();
        registry
            .expect_lookup_by_name()
            .times(1)
            .returning(|_| None);
        registry.expect_lookup_by_id().never();

        let mut tracker = MissionTracker::new(Arc::new(registry), TrackerConfig::default());
        assert!(tracker.on_message(&msg("Nobody", COURIER)).is_empty());
        assert_eq!(tracker.active_mission_count(), 0);
    }

    #[test]
    fn courier_runs_through_tracker() {
        let mut tracker = tracker(world());
        let count = counting(&mut tracker);

        let notices = tracker.on_message(&msg("Anaan Science", COURIER));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].update, MissionUpdate::Created);
        assert_eq!(tracker.active_mission_count(), 1);

        let notices = tracker.on_message(&msg("Deep Space 4", PICKUP));
        assert_eq!(notices[0].update, MissionUpdate::StepCompleted { step_index: 1 });

        let notices = tracker.on_message(&msg("Anaan Science", DELIVERED));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].mission.state(), MissionState::Success);
        assert_eq!(tracker.active_mission_count(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn repeated_invitation_is_absorbed() {
        let mut tracker = tracker(world());
        let count = counting(&mut tracker);

        tracker.on_message(&msg("Anaan Science", COURIER));
        let notices = tracker.on_message(&msg("Anaan Science", COURIER));

        assert!(notices.is_empty());
        assert_eq!(tracker.active_mission_count(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn same_type_from_different_givers_coexists() {
        let mut tracker = tracker(world());
        tracker.on_message(&msg("Anaan Science", RANSOM));
        tracker.on_message(&msg("Kraken Station", RANSOM));

        let givers: Vec<_> = tracker.iter().map(Mission::giver).collect();
        assert_eq!(givers, vec![ANAAN, KRAKEN]);
    }

    #[test]
    fn pickup_naming_another_giver_skips_first_courier() {
        let mut tracker = tracker(world());
        tracker.on_message(&msg("Anaan Science", COURIER));
        tracker.on_message(&msg("Kraken Station", COURIER));

        let body = "Transfer complete, Captain. Please proceed to Kraken Station to deliver the supplies.";
        let notices = tracker.on_message(&msg("Deep Space 4", body));

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].mission.giver(), KRAKEN);

        let mut progress = Vec::new();
        tracker.for_each(|mission| progress.push((mission.giver(), mission.step_index())));
        assert_eq!(progress, vec![(ANAAN, 0), (KRAKEN, 1)]);
    }

    #[test]
    fn completion_only_affects_its_giver() {
        let mut tracker = tracker(world());
        tracker.on_message(&msg("Anaan Science", RANSOM));
        tracker.on_message(&msg("Kraken Station", RANSOM));

        let done = "This is the captain, the REAL captain.  Those criminals left, using some sort of device, Artemis.  Thank you for your assistance.  Let us upgrade your shield generators.";
        let notices = tracker.on_message(&msg("Kraken Station", done));

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].mission.giver(), KRAKEN);
        assert_eq!(tracker.active_mission_count(), 1);
    }

    #[test]
    fn deletion_of_future_contact_fails_mission() {
        let registry = world();
        let mut tracker = tracker(Arc::clone(&registry));
        tracker.on_message(&msg("Anaan Science", COURIER));

        // The registry already reflects the deletion
        registry.remove(DS4);
        let notices = tracker.on_object_deleted(&ObjectDeleted { target_id: 2 });

        assert_eq!(notices.len(), 1);
        assert_eq!(
            notices[0].update,
            MissionUpdate::ContactLost {
                contact: DS4,
                state: MissionState::Failure
            }
        );
        assert_eq!(notices[0].summary.steps[0].contact_name, "Deep Space 4");
        assert_eq!(tracker.active_mission_count(), 0);
        assert_eq!(tracker.contact_name(DS4), None);
    }

    #[test]
    fn deletion_of_past_contact_is_harmless() {
        let registry = world();
        let mut tracker = tracker(Arc::clone(&registry));
        tracker.on_message(&msg("Anaan Science", COURIER));
        tracker.on_message(&msg("Deep Space 4", PICKUP));

        registry.remove(DS4);
        assert!(tracker.on_object_deleted(&ObjectDeleted { target_id: 2 }).is_empty());
        assert_eq!(tracker.active_mission_count(), 1);

        // The completed step still names the departed contact
        assert_eq!(tracker.contact_name(DS4).as_deref(), Some("Deep Space 4"));
        let mission = tracker.iter().next().unwrap();
        let summary = summarize(&tracker, mission);
        assert_eq!(summary.steps[0].contact_name, "Deep Space 4");
        assert!(summary.steps[0].complete);
    }

    #[test]
    fn deletion_of_uninvolved_object_is_ignored() {
        let mut tracker = tracker(world());
        tracker.on_message(&msg("Anaan Science", COURIER));
        assert!(tracker.on_object_deleted(&ObjectDeleted { target_id: 3 }).is_empty());
        assert!(tracker.on_object_deleted(&ObjectDeleted { target_id: 99 }).is_empty());
        assert_eq!(tracker.active_mission_count(), 1);
    }

    #[test]
    fn trap_polarity_is_inverted() {
        let registry = world();
        let mut tracker = tracker(Arc::clone(&registry));

        tracker.on_message(&msg(
            "Anaan Science",
            "We're broken down!  Out of energy!  Yeah!  Could you come help us?",
        ));
        let sprung = tracker.on_message(&msg(
            "Anaan Science",
            "Ha ha!  You've fallen into our trap, Artemis!",
        ));
        assert_eq!(sprung[0].mission.mission_type(), MissionType::FighterTrap);
        assert_eq!(sprung[0].mission.state(), MissionState::Failure);

        tracker.on_message(&msg(
            "Kraken Station",
            "We're just moving cargo between the stations in this sector.  That's all.  How are you?",
        ));
        registry.remove(KRAKEN);
        let destroyed = tracker.on_object_deleted(&ObjectDeleted { target_id: 3 });
        assert_eq!(destroyed[0].mission.mission_type(), MissionType::ExplosionTrap);
        assert_eq!(destroyed[0].mission.state(), MissionState::Success);
        assert_eq!(tracker.active_mission_count(), 0);
    }

    #[test]
    fn drop_policy_abandons_unresolved_invitation() {
        let registry = world();
        registry.remove(DS4);
        let mut tracker = tracker(Arc::clone(&registry));

        assert!(tracker.on_message(&msg("Anaan Science", COURIER)).is_empty());
        assert_eq!(tracker.deferred_count(), 0);

        registry.upsert(Contact::new(DS4, "Deep Space 4"));
        assert!(tracker.on_message(&msg("Anaan Science", "Docking complete.")).is_empty());
        assert_eq!(tracker.active_mission_count(), 0);

        // The game resends the invitation once the contact is known
        let notices = tracker.on_message(&msg("Anaan Science", COURIER));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].mission.contact(ContactRole::Task), Some(DS4));
    }

    #[test]
    fn defer_policy_retries_when_contact_arrives() {
        let registry = world();
        registry.remove(DS4);
        let mut tracker = deferring(Arc::clone(&registry));

        assert!(tracker.on_message(&msg("Anaan Science", COURIER)).is_empty());
        assert_eq!(tracker.deferred_count(), 1);
        assert!(tracker.retry_deferred().is_empty());
        assert_eq!(tracker.deferred_count(), 1);

        registry.upsert(Contact::new(DS4, "Deep Space 4"));
        let notices = tracker.on_message(&msg("Kraken Station", "Docking complete."));

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].update, MissionUpdate::Created);
        assert_eq!(notices[0].mission.reward(), Reward::Nukes);
        assert_eq!(tracker.deferred_count(), 0);
        assert_eq!(tracker.active_mission_count(), 1);
    }

    #[test]
    fn resolved_invitation_is_not_advanced_in_the_same_dispatch() {
        let registry = world();
        registry.remove(DS4);
        let mut tracker = deferring(Arc::clone(&registry));
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        tracker.add_listener(move |mission| {
            sink.lock().unwrap().push(mission.step_index());
        });

        tracker.on_message(&msg("Anaan Science", COURIER));
        registry.upsert(Contact::new(DS4, "Deep Space 4"));

        let notices = tracker.on_message(&msg("Deep Space 4", PICKUP));
        let updates: Vec<_> = notices.iter().map(|notice| notice.update).collect();
        assert_eq!(updates, vec![MissionUpdate::Created]);
        assert_eq!(*calls.lock().unwrap(), vec![0]);

        // The next pickup advances it normally
        let notices = tracker.on_message(&msg("Deep Space 4", PICKUP));
        assert_eq!(notices[0].update, MissionUpdate::StepCompleted { step_index: 1 });
        assert_eq!(*calls.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn deferred_invitation_dies_with_its_sender() {
        let registry = world();
        registry.remove(DS4);
        let mut tracker = deferring(Arc::clone(&registry));

        tracker.on_message(&msg("Anaan Science", COURIER));
        registry.remove(ANAAN);
        tracker.on_object_deleted(&ObjectDeleted { target_id: 1 });

        assert_eq!(tracker.deferred_count(), 0);
    }

    #[test]
    fn contact_name_survives_registry_removal() {
        let registry = world();
        let mut tracker = tracker(Arc::clone(&registry));
        tracker.on_message(&msg("Anaan Science", COURIER));

        registry.remove(ANAAN);
        assert_eq!(tracker.contact_name(ANAAN).as_deref(), Some("Anaan Science"));
        assert_eq!(tracker.contact_name(ContactId::new(42)), None);
    }

    #[test]
    fn clear_keeps_listeners() {
        let mut tracker = tracker(world());
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        tracker.add_listener(move |mission| {
            sink.lock().unwrap().push(mission.mission_type());
        });

        tracker.on_message(&msg("Anaan Science", COURIER));
        tracker.clear();
        assert_eq!(tracker.active_mission_count(), 0);

        // Cleared contacts no longer fail anything
        assert!(tracker.on_object_deleted(&ObjectDeleted { target_id: 2 }).is_empty());

        tracker.on_message(&msg("Anaan Science", COURIER));
        assert_eq!(
            *received.lock().unwrap(),
            vec![MissionType::Courier, MissionType::Courier]
        );
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("DEFER".parse::<UnresolvedContactPolicy>(), Ok(UnresolvedContactPolicy::Defer));
        assert_eq!(" drop ".parse::<UnresolvedContactPolicy>(), Ok(UnresolvedContactPolicy::Drop));
        assert!("later".parse::<UnresolvedContactPolicy>().is_err());
        assert_eq!(UnresolvedContactPolicy::Defer.to_string(), "defer");
    }
}
