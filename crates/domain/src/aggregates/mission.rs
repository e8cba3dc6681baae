//! Mission aggregate - one side mission reconstructed from contact messages
//!
//! A mission is created from an invitation by the catalog and then driven by
//! the tracker: each matching message advances it one step, and the loss of a
//! contact it still needs ends it early.
//!
//! # Invariants
//!
//! - `step_index` never decreases and never exceeds the step count
//! - reaching the step count always sets a terminal state
//! - once terminal, the state never changes again
//! - the giver is bound at construction and never rebound

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{MissionType, MissionTypeDef};
use crate::events::MissionUpdate;
use crate::value_objects::{ContactRole, MissionState, Reward, RewardDelivery};
use crate::ContactId;

/// Identity of a mission: its type and the contact that gave it.
///
/// Games resend invitations, so two missions with the same key are the same
/// mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MissionKey {
    pub mission_type: MissionType,
    pub giver: ContactId,
}

impl fmt::Display for MissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.mission_type, self.giver)
    }
}

/// A single in-progress or concluded side mission
#[derive(Debug, Clone)]
pub struct Mission {
    def: Arc<MissionTypeDef>,
    contacts: BTreeMap<ContactRole, ContactId>,
    reward: Reward,
    state: MissionState,
    step_index: usize,
}

impl Mission {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub(crate) fn new(def: Arc<MissionTypeDef>, giver: ContactId, reward: Reward) -> Self {
        let mut contacts = BTreeMap::new();
        contacts.insert(ContactRole::Giver, giver);

        Self {
            def,
            contacts,
            reward,
            state: MissionState::Pending,
            step_index: 0,
        }
    }

    /// Binds a non-giver role. The giver is fixed at construction.
    pub(crate) fn bind(&mut self, role: ContactRole, contact: ContactId) {
        if role != ContactRole::Giver {
            self.contacts.insert(role, contact);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn mission_type(&self) -> MissionType {
        self.def.kind()
    }

    /// The deduplication key for this mission.
    pub fn key(&self) -> MissionKey {
        MissionKey {
            mission_type: self.def.kind(),
            giver: self.giver(),
        }
    }

    /// The contact that gave this mission.
    pub fn giver(&self) -> ContactId {
        self.contacts
            .get(&ContactRole::Giver)
            .copied()
            .unwrap_or_else(|| unreachable!("giver is bound at construction"))
    }

    /// Returns the contact bound to `role`, if the mission has one.
    #[inline]
    pub fn contact(&self, role: ContactRole) -> Option<ContactId> {
        self.contacts.get(&role).copied()
    }

    /// All bound contacts, by role.
    pub fn contacts(&self) -> impl Iterator<Item = (ContactRole, ContactId)> + '_ {
        self.contacts.iter().map(|(role, id)| (*role, *id))
    }

    /// The contact the player must meet for each step, in order.
    pub fn ordered_contacts(&self) -> Vec<Option<ContactId>> {
        self.def
            .steps()
            .iter()
            .map(|step| self.contact(step.sender()))
            .collect()
    }

    #[inline]
    pub fn reward(&self) -> Reward {
        self.reward
    }

    /// Returns true if the reward is received as the mission completes.
    /// Otherwise the giver drops it off at the next station it docks with.
    pub fn is_reward_immediate(&self) -> bool {
        self.def.delivery() == RewardDelivery::Immediate
    }

    pub fn reward_delivery(&self) -> RewardDelivery {
        self.def.delivery()
    }

    #[inline]
    pub fn state(&self) -> MissionState {
        self.state
    }

    #[inline]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn step_count(&self) -> usize {
        self.def.steps().len()
    }

    // =========================================================================
    // Behaviour
    // =========================================================================

    /// Offers a message to this mission.
    ///
    /// Returns the resulting update if the message satisfied the current step,
    /// or `None` if it did not concern this mission.
    pub fn offer<F>(&mut self, sender: ContactId, body: &str, name_of: F) -> Option<MissionUpdate>
    where
        F: Fn(ContactId) -> Option<String>,
    {
        let step = self.def.steps().get(self.step_index)?;

        if !step.matches(self, sender, body, &name_of) {
            return None;
        }

        Some(self.advance())
    }

    /// Notifies this mission that a contact has left the world.
    ///
    /// Only steps not yet satisfied matter: losing a contact the player has
    /// already dealt with changes nothing.
    pub fn on_contact_deleted(&mut self, contact: ContactId) -> Option<MissionUpdate> {
        if self.state.is_terminal() {
            return None;
        }

        let needed = self.def.steps()[self.step_index..]
            .iter()
            .any(|step| self.contact(step.sender()) == Some(contact));

        if !needed {
            return None;
        }

        self.state = self.def.completion().on_contact_lost();
        Some(MissionUpdate::ContactLost {
            contact,
            state: self.state,
        })
    }

    fn advance(&mut self) -> MissionUpdate {
        self.step_index += 1;

        if self.step_index == self.def.steps().len() {
            self.state = self.def.completion().on_steps_complete();
            MissionUpdate::Concluded { state: self.state }
        } else {
            MissionUpdate::StepCompleted {
                step_index: self.step_index,
            }
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MISSION {} - Reward: {} - {}",
            self.mission_type(),
            self.reward,
            self.state
        )?;

        for (index, contact) in self.ordered_contacts().into_iter().enumerate() {
            let mark = if index < self.step_index { '\u{221a}' } else { ' ' };
            match contact {
                Some(id) => write!(f, "\n  [{mark}] {id}")?,
                None => write!(f, "\n  [{mark}] ?")?,
            }
        }

        Ok(())
    }
}
