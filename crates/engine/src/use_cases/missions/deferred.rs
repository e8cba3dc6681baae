//! Bounded queue of invitations waiting for a contact to arrive.

use std::collections::VecDeque;

use missionwatch_domain::{ContactId, MissionType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeferredInvitation {
    pub sender: ContactId,
    pub mission_type: MissionType,
    pub body: String,
}

/// FIFO of parked invitations; the oldest entry is evicted when full.
#[derive(Debug)]
pub(crate) struct DeferredInvitations {
    entries: VecDeque<DeferredInvitation>,
    capacity: usize,
}

impl DeferredInvitations {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Parks an invitation, replacing an earlier one for the same mission.
    ///
    /// Returns the entry evicted to make room, if any.
    pub fn park(&mut self, invitation: DeferredInvitation) -> Option<DeferredInvitation> {
        if self.capacity == 0 {
            return Some(invitation);
        }

        self.entries.retain(|parked| {
            parked.sender != invitation.sender || parked.mission_type != invitation.mission_type
        });

        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(invitation);
        evicted
    }

    /// Takes every parked invitation, oldest first.
    pub fn take_all(&mut self) -> Vec<DeferredInvitation> {
        self.entries.drain(..).collect()
    }

    /// Drops invitations sent by a contact that has left the world.
    pub fn discard_sender(&mut self, sender: ContactId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|parked| parked.sender != sender);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
