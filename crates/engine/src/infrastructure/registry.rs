//! In-memory contact registry.
//!
//! Mirrors the world objects announced on the feed. Readers may sit on other
//! threads (displays), so both indexes are concurrent maps.

use dashmap::DashMap;

use missionwatch_domain::{Contact, ContactId};

use super::ports::ContactRegistry;

/// Thread-safe id and name index over the contacts currently in the world.
#[derive(Debug, Default)]
pub struct InMemoryContactRegistry {
    by_id: DashMap<ContactId, Contact>,
    by_name: DashMap<String, ContactId>,
}

impl InMemoryContactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a contact.
    ///
    /// A contact update without a name keeps the name already known. A
    /// renamed contact stops answering to its old name, which passes to any
    /// remaining namesake.
    pub fn upsert(&self, mut contact: Contact) {
        let previous = self.by_id.get(&contact.id).map(|entry| entry.value().clone());

        if let Some(previous) = previous {
            if contact.name.is_none() {
                contact.name = previous.name.clone();
            }
            if contact.side.is_none() {
                contact.side = previous.side;
            }
            if let Some(old) = previous.name.filter(|old| contact.name() != Some(old.as_str())) {
                self.release_name(&old, contact.id);
            }
        }

        if let Some(name) = contact.name.clone() {
            self.by_name.insert(name, contact.id);
        }
        self.by_id.insert(contact.id, contact);
    }

    /// Removes a contact, returning its last known state.
    pub fn remove(&self, id: ContactId) -> Option<Contact> {
        let (_, contact) = self.by_id.remove(&id)?;
        if let Some(name) = contact.name() {
            self.release_name(name, id);
        }
        Some(contact)
    }

    /// Drops `id`'s claim on `name`, handing the name to another contact
    /// that still carries it.
    fn release_name(&self, name: &str, id: ContactId) {
        if self.by_name.remove_if(name, |_, owner| *owner == id).is_none() {
            return;
        }
        let heir = self
            .by_id
            .iter()
            .find(|entry| *entry.key() != id && entry.value().name() == Some(name))
            .map(|entry| *entry.key());
        if let Some(heir) = heir {
            self.by_name.insert(name.to_string(), heir);
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&self) {
        self.by_name.clear();
        self.by_id.clear();
    }
}

impl ContactRegistry for InMemoryContactRegistry {
    fn lookup_by_name(&self, name: &str) -> Option<Contact> {
        let id = *self.by_name.get(name)?;
        self.lookup_by_id(id)
    }

    fn lookup_by_id(&self, id: ContactId) -> Option<Contact> {
        self.by_id.get(&id).map(|entry| entry.value().clone())
    }
}
