//! Port traits for infrastructure boundaries.
//!
//! The contact registry is owned by the surrounding application and updated
//! from the game feed. It is eventually consistent: a contact may be named in
//! a message before it has arrived, and may already be gone by the time a
//! deletion is processed.

use missionwatch_domain::{Contact, ContactId};

// =============================================================================
// Contact Registry
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ContactRegistry: Send + Sync {
    /// Finds a contact by its current display name.
    fn lookup_by_name(&self, name: &str) -> Option<Contact>;

    fn lookup_by_id(&self, id: ContactId) -> Option<Contact>;
}
