use serde::{Deserialize, Serialize};

use crate::ContactId;

/// Snapshot of a world object that can send messages and take part in missions.
///
/// Contacts are owned by the surrounding application's registry. The engine
/// keeps these snapshots only to re-identify contacts after the registry has
/// forgotten them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    /// Display name; objects can arrive before their name does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Faction identifier, carried for other subsystems and never interpreted here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<u8>,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            side: None,
        }
    }

    pub fn unnamed(id: impl Into<ContactId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            side: None,
        }
    }

    pub fn with_side(mut self, side: u8) -> Self {
        self.side = Some(side);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
