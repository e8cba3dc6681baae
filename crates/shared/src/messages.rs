//! Feed event types
//!
//! The surrounding application receives these from the game server and hands
//! them to the engine in arrival order. In a recorded feed each line is one
//! [`FeedEvent`], tagged by `event`.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Unknown event tags deserialize to `Unknown` and are skipped

use serde::{Deserialize, Serialize};

/// A free-text message from a contact, as shown on the comms console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Display name of the sender
    pub from: String,
    pub body: String,
}

impl IncomingMessage {
    pub fn new(from: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            body: body.into(),
        }
    }
}

/// A world object was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDeleted {
    pub target_id: i32,
}

/// Kind of world object, as far as mission tracking cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Non-player ship
    #[default]
    Npc,
    Base,
    PlayerShip,
    /// Anything else (mines, nebulae, creatures, ...)
    #[serde(other)]
    Other,
}

impl ObjectKind {
    /// Objects that can send messages and take part in missions.
    pub fn is_contact(&self) -> bool {
        matches!(self, ObjectKind::Npc | ObjectKind::Base)
    }
}

/// A world object was created or updated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSeen {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<u8>,
    #[serde(default)]
    pub kind: ObjectKind,
}

/// One event of the game feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FeedEvent {
    Contact(ContactSeen),
    Message(IncomingMessage),
    Deleted {
        target_id: i32,
        #[serde(default)]
        kind: ObjectKind,
    },
    /// The simulation ended; all missions and contacts are void
    SessionEnd,
    #[serde(other)]
    Unknown,
}
