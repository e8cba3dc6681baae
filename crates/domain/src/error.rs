//! Error types for the mission domain
//!
//! Irrelevant input (unknown senders, text that matches nothing) is never an
//! error here; it is reported as `None`/`false` by the operations themselves.
//! The types below cover the two genuine failure classes: a broken static
//! catalog, and an invitation naming a contact the registry has not seen yet.

use thiserror::Error;

use crate::catalog::MissionType;
use crate::value_objects::ContactRole;

/// Structural problems in a mission catalog, detected when it is built.
///
/// These are programming errors in the static table; the built-in catalog
/// panics on them rather than returning them at runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Mission type {0} has no steps")]
    NoSteps(MissionType),

    #[error("Mission type {mission_type} step {step} refers to {role}, which its invitation never binds")]
    UnboundRole {
        mission_type: MissionType,
        step: usize,
        role: ContactRole,
    },

    #[error("Mission type {0} is defined more than once")]
    DuplicateType(MissionType),
}

/// Failure to build a mission from a message that matched an invitation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The invitation names a contact the registry cannot resolve (yet)
    #[error("{mission_type} invitation names unknown contact '{name}'")]
    UnresolvedContact {
        mission_type: MissionType,
        name: String,
    },
}

impl ExtractionError {
    /// Create an unresolved contact error
    pub fn unresolved(mission_type: MissionType, name: impl Into<String>) -> Self {
        Self::UnresolvedContact {
            mission_type,
            name: name.into(),
        }
    }

    /// The mission type whose invitation failed.
    pub fn mission_type(&self) -> MissionType {
        match self {
            Self::UnresolvedContact { mission_type, .. } => *mission_type,
        }
    }
}
