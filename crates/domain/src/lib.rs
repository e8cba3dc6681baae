//! missionwatch domain - side missions reconstructed from contact chatter.
//!
//! Missions are never announced structurally by the game. They are inferred
//! from free-text messages sent by non-player contacts: an invitation creates
//! one, further messages advance it, and a contact vanishing from the world
//! can end it early.
//!
//! This crate is pure: no I/O, no logging, no clocks. Contact lookups are
//! injected as closures so the engine decides where names come from.

pub mod aggregates;
pub mod catalog;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Mission, MissionKey};
pub use catalog::{
    Extraction, Invitation, MissionCatalog, MissionCategory, MissionType, MissionTypeDef,
    RewardContact, RewardRule, Step,
};
pub use error::{CatalogError, ExtractionError};
pub use events::MissionUpdate;
pub use ids::ContactId;
pub use value_objects::{
    CompletionOutcome, Contact, ContactRole, MissionState, Reward, RewardDelivery,
};
