//! Domain events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified. The engine turns these into listener notifications.

pub mod mission_events;

pub use mission_events::*;
