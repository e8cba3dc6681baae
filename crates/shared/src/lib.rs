//! missionwatch Shared - types crossing the engine boundary
//!
//! - Feed events as delivered by the game connection (one JSON object per line)
//! - Mission snapshots handed to displays
//!
//! # Design Principles
//!
//! 1. **No business logic** - Pure data types and serialization
//! 2. **Raw ids on the wire** - object ids are plain integers, as the game sends them

pub mod messages;
pub mod summary;

pub use messages::{ContactSeen, FeedEvent, IncomingMessage, ObjectDeleted, ObjectKind};
pub use summary::{MissionSummary, StepSummary};
