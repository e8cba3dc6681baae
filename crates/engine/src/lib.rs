//! missionwatch Engine library.
//!
//! Tracks side missions from the comms chatter of a running game session.
//!
//! ## Structure
//!
//! - `use_cases/` - Mission tracking, snapshots and feed dispatch
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `config` - Environment configuration

pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use config::{ConfigError, EngineConfig};
pub use infrastructure::ports::ContactRegistry;
pub use infrastructure::registry::InMemoryContactRegistry;
pub use use_cases::missions::{
    FeedDispatcher, MissionBoard, MissionNotice, MissionTracker, TrackerConfig,
    UnresolvedContactPolicy,
};
