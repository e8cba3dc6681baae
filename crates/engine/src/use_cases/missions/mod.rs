//! Mission use cases - tracking, snapshots and feed dispatch.

mod deferred;
pub mod dispatch;
pub mod snapshot;
pub mod tracker;

pub use dispatch::{DispatchStats, FeedDispatcher};
pub use snapshot::{summarize, MissionBoard};
pub use tracker::{
    MissionListener, MissionNotice, MissionTracker, TrackerConfig, UnresolvedContactPolicy,
};
