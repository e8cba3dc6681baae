//! Value objects for the mission domain

pub mod completion;
pub mod contact;
pub mod contact_role;
pub mod mission_state;
pub mod reward;

pub use completion::{CompletionOutcome, RewardDelivery};
pub use contact::Contact;
pub use contact_role::ContactRole;
pub use mission_state::MissionState;
pub use reward::Reward;
