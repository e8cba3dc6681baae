//! Infrastructure - ports and their adapters.

pub mod feed;
pub mod ports;
pub mod registry;
