//! Use cases - orchestration of domain operations over infrastructure ports.

pub mod missions;
