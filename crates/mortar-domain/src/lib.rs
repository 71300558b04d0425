//! Domain layer for mortar estimation
//!
//! Everything here is pure: no IO, no shared state.

pub mod model;
pub mod service;
