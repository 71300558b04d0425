//! Application service layer - config, form sessions, sheet import

pub mod config;
pub mod session;
