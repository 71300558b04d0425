//! Form state store
//!
//! Holds the room count entry, the room inputs and the results of the last
//! calculation. Nothing is persisted.

mod form;
mod rooms;

pub use form::FormStore;
pub use rooms::{blank_rooms, replace_field, try_blank_rooms};
