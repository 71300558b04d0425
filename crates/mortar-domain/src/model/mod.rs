//! Domain model types

pub mod dimensions;

pub use dimensions::{MortarQuantities, RoomDimensions};
