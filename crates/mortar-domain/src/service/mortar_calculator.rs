//! Mortar quantity calculation
//!
//! # Formula
//! V = 2 x (L + W) x H x T
//! cement = ((V x 1.3) / (C + S)) x (C / 1.25)
//! sand   = ((V x 1.3) / (C + S)) x S
//!
//! Inputs are not validated. NaN, zero and negative values propagate through
//! plain floating-point arithmetic and show up in the formatted output.

use mortar_types::{RoomInput, RoomResult};

use super::fixed_format::to_fixed;
use crate::model::{MortarQuantities, RoomDimensions};

/// Overage factor for material loss
pub const WASTE_MARGIN: f64 = 1.3;

/// Divisor converting the cement volume share into bags
pub const CEMENT_WEIGHT_CONVERSION: f64 = 1.25;

/// Fractional digits of every displayed quantity
pub const DISPLAY_DIGITS: usize = 2;

/// Total wall volume of the four perimeter walls (m³)
pub fn wall_volume(dims: &RoomDimensions) -> f64 {
    2.0 * (dims.length + dims.width) * dims.height * dims.thickness
}

pub fn calculate_quantities(dims: &RoomDimensions) -> MortarQuantities {
    let volume = wall_volume(dims);
    let share = (volume * WASTE_MARGIN) / dims.mix_parts();

    MortarQuantities {
        wall_volume_m3: volume,
        cement_bags: share * (dims.cement_ratio / CEMENT_WEIGHT_CONVERSION),
        sand_m3: share * dims.sand_ratio,
    }
}

/// Calculate and format the result for one room
pub fn calculate_room(room: &RoomInput) -> RoomResult {
    let quantities = calculate_quantities(&RoomDimensions::from_input(room));

    RoomResult {
        name: room.name.clone(),
        size: room.size.clone(),
        wall_volume: to_fixed(quantities.wall_volume_m3, DISPLAY_DIGITS),
        cement_quantity: to_fixed(quantities.cement_bags, DISPLAY_DIGITS),
        sand_quantity: to_fixed(quantities.sand_m3, DISPLAY_DIGITS),
    }
}

/// Calculate every room, keeping input order
pub fn calculate_rooms(rooms: &[RoomInput]) -> Vec<RoomResult> {
    rooms.iter().map(calculate_room).collect()
}
