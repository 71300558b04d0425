//! Domain services

pub mod fixed_format;
pub mod mortar_calculator;
pub mod number_parse;
pub mod report;

pub use fixed_format::to_fixed;
pub use mortar_calculator::{calculate_quantities, calculate_room, calculate_rooms, wall_volume};
pub use number_parse::{parse_float, parse_room_count, MAX_ROOM_COUNT};
pub use report::generate_results_report;
