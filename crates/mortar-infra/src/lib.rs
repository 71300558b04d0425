//! Infrastructure layer - loaders for room sheets

pub mod room_sheet;

pub use room_sheet::{load_room_sheet, parse_csv_sheet, parse_toml_sheet};
