//! Parsed room dimensions and raw quantities

use mortar_types::RoomInput;
use serde::Serialize;

use crate::service::number_parse::parse_float;

/// Numeric values of a room form, parsed from text
///
/// Unparsable text becomes NaN and is carried through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomDimensions {
    /// L (m)
    pub length: f64,
    /// W (m)
    pub width: f64,
    /// H (m)
    pub height: f64,
    /// T (m)
    pub thickness: f64,
    /// C
    pub cement_ratio: f64,
    /// S
    pub sand_ratio: f64,
}

impl RoomDimensions {
    pub fn from_input(room: &RoomInput) -> Self {
        Self {
            length: parse_float(&room.length),
            width: parse_float(&room.width),
            height: parse_float(&room.height),
            thickness: parse_float(&room.thickness),
            cement_ratio: parse_float(&room.cement_ratio),
            sand_ratio: parse_float(&room.sand_ratio),
        }
    }

    /// C + S
    pub fn mix_parts(&self) -> f64 {
        self.cement_ratio + self.sand_ratio
    }
}

/// Unformatted calculation output for one room
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MortarQuantities {
    pub wall_volume_m3: f64,
    pub cement_bags: f64,
    pub sand_m3: f64,
}

impl MortarQuantities {
    pub fn is_finite(&self) -> bool {
        self.wall_volume_m3.is_finite() && self.cement_bags.is_finite() && self.sand_m3.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortar_types::RoomField;

    #[test]
    fn test_from_input_parses_each_field() {
        let room = RoomInput::default()
            .with_field(RoomField::Length, "4")
            .with_field(RoomField::Width, "3")
            .with_field(RoomField::Height, "2.5")
            .with_field(RoomField::Thickness, "0.15")
            .with_field(RoomField::CementRatio, "1")
            .with_field(RoomField::SandRatio, "4");

        let dims = RoomDimensions::from_input(&room);
        assert_eq!(dims.length, 4.0);
        assert_eq!(dims.width, 3.0);
        assert_eq!(dims.height, 2.5);
        assert_eq!(dims.thickness, 0.15);
        assert_eq!(dims.mix_parts(), 5.0);
    }

    #[test]
    fn test_blank_input_is_nan() {
        let dims = RoomDimensions::from_input(&RoomInput::default());
        assert!(dims.length.is_nan());
        assert!(dims.sand_ratio.is_nan());
    }

    #[test]
    fn test_name_and_size_are_ignored() {
        let a = RoomInput::default().with_field(RoomField::Length, "2");
        let b = a
            .with_field(RoomField::Name, "12")
            .with_field(RoomField::Size, "34");
        let (da, db) = (RoomDimensions::from_input(&a), RoomDimensions::from_input(&b));
        assert_eq!(da.length, db.length);
        assert!(da.width.is_nan() && db.width.is_nan());
    }
}
