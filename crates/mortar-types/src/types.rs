//! Room input and result records

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Editable field of a room form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomField {
    Name,
    Size,
    Length,
    Width,
    Height,
    Thickness,
    CementRatio,
    SandRatio,
}

impl RoomField {
    /// All fields in form order
    pub const ALL: [RoomField; 8] = [
        RoomField::Name,
        RoomField::Size,
        RoomField::Length,
        RoomField::Width,
        RoomField::Height,
        RoomField::Thickness,
        RoomField::CementRatio,
        RoomField::SandRatio,
    ];

    /// Key used in sheets and JSON
    pub fn key(&self) -> &'static str {
        match self {
            RoomField::Name => "name",
            RoomField::Size => "size",
            RoomField::Length => "length",
            RoomField::Width => "width",
            RoomField::Height => "height",
            RoomField::Thickness => "thickness",
            RoomField::CementRatio => "cementRatio",
            RoomField::SandRatio => "sandRatio",
        }
    }

    /// Label shown next to the entry
    pub fn label(&self) -> &'static str {
        match self {
            RoomField::Name => "Room Name",
            RoomField::Size => "Room Size",
            RoomField::Length => "Length (L)",
            RoomField::Width => "Width (W)",
            RoomField::Height => "Height (H)",
            RoomField::Thickness => "Wall Thickness (T)",
            RoomField::CementRatio => "Cement Ratio (C)",
            RoomField::SandRatio => "Sand Ratio (S)",
        }
    }

    /// Whether the field is parsed as a number at calculation time
    pub fn is_numeric(&self) -> bool {
        !matches!(self, RoomField::Name | RoomField::Size)
    }
}

impl std::fmt::Display for RoomField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for RoomField {
    type Err = Error;

    /// Accepts camelCase, kebab-case and snake_case spellings, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        RoomField::ALL
            .into_iter()
            .find(|field| field.key().to_lowercase() == normalized)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Raw form input for one room
///
/// Every field is kept as typed text. Numeric fields are only parsed when
/// the calculation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomInput {
    pub name: String,
    pub size: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub thickness: String,
    pub cement_ratio: String,
    pub sand_ratio: String,
}

impl RoomInput {
    /// Get the text of a field
    pub fn get(&self, field: RoomField) -> &str {
        match field {
            RoomField::Name => &self.name,
            RoomField::Size => &self.size,
            RoomField::Length => &self.length,
            RoomField::Width => &self.width,
            RoomField::Height => &self.height,
            RoomField::Thickness => &self.thickness,
            RoomField::CementRatio => &self.cement_ratio,
            RoomField::SandRatio => &self.sand_ratio,
        }
    }

    /// Copy of this record with one field replaced
    pub fn with_field(&self, field: RoomField, value: impl Into<String>) -> Self {
        let mut room = self.clone();
        let slot = match field {
            RoomField::Name => &mut room.name,
            RoomField::Size => &mut room.size,
            RoomField::Length => &mut room.length,
            RoomField::Width => &mut room.width,
            RoomField::Height => &mut room.height,
            RoomField::Thickness => &mut room.thickness,
            RoomField::CementRatio => &mut room.cement_ratio,
            RoomField::SandRatio => &mut room.sand_ratio,
        };
        *slot = value.into();
        room
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        RoomField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Calculated quantities for one room, formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResult {
    pub name: String,
    pub size: String,
    /// Wall volume (m³)
    pub wall_volume: String,
    /// Cement (bags)
    pub cement_quantity: String,
    /// Sand (m³)
    pub sand_quantity: String,
}

impl RoomResult {
    /// True when any quantity is not a finite number
    pub fn has_non_finite(&self) -> bool {
        [&self.wall_volume, &self.cement_quantity, &self.sand_quantity]
            .iter()
            .any(|v| v.as_str() == "NaN" || v.ends_with("Infinity"))
    }
}
