//! Room sheet loaders (CSV / TOML)
//!
//! A room sheet lists room inputs for batch calculation. Values are kept as
//! raw text so they go through the same parsing as typed input.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use mortar_types::{Error, Result, RoomField, RoomInput};
use serde::Deserialize;
use tracing::{debug, info};

/// Load a room sheet, choosing the format from the file extension
pub fn load_room_sheet(path: &Path) -> Result<Vec<RoomInput>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let content = fs::read_to_string(path)?;
    let rooms = match extension.as_str() {
        "csv" => parse_csv_sheet(&content)?,
        "toml" => parse_toml_sheet(&content)?,
        _ => return Err(Error::UnsupportedSheet(path.display().to_string())),
    };

    info!(path = %path.display(), rooms = rooms.len(), "room sheet loaded");
    Ok(rooms)
}

/// Parse a CSV sheet with a header row
///
/// Header names may use any accepted field spelling (`cementRatio`,
/// `cement_ratio`, `Cement-Ratio`). The six numeric columns are required;
/// `name` and `size` are optional. Unknown columns are ignored.
pub fn parse_csv_sheet(content: &str) -> Result<Vec<RoomInput>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = map_columns(&headers)?;

    let mut rooms = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|v| v.is_empty()) {
            continue;
        }

        let room = columns.iter().fold(RoomInput::default(), |room, (field, idx)| {
            room.with_field(*field, record.get(*idx).unwrap_or(""))
        });
        rooms.push(room);
    }

    Ok(rooms)
}

fn map_columns(headers: &csv::StringRecord) -> Result<HashMap<RoomField, usize>> {
    let mut columns = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        match header.parse::<RoomField>() {
            Ok(field) => {
                columns.entry(field).or_insert(idx);
            }
            Err(_) => debug!(header, "ignoring unknown sheet column"),
        }
    }

    for field in RoomField::ALL.iter().filter(|f| f.is_numeric()) {
        if !columns.contains_key(field) {
            return Err(Error::MissingColumn(field.key().to_string()));
        }
    }

    Ok(columns)
}

/// A sheet value written either as a string or as a number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SheetValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl SheetValue {
    fn into_text(self) -> String {
        match self {
            SheetValue::Text(s) => s,
            SheetValue::Integer(i) => i.to_string(),
            SheetValue::Float(f) => f.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SheetRoom {
    name: Option<SheetValue>,
    size: Option<SheetValue>,
    length: Option<SheetValue>,
    width: Option<SheetValue>,
    height: Option<SheetValue>,
    thickness: Option<SheetValue>,
    #[serde(alias = "cement_ratio")]
    cement_ratio: Option<SheetValue>,
    #[serde(alias = "sand_ratio")]
    sand_ratio: Option<SheetValue>,
}

impl From<SheetRoom> for RoomInput {
    fn from(room: SheetRoom) -> Self {
        let text = |v: Option<SheetValue>| v.map(SheetValue::into_text).unwrap_or_default();
        RoomInput {
            name: text(room.name),
            size: text(room.size),
            length: text(room.length),
            width: text(room.width),
            height: text(room.height),
            thickness: text(room.thickness),
            cement_ratio: text(room.cement_ratio),
            sand_ratio: text(room.sand_ratio),
        }
    }
}

/// Container for parsing `[[rooms]]` tables
#[derive(Debug, Deserialize)]
struct RoomSheet {
    #[serde(default)]
    rooms: Vec<SheetRoom>,
}

/// Parse a TOML sheet made of `[[rooms]]` tables
pub fn parse_toml_sheet(content: &str) -> Result<Vec<RoomInput>> {
    let sheet: RoomSheet = toml::from_str(content)?;
    Ok(sheet.rooms.into_iter().map(RoomInput::from).collect())
}
