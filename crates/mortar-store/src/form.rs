//! Form state for the room entry screen

use mortar_domain::service::{calculate_rooms, parse_room_count};
use mortar_types::{Error, Result, RoomField, RoomInput, RoomResult};
use tracing::{debug, info, warn};

use crate::rooms::{blank_rooms, replace_field, try_blank_rooms};

/// State of one form screen
///
/// Starts with a single blank room and no results.
#[derive(Debug, Clone)]
pub struct FormStore {
    room_count_text: String,
    rooms: Vec<RoomInput>,
    results: Vec<RoomResult>,
    max_rooms: Option<usize>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            room_count_text: String::new(),
            rooms: blank_rooms(1),
            results: Vec::new(),
            max_rooms: None,
        }
    }

    /// Form that rejects room counts above `max_rooms`
    pub fn with_max_rooms(max_rooms: usize) -> Self {
        Self {
            max_rooms: Some(max_rooms),
            ..Self::new()
        }
    }

    /// Text last accepted as the room count
    pub fn room_count_text(&self) -> &str {
        &self.room_count_text
    }

    pub fn rooms(&self) -> &[RoomInput] {
        &self.rooms
    }

    pub fn room(&self, index: usize) -> Option<&RoomInput> {
        self.rooms.get(index)
    }

    /// Results of the last calculation (empty before the first one)
    pub fn results(&self) -> &[RoomResult] {
        &self.results
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Configured room limit, if any
    pub fn max_rooms(&self) -> Option<usize> {
        self.max_rooms
    }

    /// Set the room count from typed text
    ///
    /// Every accepted change rebuilds the room list from scratch, so all
    /// previously entered room data is discarded. Rejected text leaves the
    /// form untouched.
    pub fn set_room_count(&mut self, text: &str) -> Result<usize> {
        let rooms = match parse_room_count(text, self.max_rooms).and_then(try_blank_rooms) {
            Ok(rooms) => rooms,
            Err(e) => {
                warn!(text, error = %e, "room count rejected");
                return Err(e);
            }
        };

        let count = rooms.len();
        info!(count, "room count set, room inputs reset");
        self.room_count_text = text.to_string();
        self.rooms = rooms;
        Ok(count)
    }

    /// Replace one field of one room
    pub fn set_field(&mut self, index: usize, field: RoomField, value: &str) -> Result<()> {
        if index >= self.rooms.len() {
            return Err(Error::RoomIndexOutOfRange {
                index,
                len: self.rooms.len(),
            });
        }

        debug!(index, %field, value, "room field edited");
        self.rooms = replace_field(&self.rooms, index, field, value);
        Ok(())
    }

    /// Calculate every room and replace the previous results
    pub fn calculate(&mut self) -> &[RoomResult] {
        self.results = calculate_rooms(&self.rooms);
        info!(rooms = self.results.len(), "mortar calculated");
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_sample(store: &mut FormStore, index: usize) {
        for (field, value) in [
            (RoomField::Name, "Bedroom"),
            (RoomField::Size, "12x10"),
            (RoomField::Length, "4"),
            (RoomField::Width, "3"),
            (RoomField::Height, "2.5"),
            (RoomField::Thickness, "0.15"),
            (RoomField::CementRatio, "1"),
            (RoomField::SandRatio, "4"),
        ] {
            store.set_field(index, field, value).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let store = FormStore::new();
        assert_eq!(store.room_count_text(), "");
        assert_eq!(store.rooms().len(), 1);
        assert!(store.rooms()[0].is_blank());
        assert!(!store.has_results());
    }

    #[test]
    fn test_recount_discards_room_data() {
        let mut store = FormStore::new();
        store.set_room_count("3").unwrap();
        for i in 0..3 {
            fill_sample(&mut store, i);
        }

        assert_eq!(store.set_room_count("1").unwrap(), 1);
        assert_eq!(store.rooms().len(), 1);
        assert!(store.rooms()[0].is_blank());
    }

    #[test]
    fn test_same_count_still_resets() {
        let mut store = FormStore::new();
        store.set_room_count("2").unwrap();
        fill_sample(&mut store, 0);
        store.set_room_count("2").unwrap();
        assert!(store.rooms().iter().all(RoomInput::is_blank));
    }

    #[test]
    fn test_non_numeric_count_is_zero_rooms() {
        let mut store = FormStore::new();
        assert_eq!(store.set_room_count("abc").unwrap(), 0);
        assert!(store.rooms().is_empty());
        assert_eq!(store.set_room_count("").unwrap(), 0);
        assert_eq!(store.room_count_text(), "");
    }

    #[test]
    fn test_rejected_count_keeps_state() {
        let mut store = FormStore::with_max_rooms(5);
        store.set_room_count("2").unwrap();
        fill_sample(&mut store, 1);

        assert!(store.set_room_count("-1").is_err());
        assert!(store.set_room_count("6").is_err());
        assert_eq!(store.room_count_text(), "2");
        assert_eq!(store.rooms().len(), 2);
        assert_eq!(store.rooms()[1].name, "Bedroom");
    }

    #[test]
    fn test_large_count_accepted_by_default() {
        let mut store = FormStore::new();
        assert_eq!(store.max_rooms(), None);
        store.set_room_count("2").unwrap();
        assert_eq!(store.set_room_count("150").unwrap(), 150);
        assert_eq!(store.room_count_text(), "150");
        assert_eq!(store.rooms().len(), 150);
        assert!(store.rooms().iter().all(RoomInput::is_blank));
    }

    #[test]
    fn test_overflowing_count_rejected() {
        let mut store = FormStore::new();
        store.set_room_count("3").unwrap();
        assert!(store.set_room_count("99999999999999999999").is_err());
        assert_eq!(store.rooms().len(), 3);
    }

    #[test]
    fn test_field_edit_is_isolated() {
        let mut store = FormStore::new();
        store.set_room_count("3").unwrap();
        fill_sample(&mut store, 0);
        fill_sample(&mut store, 2);
        let room0 = store.rooms()[0].clone();
        let room2 = store.rooms()[2].clone();

        store.set_field(1, RoomField::Name, "Hall").unwrap();

        assert_eq!(store.rooms()[1].name, "Hall");
        assert_eq!(store.rooms()[1].length, "");
        assert_eq!(store.rooms()[0], room0);
        assert_eq!(store.rooms()[2], room2);
    }

    #[test]
    fn test_field_edit_out_of_range() {
        let mut store = FormStore::new();
        let err = store.set_field(1, RoomField::Name, "x").unwrap_err();
        assert!(matches!(err, Error::RoomIndexOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_calculate() {
        let mut store = FormStore::new();
        fill_sample(&mut store, 0);
        let results = store.calculate();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].cement_quantity, "1.09");
        assert_eq!(results[0].sand_quantity, "5.46");
    }

    #[test]
    fn test_results_are_a_snapshot() {
        let mut store = FormStore::new();
        store.set_room_count("2").unwrap();
        fill_sample(&mut store, 0);
        store.calculate();

        store.set_field(0, RoomField::Length, "40").unwrap();
        store.set_room_count("5").unwrap();

        assert_eq!(store.results().len(), 2);
        assert_eq!(store.results()[0].wall_volume, "5.25");
    }

    #[test]
    fn test_recalculate_replaces_results() {
        let mut store = FormStore::new();
        store.set_room_count("2").unwrap();
        store.calculate();
        assert_eq!(store.results().len(), 2);

        store.set_room_count("0").unwrap();
        store.calculate();
        assert!(!store.has_results());
    }
}
