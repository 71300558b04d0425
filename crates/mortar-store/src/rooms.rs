//! Pure operations over the room list

use mortar_types::{Error, Result, RoomField, RoomInput};

/// Fresh list of `count` blank rooms
pub fn blank_rooms(count: usize) -> Vec<RoomInput> {
    vec![RoomInput::default(); count]
}

/// Like [`blank_rooms`], but reports a failed allocation instead of aborting
pub fn try_blank_rooms(count: usize) -> Result<Vec<RoomInput>> {
    let mut rooms = Vec::new();
    rooms
        .try_reserve_exact(count)
        .map_err(|_| Error::RoomAllocationFailed { count })?;
    rooms.resize(count, RoomInput::default());
    Ok(rooms)
}

/// New room list where only `rooms[index].field` is replaced by `value`
///
/// The input slice is never modified. An index past the end returns an
/// unchanged copy.
pub fn replace_field(
    rooms: &[RoomInput],
    index: usize,
    field: RoomField,
    value: &str,
) -> Vec<RoomInput> {
    rooms
        .iter()
        .enumerate()
        .map(|(i, room)| {
            if i == index {
                room.with_field(field, value)
            } else {
                room.clone()
            }
        })
        .collect()
}
