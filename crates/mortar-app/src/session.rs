//! Form sessions driven by text commands
//!
//! A session owns one `FormStore` and applies form events in order. Lines of
//! text map onto events so the same form can be filled from a script, a
//! terminal prompt or a room sheet.

use mortar_store::FormStore;
use mortar_types::{Error, Result, RoomField, RoomInput, RoomResult};
use tracing::debug;

/// One user action on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Room count entry changed
    SetRoomCount(String),
    /// Field of a room edited (0-based index)
    EditField {
        index: usize,
        field: RoomField,
        value: String,
    },
    /// Calculate pressed
    Calculate,
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Event(FormEvent),
    Show,
    Help,
    Quit,
}

pub const COMMAND_HELP: &str = "\
Commands:
  rooms <count>                  set the number of rooms (clears all rooms)
  set <room> <field> <value>     edit a field; room numbers start at 1
                                 fields: name size length width height
                                         thickness cementRatio sandRatio
  calc                           calculate all rooms
  show                           show the current room inputs
  help                           show this help
  quit                           leave the session";

/// Parse one line of session text
///
/// Returns `Ok(None)` for blank lines and `#` comments. Words are split
/// shell-style, so values containing spaces can be quoted.
pub fn parse_command_line(line: &str) -> Result<Option<SessionCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(trimmed)
        .map_err(|e| Error::InvalidCommand(format!("{}: {}", trimmed, e)))?;
    let Some((command, args)) = words.split_first() else {
        return Ok(None);
    };

    let parsed = match command.to_lowercase().as_str() {
        "rooms" | "count" => {
            let text = args.join(" ");
            SessionCommand::Event(FormEvent::SetRoomCount(text))
        }
        "set" => {
            let (room, field, value) = match args {
                [room, field, value @ ..] => (room, field, value.join(" ")),
                _ => {
                    return Err(Error::InvalidCommand(
                        "usage: set <room> <field> <value>".to_string(),
                    ))
                }
            };
            let index = parse_room_number(room)?;
            let field: RoomField = field.parse()?;
            SessionCommand::Event(FormEvent::EditField {
                index,
                field,
                value,
            })
        }
        "calc" | "calculate" => SessionCommand::Event(FormEvent::Calculate),
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(Error::InvalidCommand(other.to_string())),
    };

    Ok(Some(parsed))
}

/// 1-based room number to 0-based index
fn parse_room_number(text: &str) -> Result<usize> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(Error::InvalidCommand(format!(
            "room number must be 1 or more, got '{}'",
            text
        ))),
    }
}

/// A form being filled in
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: FormStore,
}

impl Session {
    /// Session whose form rejects counts above `max_rooms`, if given
    pub fn new(max_rooms: Option<usize>) -> Self {
        let store = match max_rooms {
            Some(max) => FormStore::with_max_rooms(max),
            None => FormStore::new(),
        };
        Self { store }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn results(&self) -> &[RoomResult] {
        self.store.results()
    }

    /// Apply one event to the form
    pub fn apply(&mut self, event: &FormEvent) -> Result<()> {
        match event {
            FormEvent::SetRoomCount(text) => {
                self.store.set_room_count(text)?;
            }
            FormEvent::EditField {
                index,
                field,
                value,
            } => {
                self.store.set_field(*index, *field, value)?;
            }
            FormEvent::Calculate => {
                self.store.calculate();
            }
        }
        Ok(())
    }

    /// Fill the form from a room sheet
    ///
    /// Sets the room count to the number of sheet rows, then types every
    /// non-empty value, exactly as a user would.
    pub fn import_rooms(&mut self, rooms: &[RoomInput]) -> Result<()> {
        self.apply(&FormEvent::SetRoomCount(rooms.len().to_string()))?;

        for (index, room) in rooms.iter().enumerate() {
            for field in RoomField::ALL {
                let value = room.get(field);
                if value.is_empty() {
                    continue;
                }
                self.apply(&FormEvent::EditField {
                    index,
                    field,
                    value: value.to_string(),
                })?;
            }
        }

        debug!(rooms = rooms.len(), "rooms imported into form");
        Ok(())
    }
}
