//! Error types for mortar-calculator

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid room count: {0}")]
    InvalidRoomCount(String),

    #[error("Room count {count} exceeds the limit of {max}")]
    RoomCountTooLarge { count: u64, max: usize },

    #[error("Not enough memory for {count} rooms")]
    RoomAllocationFailed { count: usize },

    #[error("Room {index} does not exist ({len} rooms)")]
    RoomIndexOutOfRange { index: usize, len: usize },

    #[error("Unknown room field: {0}")]
    UnknownField(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unsupported room sheet: {0}")]
    UnsupportedSheet(String),
}

pub type Result<T> = std::result::Result<T, Error>;
