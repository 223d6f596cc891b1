//! Error types for DEVCON.

use std::io;

/// Errors produced by the debug console.
#[derive(Debug, thiserror::Error)]
pub enum DevconError {
    #[error("command error: {0}")]
    Command(String),

    #[error("duplicate command: {0}")]
    DuplicateCommand(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DevconError>;
