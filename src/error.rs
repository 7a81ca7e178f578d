//! Error types for sheetcast

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the sheetcast application
#[derive(Debug, Error)]
pub enum SheetcastError {
    #[error("Not a sheetcast directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Column not found in sheet: {0}")]
    UnknownColumn(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Spreadsheet error: {0}")]
    Sheet(String),

    #[error("Messaging API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SheetcastError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SheetcastError::NotInitialized(_) => 2,
            SheetcastError::UnknownColumn(_) => 3,
            SheetcastError::ProfileNotFound(_) => 4,
            SheetcastError::Api { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SheetcastError::NotInitialized(path) => {
                format!(
                    "Not a sheetcast directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'sheetcast init' in this directory to create a config store\n\
                    • Navigate to a directory that already holds a .sheetcast folder\n\
                    • Set SHEETCAST_ROOT environment variable to your config path",
                    path.display()
                )
            }
            SheetcastError::UnknownColumn(name) => {
                format!(
                    "Column not found in sheet: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'sheetcast columns <file>' to list the header row\n\
                    • Column names are matched exactly, including spaces and case\n\
                    • The header must be the first row of the first worksheet",
                    name
                )
            }
            SheetcastError::ProfileNotFound(name) => {
                format!(
                    "Profile not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'sheetcast profile list' to see available profiles\n\
                    • Add one with: sheetcast profile add {}",
                    name, name
                )
            }
            SheetcastError::Api { code, message } => {
                format!(
                    "Messaging API error {}: {}\n\n\
                    Suggestions:\n\
                    • Check agent-id / corp-id / corp-secret with 'sheetcast profile show'\n\
                    • A stale token is refreshed automatically; rerun the command\n\
                    • Verify the recipient account exists in your directory",
                    code, message
                )
            }
            SheetcastError::Config(msg) => {
                if msg.contains("No default profile") {
                    format!(
                        "{}\n\n\
                        Mark one with: sheetcast profile default <name>",
                        msg
                    )
                } else if msg.contains("Multiple default profiles") {
                    format!(
                        "{}\n\n\
                        Keep exactly one: sheetcast profile default <name> clears the others",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SheetcastError
pub type Result<T> = std::result::Result<T, SheetcastError>;
