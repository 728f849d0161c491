//! Error types for the Bookworm application.
//!
//! Uses `thiserror` for structured error definitions that provide
//! clear context about what went wrong.

use thiserror::Error;

/// Error raised while talking to the catalog endpoint.
#[derive(Error, Debug)]
pub enum FetchError {
    /// DNS failure, connection reset, body read failure, ...
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Error raised when a response body is not a search result.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body is not JSON or has the wrong shape
    #[error("Failed to parse catalog response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error type for a single catalog operation.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Error type for malformed interactive input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Menu choice is not a number
    #[error("Invalid option '{0}'. Please try again.")]
    NotANumber(String),

    /// Menu choice is a number but not on the menu
    #[error("Option {0} does not exist. Please try again.")]
    UnknownOption(i64),

    /// Year is not a number
    #[error("Invalid year '{0}'. Please try again.")]
    InvalidYear(String),
}

/// Error type for one menu action.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Reading stdin failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Stdin closed while a prompt was waiting
    #[error("Input closed")]
    EndOfInput,
}

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse config file
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid config value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Config directory not found
    #[error("Could not determine config directory")]
    NoConfigDir,
}
