//! Error types for the CLI application.
//!
//! This module defines the error type used throughout the CLI so that
//! command handlers can propagate failures with the `?` operator.

use std::fmt;

use pokersum_engine::errors::EngineError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine rejected a card, hand, or count
    Engine(EngineError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
