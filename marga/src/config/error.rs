//! Configuration loading errors.

use thiserror::Error;

/// Failure while reading or parsing a config file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
