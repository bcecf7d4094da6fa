//! Error types for the edges around rendering
//!
//! Tokenizing and rendering never fail. Errors only come from decoding persisted settings,
//! loading configuration and reading now-playing payloads.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ShareError {
    /// The persisted modifier list could not be decoded or encoded
    InvalidModifiers(String),
    /// A track snapshot or now-playing payload could not be decoded
    InvalidTrack(String),
    /// Configuration layering or deserialization failed
    Config(String),
    /// A `CODE=TEXT` modifier argument was malformed
    InvalidModifierArgument(String),
    IoError(String),
}

impl std::error::Error for ShareError {}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::InvalidModifiers(msg) => write!(f, "Invalid modifiers: {}", msg),
            ShareError::InvalidTrack(msg) => write!(f, "Invalid track: {}", msg),
            ShareError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ShareError::InvalidModifierArgument(arg) => {
                write!(f, "Invalid modifier argument: {}", arg)
            }
            ShareError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl From<config::ConfigError> for ShareError {
    fn from(err: config::ConfigError) -> Self {
        ShareError::Config(err.to_string())
    }
}

impl From<std::io::Error> for ShareError {
    fn from(err: std::io::Error) -> Self {
        ShareError::IoError(err.to_string())
    }
}
