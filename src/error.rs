//! Error handling for AlgoVis-RS
//!
//! This module defines custom error types and a Result alias for use
//! throughout the crate. Trace engines never fail; errors only arise at the
//! configuration boundary and when reading or writing config files.

use thiserror::Error;

/// Main error type for AlgoVis-RS operations
#[derive(Error, Debug)]
pub enum VisError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// A numeric setting outside of its accepted range
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The search target is empty or not an integer
    #[error("Invalid search target: {0}")]
    InvalidTarget(String),

    /// An algorithm selector that names no known engine
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<VisError>,
    },
}

impl VisError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        VisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns true for errors caused by user-provided settings
    pub fn is_invalid_setting(&self) -> bool {
        match self {
            VisError::OutOfRange { .. }
            | VisError::InvalidTarget(_)
            | VisError::UnknownAlgorithm(_) => true,
            VisError::WithContext { source, .. } => source.is_invalid_setting(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for VisError {
    fn from(err: toml::de::Error) -> Self {
        VisError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for VisError {
    fn from(err: toml::ser::Error) -> Self {
        VisError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for VisError {
    fn from(err: serde_json::Error) -> Self {
        VisError::Serialization(err.to_string())
    }
}

/// Result type alias for AlgoVis-RS operations
pub type Result<T> = std::result::Result<T, VisError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
