//! Error types for stream generation

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Configuration rejected before any generation work
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No admissible column swap exists for the requested drift
    #[error("Degenerate drift: cannot apply swap {requested} of {magnitude} over {columns} columns")]
    DegenerateDrift {
        magnitude: usize,
        requested: usize,
        columns: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl GeneratorError {
    /// Shorthand for [`GeneratorError::InvalidConfiguration`]
    pub fn invalid(message: impl Into<String>) -> Self {
        GeneratorError::InvalidConfiguration(message.into())
    }

    /// Check if the error was raised by configuration validation
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            GeneratorError::InvalidConfiguration(_) | GeneratorError::DegenerateDrift { .. }
        )
    }
}
