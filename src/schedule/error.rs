//! Error types for the schedule pipeline
//!
//! Normalization itself is total and never produces an error: malformed
//! date input degrades to an absent canonical date. The variants here cover
//! the edges of the pipeline only — configuration, record ingestion, and
//! output serialization.

use crate::types::ConfigError;
use thiserror::Error;

/// Errors that can occur around a pipeline run
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The input document could not be understood
    #[error("Input error: {0}")]
    Input(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScheduleError {
    /// Create an input error
    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = ScheduleError::input_error("record 3 has no title");
        assert_eq!(err.to_string(), "Input error: record 3 has no title");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ScheduleError = ConfigError::UnknownTimezone("Nowhere/Here".to_string()).into();
        assert!(err.to_string().contains("Unknown time zone"));
    }
}
