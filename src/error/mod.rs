//! Error handling for population generation and statistics.

use std::io;

/// Errors that can occur while generating or summarizing a population
#[derive(Debug, thiserror::Error)]
pub enum EmployeeStatsError {
    /// The generator configuration is not usable (negative count, reversed age range, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A reduction was asked to run over zero records
    #[error("Empty population: {0}")]
    EmptyPopulation(String),

    /// Error reading a configuration file or writing a summary
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing configuration or serializing a summary
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmployeeStatsError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create an empty population error
    pub fn empty_population(message: impl Into<String>) -> Self {
        Self::EmptyPopulation(message.into())
    }
}

/// Result type for population generation and statistics
pub type Result<T> = std::result::Result<T, EmployeeStatsError>;
