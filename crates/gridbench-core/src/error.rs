//! Error types for gridbench

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for gridbench operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Main error type for gridbench
#[derive(Error, Debug)]
pub enum BenchError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Task file does not exist in the data directory
    #[error("Task file not found: {}", path.display())]
    TaskNotFound { path: PathBuf },

    /// Task file exists but could not be parsed
    #[error("Failed to parse task {task}: {message}")]
    TaskParse { task: String, message: String },

    /// A task identifier was malformed or out of range
    #[error("\"{input}\" is not a valid task number; expected an integer from 1 to {max}")]
    InvalidTaskId { input: String, max: u16 },

    /// A grid violated the shape or value constraints
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Report rendering or writing failed
    #[error("Report error: {0}")]
    Report(String),

    /// I/O errors
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context about where it happened
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an I/O error carrying a description of the failed operation
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Additional context attached to the error, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), err)
    }
}
