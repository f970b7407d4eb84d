//! Error types with actionable diagnostics.
//!
//! Every failure in this crate is a configuration or programming error, so
//! errors carry enough context to fix the offending argument without
//! consulting documentation.

use thiserror::Error;

/// Result type alias for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while building or configuring a cyclical scheduler.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// An argument violates its documented range.
    #[error("Invalid configuration value for '{field}': {message}")]
    Configuration { field: String, message: String },

    /// A waveform name is not present in the registry.
    #[error("Unknown waveform '{name}'\n  → Registered waveforms: {}", .available.join(", "))]
    UnknownWaveform { name: String, available: Vec<String> },

    /// A configuration document could not be parsed.
    #[error("Failed to parse schedule config: {message}")]
    Parse { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScheduleError {
    /// Create a configuration error for `field`.
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration { field: field.into(), message: message.into() }
    }

    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is user-recoverable by editing arguments or config.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::UnknownWaveform { .. } | Self::Parse { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "E003",
            Self::UnknownWaveform { .. } => "E004",
            Self::Parse { .. } => "E002",
            Self::Io { .. } => "E050",
        }
    }
}
