//! Error types module
//!
//! This module provides the core error types used throughout rasterkit.
//! All processing failures are unified under the `RasterError` enum, which
//! distinguishes capability problems, codec failures, and invalid transform
//! arguments. Every failure is terminal for its operation; nothing here is
//! retried internally.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like invalid transform arguments
    Debug,
    /// Warning level - for input-caused issues like undecodable payloads
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Encoding capability missing: {0}")]
    UnsupportedCapability(String),

    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("Encode failed: {0}")]
    Encode(String),

    #[error("Invalid surface dimensions: {0}")]
    InvalidSurface(String),

    #[error("Invalid size spec: {0}")]
    InvalidSizeSpec(String),

    #[error("Unknown flip direction: {0}")]
    UnknownDirection(String),

    #[error("File selection failed: {0}")]
    Picker(String),

    #[error("Payload too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for raster operations
pub type RasterResult<T> = Result<T, RasterError>;

impl RasterError {
    /// Get the error type name for detailed error reports
    pub fn error_type(&self) -> &'static str {
        match self {
            RasterError::UnsupportedCapability(_) => "UnsupportedCapability",
            RasterError::Decode(_) => "Decode",
            RasterError::Encode(_) => "Encode",
            RasterError::InvalidSurface(_) => "InvalidSurface",
            RasterError::InvalidSizeSpec(_) => "InvalidSizeSpec",
            RasterError::UnknownDirection(_) => "UnknownDirection",
            RasterError::Picker(_) => "Picker",
            RasterError::TooLarge { .. } => "TooLarge",
            RasterError::Config(_) => "Config",
            RasterError::Io(_) => "Io",
            RasterError::Internal(_) => "Internal",
        }
    }

    /// Log level at which this error should be reported
    pub fn log_level(&self) -> LogLevel {
        match self {
            RasterError::UnsupportedCapability(_) => LogLevel::Error,
            RasterError::Decode(_) => LogLevel::Warn,
            RasterError::Encode(_) => LogLevel::Error,
            RasterError::InvalidSurface(_) => LogLevel::Debug,
            RasterError::InvalidSizeSpec(_) => LogLevel::Debug,
            RasterError::UnknownDirection(_) => LogLevel::Debug,
            RasterError::Picker(_) => LogLevel::Warn,
            RasterError::TooLarge { .. } => LogLevel::Debug,
            RasterError::Config(_) => LogLevel::Warn,
            RasterError::Io(_) => LogLevel::Error,
            RasterError::Internal(_) => LogLevel::Error,
        }
    }

    /// Whether retrying the same call could succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RasterError::Io(_) | RasterError::Internal(_))
    }
}
