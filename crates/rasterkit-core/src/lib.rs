//! Rasterkit Core Library
//!
//! This crate provides the shared payload types, error taxonomy, configuration,
//! and constants used by all rasterkit components.

pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod models;

// Re-export commonly used types
pub use config::ProcessorConfig;
pub use error::{LogLevel, RasterError, RasterResult};
pub use format::EncodeFormat;
pub use models::ImageFile;
