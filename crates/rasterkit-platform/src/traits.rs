//! Platform collaborator traits
//!
//! This module defines the seams to the host platform: resolving a locator to
//! its encoded payload, and asking for a file selection. Implementations must
//! be safe to share across tasks.

use async_trait::async_trait;
use rasterkit_core::{ImageFile, RasterError};
use thiserror::Error;

/// Platform collaborator errors
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Locator not reachable: {0}")]
    UnreachableLocator(String),

    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    #[error("Payload too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("File selection failed: {0}")]
    PickerFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;

impl From<PlatformError> for RasterError {
    fn from(err: PlatformError) -> Self {
        match err {
            // A payload that cannot be fetched never becomes an image, so
            // both locator failures surface as decode failures upstream.
            PlatformError::UnreachableLocator(msg) => {
                RasterError::Decode(format!("Locator not reachable: {}", msg))
            }
            PlatformError::InvalidLocator(msg) => {
                RasterError::Decode(format!("Invalid locator: {}", msg))
            }
            PlatformError::TooLarge { size, limit } => RasterError::TooLarge { size, limit },
            PlatformError::PickerFailed(msg) => RasterError::Picker(msg),
            PlatformError::IoError(err) => RasterError::Io(err),
        }
    }
}

/// Image payload source
///
/// Resolves a locator to the encoded payload behind it. Fetching and decoding
/// are separate concerns; the codec decodes whatever this returns.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Fetch the payload behind a locator
    async fn fetch(&self, locator: &str) -> PlatformResult<ImageFile>;
}

/// File selection affordance
///
/// Asks the user (or an automated stand-in) to select image files. Selecting
/// zero files is a valid outcome, not an error.
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Request a selection; at most one file when `multiple` is false
    async fn pick(&self, multiple: bool) -> PlatformResult<Vec<ImageFile>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::LogLevel;

    #[test]
    fn test_unreachable_locator_converts_to_decode() {
        let err: RasterError = PlatformError::UnreachableLocator("blob:rasterkit/x".into()).into();
        assert_eq!(err.error_type(), "Decode");
        assert!(err.to_string().contains("blob:rasterkit/x"));
    }

    #[test]
    fn test_too_large_conversion_keeps_sizes() {
        let err: RasterError = PlatformError::TooLarge {
            size: 10,
            limit: 5,
        }
        .into();
        assert_eq!(err.error_type(), "TooLarge");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_picker_failed_conversion() {
        let err: RasterError = PlatformError::PickerFailed("dialog dismissed".into()).into();
        assert_eq!(err.error_type(), "Picker");
    }
}
