use std::path::Path;
use std::time::Instant;

use async_trait::async_trait;
use rasterkit_core::constants::BLOB_LOCATOR_PREFIX;
use rasterkit_core::{ImageFile, ProcessorConfig};
use tokio::fs;

use crate::blob::BlobRegistry;
use crate::mime::content_type_for_path;
use crate::traits::{ImageLoader, PlatformError, PlatformResult};

/// Loader over the local platform
///
/// Blob locators resolve through the blob registry; anything else is read as
/// a filesystem path. File identity (name + content type) is inferred from
/// the path.
#[derive(Clone)]
pub struct LocalLoader {
    registry: BlobRegistry,
    max_input_bytes: u64,
}

impl LocalLoader {
    /// Create a loader backed by the process-wide blob registry
    pub fn new(config: &ProcessorConfig) -> Self {
        Self::with_registry(BlobRegistry::global(), config.max_input_bytes)
    }

    /// Create a loader over a specific registry (tests use a private one)
    pub fn with_registry(registry: BlobRegistry, max_input_bytes: u64) -> Self {
        LocalLoader {
            registry,
            max_input_bytes,
        }
    }

    fn check_size(&self, size: u64) -> PlatformResult<()> {
        if self.max_input_bytes > 0 && size > self.max_input_bytes {
            return Err(PlatformError::TooLarge {
                size,
                limit: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ImageLoader for LocalLoader {
    async fn fetch(&self, locator: &str) -> PlatformResult<ImageFile> {
        if locator.is_empty() {
            return Err(PlatformError::InvalidLocator("empty locator".to_string()));
        }

        if locator.starts_with(BLOB_LOCATOR_PREFIX) {
            let file = self.registry.resolve(locator).await.ok_or_else(|| {
                PlatformError::UnreachableLocator(format!("No blob registered for {}", locator))
            })?;
            self.check_size(file.size())?;

            tracing::debug!(
                locator = %locator,
                size_bytes = file.size(),
                "Resolved blob locator"
            );

            return Ok(file);
        }

        let path = Path::new(locator);
        let start = Instant::now();

        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(PlatformError::UnreachableLocator(locator.to_string()));
        }

        let data = fs::read(path).await.map_err(|e| {
            PlatformError::UnreachableLocator(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;

        self.check_size(data.len() as u64)?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let content_type = content_type_for_path(path);
        let size = data.len();

        tracing::info!(
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local file fetch successful"
        );

        Ok(ImageFile::new(data, filename, content_type))
    }
}
