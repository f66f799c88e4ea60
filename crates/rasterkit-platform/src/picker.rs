use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use rasterkit_core::{ImageFile, ProcessorConfig};
use tokio::fs;

use crate::mime::content_type_for_path;
use crate::traits::{FilePicker, PlatformError, PlatformResult};

/// File picker that selects from a directory on disk
///
/// The headless stand-in for an interactive file dialog: candidates are the
/// directory's regular files matching the accepted extensions, visited in
/// filename order so selection is deterministic.
#[derive(Clone)]
pub struct DirectoryPicker {
    source_dir: PathBuf,
    accept_extensions: Vec<String>,
}

impl DirectoryPicker {
    pub fn new(source_dir: impl Into<PathBuf>, config: &ProcessorConfig) -> Self {
        DirectoryPicker {
            source_dir: source_dir.into(),
            accept_extensions: config.accept_extensions.clone(),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let ext = ext.to_lowercase();
                self.accept_extensions.iter().any(|accepted| *accepted == ext)
            }
            None => false,
        }
    }
}

#[async_trait]
impl FilePicker for DirectoryPicker {
    async fn pick(&self, multiple: bool) -> PlatformResult<Vec<ImageFile>> {
        let start = Instant::now();

        let mut dir = fs::read_dir(&self.source_dir).await.map_err(|e| {
            PlatformError::PickerFailed(format!(
                "Failed to read directory {}: {}",
                self.source_dir.display(),
                e
            ))
        })?;

        let mut candidates = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| {
            PlatformError::PickerFailed(format!("Failed to list directory entry: {}", e))
        })? {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if is_file && self.accepts(&path) {
                candidates.push(path);
            }
        }
        candidates.sort();

        if !multiple {
            candidates.truncate(1);
        }

        let mut selected = Vec::with_capacity(candidates.len());
        for path in candidates {
            let data = fs::read(&path).await.map_err(|e| {
                PlatformError::PickerFailed(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("image")
                .to_string();
            let content_type = content_type_for_path(&path);
            selected.push(ImageFile::new(data, filename, content_type));
        }

        tracing::info!(
            dir = %self.source_dir.display(),
            selected = selected.len(),
            multiple = multiple,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Directory pick complete"
        );

        Ok(selected)
    }
}
