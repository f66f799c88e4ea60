use std::path::{Path, PathBuf};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Derive an output path next to the input: `photo.png` with suffix
/// `resized` and extension `jpg` becomes `photo_resized.jpg`.
pub fn output_path(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("{}_{}.{}", stem, suffix, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_directory() {
        let out = output_path(Path::new("/tmp/photo.png"), "resized", "png");
        assert_eq!(out, PathBuf::from("/tmp/photo_resized.png"));
    }

    #[test]
    fn output_path_swaps_extension() {
        let out = output_path(Path::new("photo.png"), "flipped", "jpg");
        assert_eq!(out, PathBuf::from("photo_flipped.jpg"));
    }

    #[test]
    fn output_path_without_stem() {
        let out = output_path(Path::new(""), "cropped", "png");
        assert_eq!(out, PathBuf::from("image_cropped.png"));
    }
}
