//! Configuration module
//!
//! Environment-driven settings for the processing pipeline. Every field has
//! a usable default, so an empty environment yields a working configuration.

use std::env;

use crate::error::RasterResult;
use crate::format::EncodeFormat;

// Common constants
const DEFAULT_ACCEPT_EXTENSIONS: &str = "jpg,jpeg,png,gif";
const DEFAULT_MAX_INPUT_BYTES: u64 = 0; // 0 = no limit

/// Processing pipeline configuration
#[derive(Clone, Debug)]
pub struct ProcessorConfig {
    /// Encoding applied to every rendered surface
    pub encode_format: EncodeFormat,
    /// Extensions the file picker offers, lowercase, without dots
    pub accept_extensions: Vec<String>,
    /// Upper bound on fetched payload size in bytes; 0 disables the check
    pub max_input_bytes: u64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            encode_format: EncodeFormat::default(),
            accept_extensions: split_extensions(DEFAULT_ACCEPT_EXTENSIONS),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ProcessorConfig {
    /// Build a configuration from environment variables.
    ///
    /// A malformed `RASTERKIT_ENCODE_FORMAT` is a hard error; the format
    /// decides the content type of everything the pipeline emits, so a typo
    /// must not silently fall back. Numeric fields fall back to defaults.
    pub fn from_env() -> RasterResult<Self> {
        dotenvy::dotenv().ok();

        let encode_format = match env::var("RASTERKIT_ENCODE_FORMAT") {
            Ok(value) => EncodeFormat::parse(&value)?,
            Err(_) => EncodeFormat::default(),
        };

        let accept_extensions = split_extensions(
            &env::var("RASTERKIT_ACCEPT_EXTENSIONS")
                .unwrap_or_else(|_| DEFAULT_ACCEPT_EXTENSIONS.to_string()),
        );

        let max_input_bytes = env::var("RASTERKIT_MAX_INPUT_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_INPUT_BYTES.to_string())
            .parse::<u64>()
            .unwrap_or(DEFAULT_MAX_INPUT_BYTES);

        Ok(ProcessorConfig {
            encode_format,
            accept_extensions,
            max_input_bytes,
        })
    }
}

/// Normalize a comma-separated extension list; leading dots are tolerated
/// so both `jpg` and `.jpg` spellings work.
fn split_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.encode_format, EncodeFormat::Png);
        assert_eq!(config.accept_extensions, vec!["jpg", "jpeg", "png", "gif"]);
        assert_eq!(config.max_input_bytes, 0);
    }

    #[test]
    fn test_split_extensions_tolerates_dots_and_whitespace() {
        let exts = split_extensions(".jpg, .JPEG,png , ,gif");
        assert_eq!(exts, vec!["jpg", "jpeg", "png", "gif"]);
    }

    #[test]
    fn test_split_extensions_empty_input() {
        assert!(split_extensions("").is_empty());
        assert!(split_extensions(" , ,").is_empty());
    }

    // Single test for every env-var scenario; tests run in parallel and
    // these variables are process-global.
    #[test]
    fn test_from_env_overrides_and_bad_format() {
        env::set_var("RASTERKIT_ENCODE_FORMAT", "jpeg");
        env::set_var("RASTERKIT_ACCEPT_EXTENSIONS", ".png, webp");
        env::set_var("RASTERKIT_MAX_INPUT_BYTES", "1024");

        let config = ProcessorConfig::from_env().unwrap();
        assert_eq!(config.encode_format, EncodeFormat::Jpeg);
        assert_eq!(config.accept_extensions, vec!["png", "webp"]);
        assert_eq!(config.max_input_bytes, 1024);

        env::set_var("RASTERKIT_MAX_INPUT_BYTES", "not a number");
        let config = ProcessorConfig::from_env().unwrap();
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);

        env::set_var("RASTERKIT_ENCODE_FORMAT", "bogus");
        assert!(ProcessorConfig::from_env().is_err());

        env::remove_var("RASTERKIT_ENCODE_FORMAT");
        env::remove_var("RASTERKIT_ACCEPT_EXTENSIONS");
        env::remove_var("RASTERKIT_MAX_INPUT_BYTES");
    }
}
