//! The single raster encoding every surface renders to.

use crate::error::{RasterError, RasterResult};

/// Output format for encoded surfaces
///
/// One format is configured per pipeline; there is no per-call negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeFormat {
    #[default]
    Png,
    Jpeg,
    WebP,
}

impl EncodeFormat {
    pub fn parse(s: &str) -> RasterResult<Self> {
        match s.to_lowercase().as_str() {
            "png" => Ok(EncodeFormat::Png),
            "jpeg" | "jpg" => Ok(EncodeFormat::Jpeg),
            "webp" => Ok(EncodeFormat::WebP),
            _ => Err(RasterError::Config(format!("Invalid encode format: {}", s))),
        }
    }

    /// File extension used when synthesizing default filenames
    pub fn extension(self) -> &'static str {
        match self {
            EncodeFormat::Png => "png",
            EncodeFormat::Jpeg => "jpg",
            EncodeFormat::WebP => "webp",
        }
    }

    pub fn to_mime_type(self) -> &'static str {
        match self {
            EncodeFormat::Png => "image/png",
            EncodeFormat::Jpeg => "image/jpeg",
            EncodeFormat::WebP => "image/webp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format_parse() {
        assert_eq!(EncodeFormat::parse("png").unwrap(), EncodeFormat::Png);
        assert_eq!(EncodeFormat::parse("jpeg").unwrap(), EncodeFormat::Jpeg);
        assert_eq!(EncodeFormat::parse("jpg").unwrap(), EncodeFormat::Jpeg);
        assert_eq!(EncodeFormat::parse("WEBP").unwrap(), EncodeFormat::WebP);
        assert!(EncodeFormat::parse("avif").is_err());
        assert!(EncodeFormat::parse("").is_err());
    }

    #[test]
    fn test_encode_format_default_is_png() {
        assert_eq!(EncodeFormat::default(), EncodeFormat::Png);
    }

    #[test]
    fn test_encode_format_to_mime_type() {
        assert_eq!(EncodeFormat::Png.to_mime_type(), "image/png");
        assert_eq!(EncodeFormat::Jpeg.to_mime_type(), "image/jpeg");
        assert_eq!(EncodeFormat::WebP.to_mime_type(), "image/webp");
    }

    #[test]
    fn test_encode_format_extension() {
        assert_eq!(EncodeFormat::Png.extension(), "png");
        assert_eq!(EncodeFormat::Jpeg.extension(), "jpg");
        assert_eq!(EncodeFormat::WebP.extension(), "webp");
    }
}
