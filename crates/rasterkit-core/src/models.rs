//! Shared payload types.

use bytes::Bytes;

/// Encoded image payload with its file identity (name + MIME type).
///
/// This is what the codec produces when rendering and what the loader and
/// picker hand back when acquiring. The pixel data stays opaque here; only
/// the processing crate decodes it.
#[derive(Clone, Debug)]
pub struct ImageFile {
    pub data: Bytes,
    pub filename: String,
    pub content_type: String,
}

impl ImageFile {
    pub fn new(
        data: impl Into<Bytes>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        ImageFile {
            data: data.into(),
            filename: filename.into(),
            content_type: content_type.into(),
        }
    }

    /// Encoded size in bytes
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_size() {
        let file = ImageFile::new(vec![0u8; 128], "f.png", "image/png");
        assert_eq!(file.size(), 128);
        assert_eq!(file.filename, "f.png");
        assert_eq!(file.content_type, "image/png");
    }
}
