//! Content type inference from file extensions, centralized so the loader
//! and picker stay consistent.

use std::path::Path;

pub(crate) fn content_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(content_type_for_path(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(content_type_for_path(Path::new("a.JPEG")), "image/jpeg");
        assert_eq!(content_type_for_path(Path::new("b.png")), "image/png");
        assert_eq!(content_type_for_path(Path::new("c.gif")), "image/gif");
        assert_eq!(content_type_for_path(Path::new("d.webp")), "image/webp");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(
            content_type_for_path(Path::new("archive.tar")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for_path(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
