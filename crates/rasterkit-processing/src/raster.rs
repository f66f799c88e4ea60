//! Opaque decoded-image handles.

use image::{DynamicImage, GenericImageView};

/// A decoded raster image.
///
/// The handle is opaque: callers see dimensions only, and every transform
/// produces a new handle instead of mutating this one. Pixel access happens
/// through drawing surfaces inside this crate.
#[derive(Clone)]
pub struct RasterImage {
    inner: DynamicImage,
}

impl RasterImage {
    pub(crate) fn from_dynamic(inner: DynamicImage) -> Self {
        RasterImage { inner }
    }

    pub(crate) fn as_dynamic(&self) -> &DynamicImage {
        &self.inner
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Result of loading a list of locators or files.
///
/// Cardinality is preserved: exactly one input collapses to `Single`, any
/// other count (zero included) stays a `Batch` in input order. Callers
/// branch on the variant; there is no implicit flattening.
#[derive(Debug, Clone)]
pub enum Loaded {
    Single(RasterImage),
    Batch(Vec<RasterImage>),
}

impl Loaded {
    /// Collapse a vec according to the one-element rule
    pub(crate) fn from_vec(mut images: Vec<RasterImage>) -> Self {
        if images.len() == 1 {
            Loaded::Single(images.remove(0))
        } else {
            Loaded::Batch(images)
        }
    }

    /// Number of images carried
    pub fn len(&self) -> usize {
        match self {
            Loaded::Single(_) => 1,
            Loaded::Batch(images) => images.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a vec, erasing the cardinality distinction
    pub fn into_vec(self) -> Vec<RasterImage> {
        match self {
            Loaded::Single(image) => vec![image],
            Loaded::Batch(images) => images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn test_image(width: u32, height: u32) -> RasterImage {
        RasterImage::from_dynamic(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([120, 10, 10, 255]),
        )))
    }

    #[test]
    fn test_dimensions_exposed() {
        let image = test_image(7, 3);
        assert_eq!(image.width(), 7);
        assert_eq!(image.height(), 3);
        assert_eq!(image.dimensions(), (7, 3));
    }

    #[test]
    fn test_loaded_one_collapses_to_single() {
        let loaded = Loaded::from_vec(vec![test_image(4, 4)]);
        assert!(matches!(loaded, Loaded::Single(_)));
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_loaded_many_stays_batch_in_order() {
        let loaded = Loaded::from_vec(vec![test_image(1, 1), test_image(2, 2), test_image(3, 3)]);
        assert!(matches!(loaded, Loaded::Batch(_)));
        assert_eq!(loaded.len(), 3);

        let widths: Vec<u32> = loaded.into_vec().iter().map(|i| i.width()).collect();
        assert_eq!(widths, vec![1, 2, 3]);
    }

    #[test]
    fn test_loaded_zero_is_empty_batch() {
        let loaded = Loaded::from_vec(Vec::new());
        assert!(matches!(loaded, Loaded::Batch(_)));
        assert!(loaded.is_empty());
    }
}
