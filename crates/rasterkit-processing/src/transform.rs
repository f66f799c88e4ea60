//! Geometric transforms
//!
//! Resize, crop, and flip all follow the same shape: resolve the request
//! against the source dimensions, draw onto a fresh surface, and
//! round-trip the surface through the codec. Outputs are therefore
//! indistinguishable from freshly decoded files.

use rasterkit_core::{RasterError, RasterResult};

use crate::codec::ImageCodec;
use crate::raster::RasterImage;
use crate::surface::{SourceRegion, Surface};

/// Mirror flags for the two axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipAxes {
    pub x: bool,
    pub y: bool,
}

impl FlipAxes {
    /// Parse a direction string such as `"x"`, `"y"`, or `"xy"`.
    ///
    /// Matching is case-insensitive and order-insensitive, so `"YX"` and
    /// `"xy"` parse the same. The empty string means no mirroring.
    pub fn parse(axes: &str) -> RasterResult<FlipAxes> {
        if axes.is_empty() {
            return Ok(FlipAxes::default());
        }

        let mut letters: Vec<char> = axes.to_lowercase().chars().collect();
        letters.sort_unstable();
        let normalized: String = letters.into_iter().collect();

        match normalized.as_str() {
            "x" => Ok(FlipAxes { x: true, y: false }),
            "y" => Ok(FlipAxes { x: false, y: true }),
            "xy" => Ok(FlipAxes { x: true, y: true }),
            _ => Err(RasterError::UnknownDirection(axes.to_string())),
        }
    }

    pub fn is_identity(&self) -> bool {
        !self.x && !self.y
    }
}

/// Target size for a resize.
///
/// A finite `ratio` is a percentage of the source and overrides the
/// explicit dimensions; a missing dimension defaults to the source's.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResizeSpec {
    pub ratio: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ResizeSpec {
    pub fn ratio(ratio: f64) -> Self {
        ResizeSpec {
            ratio: Some(ratio),
            ..Default::default()
        }
    }

    pub fn exact(width: Option<f64>, height: Option<f64>) -> Self {
        ResizeSpec {
            ratio: None,
            width,
            height,
        }
    }

    fn resolve(&self, src_width: u32, src_height: u32) -> (f64, f64) {
        match self.ratio {
            Some(ratio) if ratio.is_finite() => {
                let scale = ratio / 100.0;
                (src_width as f64 * scale, src_height as f64 * scale)
            }
            _ => (
                self.width.unwrap_or(src_width as f64),
                self.height.unwrap_or(src_height as f64),
            ),
        }
    }
}

/// Corner-based crop window.
///
/// Near corners default to the origin. Far corners default to the full
/// extent, and an explicit zero also means the full extent. Corners
/// given in reverse order select the same pixels and mirror the result
/// along that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CropRegion {
    pub x1: Option<u32>,
    pub y1: Option<u32>,
    pub x2: Option<u32>,
    pub y2: Option<u32>,
}

impl CropRegion {
    pub fn new(x1: Option<u32>, y1: Option<u32>, x2: Option<u32>, y2: Option<u32>) -> Self {
        CropRegion { x1, y1, x2, y2 }
    }

    fn resolve(&self, src_width: u32, src_height: u32) -> (SourceRegion, FlipAxes) {
        let x1 = self.x1.unwrap_or(0).min(src_width);
        let y1 = self.y1.unwrap_or(0).min(src_height);
        let x2 = match self.x2 {
            Some(x) if x != 0 => x.min(src_width),
            _ => src_width,
        };
        let y2 = match self.y2 {
            Some(y) if y != 0 => y.min(src_height),
            _ => src_height,
        };

        let mirror_x = x2 < x1;
        let mirror_y = y2 < y1;
        let (left, right) = if mirror_x { (x2, x1) } else { (x1, x2) };
        let (top, bottom) = if mirror_y { (y2, y1) } else { (y1, y2) };

        (
            SourceRegion::new(left, top, right - left, bottom - top),
            FlipAxes {
                x: mirror_x,
                y: mirror_y,
            },
        )
    }
}

/// Geometric transform engine over a codec.
#[derive(Clone)]
pub struct Transformer {
    codec: ImageCodec,
}

impl Transformer {
    pub fn new(codec: ImageCodec) -> Self {
        Transformer { codec }
    }

    /// Scale an image to the resolved target size.
    ///
    /// Fractional targets are floored by the surface. A missing spec is
    /// an error rather than an implicit identity.
    pub async fn resize(
        &self,
        image: RasterImage,
        spec: Option<&ResizeSpec>,
    ) -> RasterResult<RasterImage> {
        let spec = spec.ok_or_else(|| {
            RasterError::InvalidSizeSpec("Resize requires a target ratio or dimensions".to_string())
        })?;

        let (target_width, target_height) = spec.resolve(image.width(), image.height());
        tracing::debug!(
            src_width = image.width(),
            src_height = image.height(),
            target_width,
            target_height,
            "Resizing image"
        );

        let mut surface = Surface::new(target_width, target_height)?;
        surface.draw_scaled(&image, SourceRegion::full(&image), FlipAxes::default());
        self.codec.surface_to_image(surface).await
    }

    /// Cut a window out of an image, mirroring along any reversed axis.
    pub async fn crop(&self, image: RasterImage, region: &CropRegion) -> RasterResult<RasterImage> {
        let (src, mirror) = region.resolve(image.width(), image.height());
        tracing::debug!(
            x = src.x,
            y = src.y,
            width = src.width,
            height = src.height,
            mirror_x = mirror.x,
            mirror_y = mirror.y,
            "Cropping image"
        );

        let mut surface = Surface::new(src.width as f64, src.height as f64)?;
        surface.draw_scaled(&image, src, mirror);
        self.codec.surface_to_image(surface).await
    }

    /// Mirror an image along the named axes.
    ///
    /// An empty direction string returns the input untouched.
    pub async fn flip(&self, image: RasterImage, axes: &str) -> RasterResult<RasterImage> {
        let axes = FlipAxes::parse(axes)?;
        if axes.is_identity() {
            return Ok(image);
        }

        tracing::debug!(flip_x = axes.x, flip_y = axes.y, "Flipping image");

        let mut surface = Surface::new(image.width() as f64, image.height() as f64)?;
        surface.draw_scaled(&image, SourceRegion::full(&image), axes);
        self.codec.surface_to_image(surface).await
    }
}
