//! Drawing surface adapter
//!
//! A `Surface` is the only place pixels are touched: transforms allocate a
//! surface sized to their destination, draw a source region onto it, and
//! hand it to the codec for encoding. Surfaces are never shared or reused
//! between operations.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use rasterkit_core::constants::DEFAULT_SURFACE_BASENAME;
use rasterkit_core::{EncodeFormat, ImageFile, RasterError, RasterResult};

use crate::raster::RasterImage;
use crate::transform::FlipAxes;

/// Rectangular region of a source image, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SourceRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        SourceRegion {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole extent of an image
    pub fn full(image: &RasterImage) -> Self {
        SourceRegion {
            x: 0,
            y: 0,
            width: image.width(),
            height: image.height(),
        }
    }
}

/// A fresh RGBA drawing target
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Allocate a surface, flooring fractional dimensions.
    ///
    /// Negative, non-finite, or unaddressably large dimensions are rejected.
    /// Zero-sized surfaces allocate fine; encoding one fails downstream in
    /// the encoder.
    pub fn new(width: f64, height: f64) -> RasterResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(RasterError::InvalidSurface(format!(
                "{}x{} is not finite",
                width, height
            )));
        }
        if width < 0.0 || height < 0.0 {
            return Err(RasterError::InvalidSurface(format!(
                "{}x{} is negative",
                width, height
            )));
        }

        let floored_width = width.floor();
        let floored_height = height.floor();
        if floored_width > u32::MAX as f64 || floored_height > u32::MAX as f64 {
            return Err(RasterError::InvalidSurface(format!(
                "{}x{} exceeds the addressable size",
                width, height
            )));
        }

        Ok(Surface {
            pixels: RgbaImage::new(floored_width as u32, floored_height as u32),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Draw a region of `image` scaled to fill the whole surface, mirroring
    /// along the flagged axes.
    pub fn draw_scaled(&mut self, image: &RasterImage, src: SourceRegion, axes: FlipAxes) {
        if self.pixels.width() == 0 || self.pixels.height() == 0 {
            return;
        }
        if src.width == 0 || src.height == 0 {
            return;
        }

        let source = image.as_dynamic().to_rgba8();
        let region = imageops::crop_imm(&source, src.x, src.y, src.width, src.height).to_image();

        let mut scaled = if region.dimensions() == self.pixels.dimensions() {
            region
        } else {
            let filter = select_filter(region.dimensions(), self.pixels.dimensions());
            imageops::resize(&region, self.pixels.width(), self.pixels.height(), filter)
        };

        if axes.x {
            scaled = imageops::flip_horizontal(&scaled);
        }
        if axes.y {
            scaled = imageops::flip_vertical(&scaled);
        }

        imageops::overlay(&mut self.pixels, &scaled, 0, 0);
    }

    /// Serialize the surface with the given encoding.
    ///
    /// The default filename is `i.<ext>`.
    pub fn encode(&self, format: EncodeFormat, filename: Option<&str>) -> RasterResult<ImageFile> {
        let filename = match filename {
            Some(name) => name.to_string(),
            None => format!("{}.{}", DEFAULT_SURFACE_BASENAME, format.extension()),
        };

        let image = DynamicImage::ImageRgba8(self.pixels.clone());
        // JPEG has no alpha channel
        let image = match format {
            EncodeFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
            _ => image,
        };

        let estimated_size = self.pixels.width() as usize * self.pixels.height() as usize * 3;
        let mut buffer = Vec::with_capacity(estimated_size);
        let mut cursor = Cursor::new(&mut buffer);
        image
            .write_to(&mut cursor, image_format(format))
            .map_err(|e| {
                RasterError::Encode(format!(
                    "Failed to encode {}: {}",
                    format.to_mime_type(),
                    e
                ))
            })?;

        tracing::debug!(
            width = self.pixels.width(),
            height = self.pixels.height(),
            size_bytes = buffer.len(),
            format = format.to_mime_type(),
            "Encoded surface"
        );

        Ok(ImageFile::new(buffer, filename, format.to_mime_type()))
    }

    /// Probe whether the encoder for `format` was compiled in.
    ///
    /// Called once at codec construction, so a missing capability fails
    /// before any pixel work starts.
    pub fn ensure_encode_support(format: EncodeFormat) -> RasterResult<()> {
        if !image_format(format).writing_enabled() {
            return Err(RasterError::UnsupportedCapability(format!(
                "No encoder available for {}",
                format.to_mime_type()
            )));
        }
        Ok(())
    }
}

pub(crate) fn image_format(format: EncodeFormat) -> ImageFormat {
    match format {
        EncodeFormat::Png => ImageFormat::Png,
        EncodeFormat::Jpeg => ImageFormat::Jpeg,
        EncodeFormat::WebP => ImageFormat::WebP,
    }
}

fn select_filter(src: (u32, u32), dst: (u32, u32)) -> FilterType {
    let src_area = src.0 as u64 * src.1 as u64;
    let dst_area = dst.0 as u64 * dst.1 as u64;
    if dst_area < src_area {
        FilterType::Lanczos3
    } else {
        FilterType::CatmullRom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn red_blue_halves(width: u32, height: u32) -> RasterImage {
        let pixels = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                RED
            } else {
                BLUE
            }
        });
        RasterImage::from_dynamic(DynamicImage::ImageRgba8(pixels))
    }

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RasterImage {
        RasterImage::from_dynamic(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width, height, color,
        )))
    }

    #[test]
    fn test_new_floors_fractional_dimensions() {
        let surface = Surface::new(10.9, 5.2).unwrap();
        assert_eq!(surface.dimensions(), (10, 5));
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(matches!(
            Surface::new(-1.0, 4.0),
            Err(RasterError::InvalidSurface(_))
        ));
        assert!(matches!(
            Surface::new(4.0, f64::NAN),
            Err(RasterError::InvalidSurface(_))
        ));
        assert!(matches!(
            Surface::new(f64::INFINITY, 4.0),
            Err(RasterError::InvalidSurface(_))
        ));
        assert!(matches!(
            Surface::new(1e18, 4.0),
            Err(RasterError::InvalidSurface(_))
        ));
    }

    #[test]
    fn test_zero_surface_allocates_but_wont_encode() {
        let surface = Surface::new(0.0, 10.0).unwrap();
        assert_eq!(surface.dimensions(), (0, 10));
        assert!(matches!(
            surface.encode(EncodeFormat::Png, None),
            Err(RasterError::Encode(_))
        ));
    }

    #[test]
    fn test_draw_full_region_same_size() {
        let image = red_blue_halves(4, 2);
        let mut surface = Surface::new(4.0, 2.0).unwrap();
        surface.draw_scaled(&image, SourceRegion::full(&image), FlipAxes::default());

        assert_eq!(*surface.pixels.get_pixel(0, 0), RED);
        assert_eq!(*surface.pixels.get_pixel(3, 0), BLUE);
    }

    #[test]
    fn test_draw_scales_to_surface() {
        let image = solid(4, 4, RED);
        let mut surface = Surface::new(2.0, 2.0).unwrap();
        surface.draw_scaled(&image, SourceRegion::full(&image), FlipAxes::default());

        assert_eq!(surface.dimensions(), (2, 2));
        assert_eq!(*surface.pixels.get_pixel(0, 0), RED);
        assert_eq!(*surface.pixels.get_pixel(1, 1), RED);
    }

    #[test]
    fn test_draw_region_selects_pixels() {
        let image = red_blue_halves(2, 1);
        let mut surface = Surface::new(1.0, 1.0).unwrap();
        surface.draw_scaled(&image, SourceRegion::new(1, 0, 1, 1), FlipAxes::default());

        assert_eq!(*surface.pixels.get_pixel(0, 0), BLUE);
    }

    #[test]
    fn test_draw_mirrors_horizontally() {
        let image = red_blue_halves(2, 1);
        let mut surface = Surface::new(2.0, 1.0).unwrap();
        surface.draw_scaled(
            &image,
            SourceRegion::full(&image),
            FlipAxes { x: true, y: false },
        );

        assert_eq!(*surface.pixels.get_pixel(0, 0), BLUE);
        assert_eq!(*surface.pixels.get_pixel(1, 0), RED);
    }

    #[test]
    fn test_draw_mirrors_vertically() {
        let pixels = RgbaImage::from_fn(1, 2, |_, y| if y == 0 { RED } else { BLUE });
        let image = RasterImage::from_dynamic(DynamicImage::ImageRgba8(pixels));

        let mut surface = Surface::new(1.0, 2.0).unwrap();
        surface.draw_scaled(
            &image,
            SourceRegion::full(&image),
            FlipAxes { x: false, y: true },
        );

        assert_eq!(*surface.pixels.get_pixel(0, 0), BLUE);
        assert_eq!(*surface.pixels.get_pixel(0, 1), RED);
    }

    #[test]
    fn test_encode_default_filename_tracks_format() {
        let image = solid(2, 2, RED);
        let mut surface = Surface::new(2.0, 2.0).unwrap();
        surface.draw_scaled(&image, SourceRegion::full(&image), FlipAxes::default());

        let png = surface.encode(EncodeFormat::Png, None).unwrap();
        assert_eq!(png.filename, "i.png");
        assert_eq!(png.content_type, "image/png");
        assert!(!png.data.is_empty());

        let jpeg = surface.encode(EncodeFormat::Jpeg, None).unwrap();
        assert_eq!(jpeg.filename, "i.jpg");
        assert_eq!(jpeg.content_type, "image/jpeg");
    }

    #[test]
    fn test_encode_explicit_filename() {
        let surface = Surface::new(1.0, 1.0).unwrap();
        let file = surface.encode(EncodeFormat::Png, Some("out.png")).unwrap();
        assert_eq!(file.filename, "out.png");
    }

    #[test]
    fn test_ensure_encode_support_for_compiled_formats() {
        assert!(Surface::ensure_encode_support(EncodeFormat::Png).is_ok());
        assert!(Surface::ensure_encode_support(EncodeFormat::Jpeg).is_ok());
    }

    #[test]
    fn test_select_filter() {
        assert_eq!(select_filter((4, 4), (2, 2)), FilterType::Lanczos3);
        assert_eq!(select_filter((2, 2), (4, 4)), FilterType::CatmullRom);
        assert_eq!(select_filter((2, 2), (2, 2)), FilterType::CatmullRom);
    }
}
