//! Size-constrained compression

use rasterkit_core::constants::MIN_TARGET_DIMENSION;
use rasterkit_core::RasterResult;

use crate::codec::ImageCodec;
use crate::raster::RasterImage;
use crate::surface::{SourceRegion, Surface};
use crate::transform::FlipAxes;

/// Shrinks images toward a byte budget by uniform downscaling.
#[derive(Clone)]
pub struct Compressor {
    codec: ImageCodec,
}

impl Compressor {
    pub fn new(codec: ImageCodec) -> Self {
        Compressor { codec }
    }

    /// Downscale an image so its encoded size approaches `max_bytes`.
    ///
    /// The encoded size is measured once. An image already within the
    /// budget comes back untouched. Otherwise both dimensions are scaled
    /// by `sqrt(max_bytes / current)`, which targets the budget under the
    /// assumption that encoded size tracks pixel count. The downscale is
    /// a single pass and the result is not measured again, so outputs can
    /// land above the budget when the encoding does not cooperate.
    pub async fn compress(&self, image: RasterImage, max_bytes: u64) -> RasterResult<RasterImage> {
        let encoded = self.codec.encode(&image, None).await?;
        let current = encoded.size();

        if current <= max_bytes {
            tracing::debug!(size_bytes = current, max_bytes, "Image already within budget");
            return Ok(image);
        }

        let ratio = (max_bytes as f64 / current as f64).sqrt();
        let target_width =
            ((image.width() as f64 * ratio).floor() as u32).max(MIN_TARGET_DIMENSION);
        let target_height =
            ((image.height() as f64 * ratio).floor() as u32).max(MIN_TARGET_DIMENSION);

        tracing::debug!(
            size_bytes = current,
            max_bytes,
            ratio,
            target_width,
            target_height,
            "Downscaling image toward budget"
        );

        let mut surface = Surface::new(target_width as f64, target_height as f64)?;
        surface.draw_scaled(&image, SourceRegion::full(&image), FlipAxes::default());
        self.codec.surface_to_image(surface).await
    }
}
