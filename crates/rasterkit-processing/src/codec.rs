//! Decode/encode bridge
//!
//! The codec is the only module that turns packaged bytes into raster
//! handles and back. Decoding routes through the blob registry so that
//! in-memory payloads and on-disk paths take the same loader path.

use std::io::Cursor;
use std::sync::Arc;

use rasterkit_core::constants::DEFAULT_IMAGE_BASENAME;
use rasterkit_core::{EncodeFormat, ImageFile, ProcessorConfig, RasterError, RasterResult};
use rasterkit_platform::{BlobRegistry, ImageLoader};

use crate::raster::{Loaded, RasterImage};
use crate::surface::{SourceRegion, Surface};
use crate::transform::FlipAxes;

/// Bridge between packaged image files and raster handles.
///
/// Cheap to clone; clones share the loader and registry.
#[derive(Clone)]
pub struct ImageCodec {
    loader: Arc<dyn ImageLoader>,
    registry: BlobRegistry,
    format: EncodeFormat,
}

impl ImageCodec {
    /// Build a codec over the process-wide blob registry.
    ///
    /// Fails if the encoder for the configured format was not compiled in,
    /// so misconfiguration surfaces before any pixel work.
    pub fn new(loader: Arc<dyn ImageLoader>, config: &ProcessorConfig) -> RasterResult<Self> {
        Self::with_registry(loader, BlobRegistry::global(), config.encode_format)
    }

    /// Build a codec over an explicit registry.
    ///
    /// The registry must be the one the loader resolves blob locators
    /// from, otherwise registered payloads are unreachable.
    pub fn with_registry(
        loader: Arc<dyn ImageLoader>,
        registry: BlobRegistry,
        format: EncodeFormat,
    ) -> RasterResult<Self> {
        Surface::ensure_encode_support(format)?;
        Ok(ImageCodec {
            loader,
            registry,
            format,
        })
    }

    pub fn format(&self) -> EncodeFormat {
        self.format
    }

    /// Fetch and decode a single locator.
    pub async fn load(&self, locator: &str) -> RasterResult<RasterImage> {
        let file = self.loader.fetch(locator).await?;
        let image = decode_payload(file).await?;
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            "Decoded image"
        );
        Ok(image)
    }

    /// Fetch and decode a list of locators concurrently.
    ///
    /// Results come back in input order. Any failure fails the whole
    /// batch; no partial results are returned.
    pub async fn load_many<S: AsRef<str>>(&self, locators: &[S]) -> RasterResult<Loaded> {
        let pending = locators.iter().map(|locator| self.load(locator.as_ref()));
        let images = futures::future::try_join_all(pending).await?;
        Ok(Loaded::from_vec(images))
    }

    /// Decode an in-memory payload.
    ///
    /// The payload is registered as a blob, loaded through the loader, and
    /// revoked again whether or not decoding succeeded.
    pub async fn decode(&self, file: ImageFile) -> RasterResult<RasterImage> {
        let locator = self.registry.register(file).await;
        let result = self.load(&locator).await;
        self.registry.revoke(&locator).await;
        result
    }

    /// Serialize a raster handle at its natural size.
    ///
    /// The default filename is `f.<ext>`.
    pub async fn encode(
        &self,
        image: &RasterImage,
        filename: Option<String>,
    ) -> RasterResult<ImageFile> {
        let format = self.format;
        let image = image.clone();
        let filename = match filename {
            Some(name) => name,
            None => format!("{}.{}", DEFAULT_IMAGE_BASENAME, format.extension()),
        };

        tokio::task::spawn_blocking(move || {
            let mut surface = Surface::new(image.width() as f64, image.height() as f64)?;
            surface.draw_scaled(&image, SourceRegion::full(&image), FlipAxes::default());
            surface.encode(format, Some(&filename))
        })
        .await
        .map_err(|e| RasterError::Internal(format!("Encode task failed: {}", e)))?
    }

    /// Serialize a drawn surface.
    pub async fn encode_surface(
        &self,
        surface: Surface,
        filename: Option<String>,
    ) -> RasterResult<ImageFile> {
        let format = self.format;
        tokio::task::spawn_blocking(move || surface.encode(format, filename.as_deref()))
            .await
            .map_err(|e| RasterError::Internal(format!("Encode task failed: {}", e)))?
    }

    /// Turn a drawn surface back into a raster handle.
    ///
    /// Serializes with the configured encoding and decodes the result, so
    /// the handle reflects exactly what an encoded output would contain.
    pub async fn surface_to_image(&self, surface: Surface) -> RasterResult<RasterImage> {
        let file = self.encode_surface(surface, None).await?;
        self.decode(file).await
    }
}

async fn decode_payload(file: ImageFile) -> RasterResult<RasterImage> {
    tokio::task::spawn_blocking(move || decode_bytes(&file.data))
        .await
        .map_err(|e| RasterError::Internal(format!("Decode task failed: {}", e)))?
}

fn decode_bytes(data: &[u8]) -> RasterResult<RasterImage> {
    let reader = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| RasterError::Decode(format!("Failed to sniff image format: {}", e)))?;
    let dynamic = reader
        .decode()
        .map_err(|e| RasterError::Decode(format!("Failed to decode image: {}", e)))?;
    Ok(RasterImage::from_dynamic(dynamic))
}
