//! Acquisition façade
//!
//! One call covers the whole intake path: prompt the picker, decode what
//! it hands back, and report cardinality through [`Loaded`].

use std::sync::Arc;

use rasterkit_core::RasterResult;
use rasterkit_platform::FilePicker;

use crate::codec::ImageCodec;
use crate::raster::Loaded;

/// Picks files from a source and decodes them in one step.
#[derive(Clone)]
pub struct ImageAcquirer {
    picker: Arc<dyn FilePicker>,
    codec: ImageCodec,
}

impl ImageAcquirer {
    pub fn new(picker: Arc<dyn FilePicker>, codec: ImageCodec) -> Self {
        ImageAcquirer { picker, codec }
    }

    /// Prompt the picker and decode everything it returns.
    ///
    /// Files decode concurrently and come back in pick order. One bad
    /// file fails the whole acquisition with no partial results. A
    /// cancelled pick comes back as an empty batch.
    pub async fn request_image(&self, multiple: bool) -> RasterResult<Loaded> {
        let files = self.picker.pick(multiple).await?;
        let count = files.len();

        let pending = files.into_iter().map(|file| self.codec.decode(file));
        let images = futures::future::try_join_all(pending).await?;

        tracing::info!(count, multiple, "Acquired images");
        Ok(Loaded::from_vec(images))
    }
}
