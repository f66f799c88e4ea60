//! Rasterkit Processing Library
//!
//! Client-side raster transformations: decode/encode bridging, geometric
//! transforms (resize, crop, flip), size-constrained compression, and image
//! acquisition through a file picker.
//!
//! Decoded images are opaque handles; pixel access happens only through
//! drawing surfaces inside this crate. CPU-bound codec work runs on blocking
//! tasks so the async runtime stays responsive.

pub mod acquire;
pub mod codec;
pub mod compress;
pub mod raster;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use acquire::ImageAcquirer;
pub use codec::ImageCodec;
pub use compress::Compressor;
pub use raster::{Loaded, RasterImage};
pub use surface::{SourceRegion, Surface};
pub use transform::{CropRegion, FlipAxes, ResizeSpec, Transformer};
