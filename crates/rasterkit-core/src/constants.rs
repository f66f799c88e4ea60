//! Constants shared across rasterkit crates.

/// Default basename for files encoded straight from a drawing surface.
pub const DEFAULT_SURFACE_BASENAME: &str = "i";

/// Default basename for files encoded from a decoded image.
pub const DEFAULT_IMAGE_BASENAME: &str = "f";

/// Smallest dimension a size-constrained recompression may target.
/// Scale factors below one pixel clamp here instead of producing an
/// empty surface.
pub const MIN_TARGET_DIMENSION: u32 = 1;

/// Locator prefix for payloads registered with the in-memory blob registry.
pub const BLOB_LOCATOR_PREFIX: &str = "blob:rasterkit/";
