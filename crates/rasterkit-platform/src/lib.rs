//! Rasterkit Platform Library
//!
//! This crate provides the collaborator seams between the processing pipeline
//! and the host platform: payload fetching, in-memory blob registration, and
//! file selection. It includes the `ImageLoader` and `FilePicker` traits and
//! local implementations of both.
//!
//! # Locator format
//!
//! Loaders accept two locator shapes:
//!
//! - **Blob locators**: `blob:rasterkit/{uuid}`, minted by
//!   [`BlobRegistry::register`] and reachable until revoked.
//! - **Paths**: anything else is treated as a filesystem path.

pub mod blob;
pub mod local;
pub(crate) mod mime;
pub mod picker;
pub mod traits;

// Re-export commonly used types
pub use blob::BlobRegistry;
pub use local::LocalLoader;
pub use picker::DirectoryPicker;
pub use traits::{FilePicker, ImageLoader, PlatformError, PlatformResult};
