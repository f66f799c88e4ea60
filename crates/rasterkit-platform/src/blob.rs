//! In-memory blob registry
//!
//! Bridges encoded payloads into the locator-based load path: registering a
//! payload mints a `blob:rasterkit/{uuid}` locator the local loader can
//! resolve until the locator is revoked.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use rasterkit_core::constants::BLOB_LOCATOR_PREFIX;
use rasterkit_core::ImageFile;
use tokio::sync::RwLock;
use uuid::Uuid;

static GLOBAL: OnceLock<BlobRegistry> = OnceLock::new();

/// Registry mapping opaque locators to in-memory payloads.
///
/// Thread-safe and async-compatible using tokio's RwLock. Cloning shares the
/// underlying map, so handles can be passed freely between tasks.
#[derive(Clone)]
pub struct BlobRegistry {
    entries: Arc<RwLock<HashMap<String, ImageFile>>>,
}

impl BlobRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The process-wide registry.
    ///
    /// Created on first use; every later call hands back a handle to the
    /// same instance.
    pub fn global() -> BlobRegistry {
        GLOBAL.get_or_init(BlobRegistry::new).clone()
    }

    /// Register a payload and return the locator under which it is reachable
    pub async fn register(&self, file: ImageFile) -> String {
        let locator = format!("{}{}", BLOB_LOCATOR_PREFIX, Uuid::new_v4());
        let size = file.size();

        let mut entries = self.entries.write().await;
        entries.insert(locator.clone(), file);

        tracing::debug!(locator = %locator, size_bytes = size, "Registered blob");

        locator
    }

    /// Look up the payload behind a locator
    pub async fn resolve(&self, locator: &str) -> Option<ImageFile> {
        let entries = self.entries.read().await;
        entries.get(locator).cloned()
    }

    /// Drop a registration; returns whether the locator was live
    pub async fn revoke(&self, locator: &str) -> bool {
        let mut entries = self.entries.write().await;
        let removed = entries.remove(locator).is_some();

        if removed {
            tracing::debug!(locator = %locator, "Revoked blob");
        }

        removed
    }

    /// Number of live registrations
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for BlobRegistry {
    fn default() -> Self {
        Self::new()
    }
}
