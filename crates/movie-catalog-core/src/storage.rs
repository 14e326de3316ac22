use anyhow::Result;
use movie_catalog_models::MovieId;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable key-value slot for the wishlist: one file holding a JSON array of
/// movie IDs. Pure I/O, no policy.
pub struct WishlistStorage {
    path: PathBuf,
}

impl WishlistStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the persisted ID sequence. A missing file or undecodable content
    /// both mean "no wishlist yet"; neither is an error to the caller.
    pub fn load(&self) -> Vec<MovieId> {
        if !self.path.exists() {
            debug!("wishlist file does not exist, starting empty");
            return Vec::new();
        }

        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<Vec<MovieId>>(&content) {
                Ok(ids) => {
                    debug!(count = ids.len(), "loaded wishlist");
                    ids
                }
                Err(e) => {
                    warn!(
                        "wishlist file {:?} is not a JSON array of integers: {}. Starting with an empty wishlist.",
                        self.path, e
                    );
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("failed to read wishlist file {:?}: {}. Starting with an empty wishlist.", self.path, e);
                Vec::new()
            }
        }
    }

    /// Persist the full ID sequence.
    pub fn save(&self, ids: &[MovieId]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let encoded = serde_json::to_string(ids)?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, encoded)?;
        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
