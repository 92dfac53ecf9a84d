use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha2::{Digest, Sha256};

use super::loader::{parse_csv, read_source};
use super::model::CatalogDataset;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// DatasetCache – parse each catalog file once per content version
// ---------------------------------------------------------------------------

struct CacheEntry {
    fingerprint: String,
    dataset: Arc<CatalogDataset>,
}

/// Hit / miss counters, mostly for logs and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Explicit load cache keyed by (path, SHA-256 of the file contents).
///
/// The file is always read; it is only re-parsed when its fingerprint differs
/// from the cached one, so an edited file is picked up on the next load.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
    max_file_bytes: Option<u64>,
    stats: CacheStats,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse files larger than `limit` bytes with [`LoadError::TooLarge`].
    pub fn with_max_file_bytes(limit: Option<u64>) -> Self {
        DatasetCache {
            max_file_bytes: limit,
            ..Self::default()
        }
    }

    /// Load `path`, reusing the parsed catalog when the contents are unchanged.
    pub fn load(&mut self, path: &Path) -> Result<Arc<CatalogDataset>, LoadError> {
        let key = cache_key(path);
        let bytes = read_source(path, self.max_file_bytes)?;
        let fingerprint = fingerprint(&bytes);

        if let Some(entry) = self.entries.get(&key) {
            if entry.fingerprint == fingerprint {
                self.stats.hits += 1;
                log::debug!("Catalog cache hit for {}", key.display());
                return Ok(Arc::clone(&entry.dataset));
            }
            log::debug!("Catalog {} changed on disk, re-parsing", key.display());
        }

        self.stats.misses += 1;
        let dataset = Arc::new(parse_csv(&bytes)?);
        self.entries.insert(
            key,
            CacheEntry {
                fingerprint,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Drop the cached entry for `path`. Returns whether one existed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(&cache_key(path)).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// Hex SHA-256 of the file contents.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn cache_key(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
