//! Catalog cache keyed by source identity.
//!
//! Loading parses the whole CSV, so callers that serve many queries keep
//! catalogs here. A source is identified by its canonical path plus a
//! SHA-256 digest of its contents: editing the file yields a new identity and
//! the next `get_or_load` reparses it. Invalidation beyond that is explicit
//! and belongs to the caller (`invalidate`, `clear`).

use crate::error::{DataSourceError, Result};
use crate::types::Catalog;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

type Fingerprint = [u8; 32];

struct CacheEntry {
    fingerprint: Fingerprint,
    catalog: Arc<Catalog>,
}

/// Shared map from source to loaded catalog.
///
/// The lock is held for the duration of a load, so concurrent callers asking
/// for the same source trigger at most one parse and all get the same `Arc`.
#[derive(Default)]
pub struct CatalogCache {
    entries: Mutex<HashMap<PathBuf, CacheEntry>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog for `path`, loading it if the source is new
    /// or its contents changed since the last load.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<Catalog>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DataSourceError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataSourceError::IoError(e),
        })?;
        let key = source_key(path)?;
        let fingerprint: Fingerprint = Sha256::digest(&bytes).into();

        let mut entries = self.lock();
        if let Some(entry) = entries.get(&key) {
            if entry.fingerprint == fingerprint {
                debug!("Catalog cache hit for {}", key.display());
                return Ok(Arc::clone(&entry.catalog));
            }
            info!("Source {} changed on disk, reloading", key.display());
        }

        let catalog = Arc::new(Catalog::load_from_reader(bytes.as_slice())?);
        info!(
            "Cached catalog for {} ({} records)",
            key.display(),
            catalog.len()
        );
        entries.insert(
            key,
            CacheEntry {
                fingerprint,
                catalog: Arc::clone(&catalog),
            },
        );
        Ok(catalog)
    }

    /// Drop the entry for `path`. Returns whether anything was cached.
    ///
    /// Works after the file itself is gone, as long as its directory exists.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        match source_key(path.as_ref()) {
            Ok(key) => self.lock().remove(&key).is_some(),
            Err(e) => {
                debug!("Cannot resolve {}: {}", path.as_ref().display(), e);
                false
            }
        }
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic inside a load leaves the map itself consistent, so keep using it
    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Canonical form of `path`. A missing file resolves through its parent
/// directory, so it maps to the same key it had while it existed.
fn source_key(path: &Path) -> io::Result<PathBuf> {
    if let Ok(key) = path.canonicalize() {
        return Ok(key);
    }

    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    Ok(parent.canonicalize()?.join(file_name))
}
