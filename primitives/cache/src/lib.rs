#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Descriptor Cache: durable storage for generated SMD JSON.
//!
//! Building a service map can be expensive, so its JSON text is persisted at
//! a caller-supplied location and read back on later runs. None of the
//! operations fail with an error: a missing or unreadable artifact is
//! reported as `None`, and writes and deletions report success as a `bool`.
//! The underlying I/O error is logged.
//!
//! At most one writer per location is assumed; no locking is performed.
//!
//! ```no_run
//! use cache::DescriptorCache;
//! use ir::ServiceMap;
//!
//! let cache = DescriptorCache::new();
//! let smd = match cache.get("/var/cache/app/smd.json") {
//!     Some(text) => text,
//!     None => {
//!         let map = ServiceMap::new();
//!         cache.save("/var/cache/app/smd.json", &map);
//!         map.to_json_text()
//!     }
//! };
//! println!("{}", smd);
//! ```

use std::io::{ErrorKind, Write};
use std::path::Path;

use ir::ServiceMap;
use tempfile::NamedTempFile;

const MODULE: &str = "cache";

/// Filesystem-backed cache of serialized service maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptorCache {
    atomic: bool,
}

impl DescriptorCache {
    /// Cache that writes artifacts in place.
    pub fn new() -> Self { Self { atomic: false } }

    /// Cache that writes to a temporary file beside the artifact and renames
    /// it into place, so readers never observe a partial write.
    pub fn atomic() -> Self { Self { atomic: true } }

    /// Whether writes go through a temporary file and rename.
    pub fn is_atomic(&self) -> bool { self.atomic }

    /// Cached JSON text at `location`, or `None` when there is no readable
    /// artifact there.
    pub fn get(&self, location: impl AsRef<Path>) -> Option<String> {
        let location = location.as_ref();
        match std::fs::read_to_string(location) {
            Ok(text) => {
                logging::trace(MODULE, &format!("hit {} ({} bytes)", location.display(), text.len()));
                Some(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                logging::trace(MODULE, &format!("miss {}", location.display()));
                None
            }
            Err(e) => {
                logging::warn(MODULE, &format!("failed to read {}: {}", location.display(), e));
                None
            }
        }
    }

    /// Whether an artifact exists at `location`.
    pub fn exists(&self, location: impl AsRef<Path>) -> bool { location.as_ref().is_file() }

    /// Persist `map.to_json_text()` at `location`, replacing any previous
    /// artifact. Returns `false` if the write could not be completed.
    pub fn save(&self, location: impl AsRef<Path>, map: &ServiceMap) -> bool {
        self.save_text(location, &map.to_json_text())
    }

    /// Persist already-serialized SMD text at `location`.
    ///
    /// The parent directory must already exist; it is never created.
    pub fn save_text(&self, location: impl AsRef<Path>, text: &str) -> bool {
        let location = location.as_ref();
        let dir = match location.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.is_dir() {
            logging::warn(
                MODULE,
                &format!("cannot save {}: {} is not a directory", location.display(), dir.display()),
            );
            return false;
        }

        let written = if self.atomic {
            write_atomic(dir, location, text)
        } else {
            std::fs::write(location, text)
        };

        match written {
            Ok(()) => {
                logging::trace(MODULE, &format!("saved {} ({} bytes)", location.display(), text.len()));
                true
            }
            Err(e) => {
                logging::warn(MODULE, &format!("failed to save {}: {}", location.display(), e));
                false
            }
        }
    }

    /// Remove the artifact at `location`.
    ///
    /// Returns `true` only if an artifact existed and was removed.
    pub fn delete(&self, location: impl AsRef<Path>) -> bool {
        let location = location.as_ref();
        if !location.is_file() {
            logging::trace(MODULE, &format!("nothing to delete at {}", location.display()));
            return false;
        }
        match std::fs::remove_file(location) {
            Ok(()) => {
                logging::trace(MODULE, &format!("deleted {}", location.display()));
                true
            }
            Err(e) => {
                logging::warn(MODULE, &format!("failed to delete {}: {}", location.display(), e));
                false
            }
        }
    }
}

fn write_atomic(dir: &Path, location: &Path, text: &str) -> std::io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(location).map_err(|e| e.error)?;
    Ok(())
}
