//! Prefix-to-region directory, loaded once at startup from a JSON file of
//! `{ "prefijo": "..", "estado": ".." }` records and read-only afterwards.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Returned by [`RegionDirectory::lookup`] when no entry matches. A miss
/// is a normal outcome, not an error.
pub const REGION_NOT_FOUND: &str = "Estado no encontrado";

/// Fatal at startup only; per-frame processing never produces this.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read region dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("region dataset {path} is malformed: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One dataset record. Field names follow the on-disk dataset.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RegionEntry {
    #[serde(rename = "prefijo")]
    pub prefix: String,
    #[serde(rename = "estado")]
    pub region: String,
}

/// Ordered, immutable prefix-to-region table.
#[derive(Debug, Clone)]
pub struct RegionDirectory {
    entries: Vec<RegionEntry>,
}

impl RegionDirectory {
    /// Load the dataset from `path`. Missing, unreadable, or malformed
    /// content is a [`DataLoadError`]; callers treat it as fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let entries: Vec<RegionEntry> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                DataLoadError::Parse {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        Ok(Self { entries })
    }

    /// Build a directory from already-parsed entries (fixtures, tests).
    pub fn from_entries(entries: Vec<RegionEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-match linear search in dataset order. Returns the
    /// [`REGION_NOT_FOUND`] sentinel on a miss.
    pub fn lookup(&self, prefix: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.prefix == prefix)
            .map(|e| e.region.as_str())
            .unwrap_or(REGION_NOT_FOUND)
    }
}
