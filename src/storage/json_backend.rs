use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::Config;
use crate::errors::Result;
use crate::utils::persistence::{app_data_dir, ensure_dir, write_atomic};

use super::{BlobKind, StorageBackend};

const BLOB_EXTENSION: &str = "json";

/// Stores each blob as `<root>/<name>.json`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| app_data_dir().join("data"));
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Uses the configured data directory, falling back to the default location.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.data_dir.clone())
    }

    pub fn blob_path(&self, kind: BlobKind) -> PathBuf {
        self.root.join(format!("{}.{}", kind.name(), BLOB_EXTENSION))
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }
}

impl StorageBackend for JsonStorage {
    fn read_blob(&self, kind: BlobKind) -> Result<Option<String>> {
        let path = self.blob_path(kind);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_blob(&self, kind: BlobKind, data: &str) -> Result<()> {
        let path = self.blob_path(kind);
        write_atomic(&path, data)?;
        tracing::debug!(blob = kind.name(), path = %path.display(), "blob written");
        Ok(())
    }
}
