use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::errors::Result;

use super::{BlobKind, StorageBackend};

/// Keeps blobs in memory. Useful for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<BlobKind, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw contents of a blob, if it was ever written.
    pub fn blob(&self, kind: BlobKind) -> Option<String> {
        self.lock().get(&kind).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<BlobKind, String>> {
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryStorage {
    fn read_blob(&self, kind: BlobKind) -> Result<Option<String>> {
        Ok(self.blob(kind))
    }

    fn write_blob(&self, kind: BlobKind, data: &str) -> Result<()> {
        self.lock().insert(kind, data.to_string());
        Ok(())
    }
}
