//! In-memory station record store.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::{StationId, StationRecord};

use super::RecordStore;
use super::error::RecordStoreError;

/// Thread-safe station id → record lookup.
#[derive(Default)]
pub struct MemoryRecordStore {
    inner: RwLock<HashMap<StationId, StationRecord>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of records in the store.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    async fn lookup(&self, id: StationId) -> Result<Option<StationRecord>, RecordStoreError> {
        let guard = self.inner.read().await;
        Ok(guard.get(&id).cloned())
    }

    async fn insert(&self, record: StationRecord) -> Result<(), RecordStoreError> {
        let mut guard = self.inner.write().await;
        guard.insert(record.id, record);
        Ok(())
    }
}
