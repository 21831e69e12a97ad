use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::models::{NewRecord, Record, RecordPatch};
use super::store::{RecordStore, StoreError};

/// Process-local record store for development and tests.
///
/// Records live in a `BTreeMap` keyed by id, so iteration order is
/// insertion order. Ids are never reused after a delete.
pub struct MemoryRecordStore {
    state: RwLock<MemoryState>,
}

struct MemoryState {
    records: BTreeMap<i64, Record>,
    next_id: i64,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get_all(&self) -> Result<Vec<Record>, StoreError> {
        let state = self.state.read().await;
        Ok(state.records.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, StoreError> {
        let state = self.state.read().await;
        Ok(state.records.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Record>, StoreError> {
        let state = self.state.read().await;
        Ok(state.records.values().find(|r| r.name == name).cloned())
    }

    async fn create(&self, new: NewRecord) -> Result<Record, StoreError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let record = new.into_record(id);
        state.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, patch: RecordPatch) -> Result<Record, StoreError> {
        let mut state = self.state.write().await;
        let record = state.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<Option<Record>, StoreError> {
        let mut state = self.state.write().await;
        Ok(state.records.remove(&id))
    }
}
