use async_trait::async_trait;
use thiserror::Error;

use super::models::{NewRecord, Record, RecordPatch};

/// Errors surfaced by a record store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Record not found: {0}")]
    NotFound(i64),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// CRUD primitives over records.
///
/// The store is the only component that mutates record state and is
/// responsible for serializing conflicting writes. Lookups by name return
/// the record with the lowest id when several share a name.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All live records in ascending id order.
    async fn get_all(&self) -> Result<Vec<Record>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, StoreError>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Record>, StoreError>;

    /// Insert a record, assigning a fresh id.
    async fn create(&self, new: NewRecord) -> Result<Record, StoreError>;

    /// Apply a partial update. Fails with `NotFound` when the id is absent.
    async fn update(&self, id: i64, patch: RecordPatch) -> Result<Record, StoreError>;

    /// Remove a record, returning it, or `None` when the id is absent.
    async fn delete(&self, id: i64) -> Result<Option<Record>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
