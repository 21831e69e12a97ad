use async_trait::async_trait;

use crate::config::SessionConfig;
use crate::database::{
    seed_fixtures, MemoryRecordStore, NewRecord, Record, RecordPatch, RecordStore, StoreError,
};
use crate::resolver::ResolverContext;

/// Memory store holding the six fixture records (Ralph has id 1, Lulu id 6)
pub async fn seeded_store() -> MemoryRecordStore {
    let store = MemoryRecordStore::new();
    seed_fixtures(&store)
        .await
        .expect("seeding a memory store cannot fail");
    store
}

/// Resolver context over `store` presenting `credential` as the session identity
pub fn context<'a>(
    store: &'a dyn RecordStore,
    session: &'a SessionConfig,
    credential: Option<&str>,
) -> ResolverContext<'a> {
    ResolverContext {
        store,
        session,
        credential: credential.map(str::to_string),
    }
}

/// Store that fails the test if any method is reached
pub struct UntouchableStore;

#[async_trait]
impl RecordStore for UntouchableStore {
    async fn get_all(&self) -> Result<Vec<Record>, StoreError> {
        panic!("store must not be called: get_all")
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, StoreError> {
        panic!("store must not be called: get_by_id({})", id)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Record>, StoreError> {
        panic!("store must not be called: get_by_name({})", name)
    }

    async fn create(&self, new: NewRecord) -> Result<Record, StoreError> {
        panic!("store must not be called: create({:?})", new)
    }

    async fn update(&self, id: i64, _patch: RecordPatch) -> Result<Record, StoreError> {
        panic!("store must not be called: update({})", id)
    }

    async fn delete(&self, id: i64) -> Result<Option<Record>, StoreError> {
        panic!("store must not be called: delete({})", id)
    }
}
