pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;
pub mod store;

pub use manager::DatabaseManager;
pub use memory::MemoryRecordStore;
pub use models::{NewRecord, Record, RecordPatch};
pub use repository::PgRecordStore;
pub use store::{RecordStore, StoreError};

use tracing::info;

/// Insert the fixture records into an empty store. A store that already
/// holds records is left alone.
pub async fn seed_fixtures(store: &dyn RecordStore) -> Result<usize, StoreError> {
    if !store.get_all().await?.is_empty() {
        return Ok(0);
    }

    let fixtures = models::fixture_records();
    let count = fixtures.len();
    for record in fixtures {
        store.create(record).await?;
    }

    info!("Seeded {} fixture records", count);
    Ok(count)
}
