use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{NewRecord, Record, RecordPatch};
use super::store::{RecordStore, StoreError};

const RECORD_COLUMNS: &str = "id, name, category, accessory";

/// PostgreSQL-backed record store over the `records` table
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn get_all(&self) -> Result<Vec<Record>, StoreError> {
        let sql = format!("SELECT {} FROM records ORDER BY id", RECORD_COLUMNS);
        let rows = sqlx::query_as::<_, Record>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, StoreError> {
        let sql = format!("SELECT {} FROM records WHERE id = $1", RECORD_COLUMNS);
        let row = sqlx::query_as::<_, Record>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Record>, StoreError> {
        let sql = format!(
            "SELECT {} FROM records WHERE name = $1 ORDER BY id LIMIT 1",
            RECORD_COLUMNS
        );
        let row = sqlx::query_as::<_, Record>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, new: NewRecord) -> Result<Record, StoreError> {
        let sql = format!(
            "INSERT INTO records (name, category, accessory) VALUES ($1, $2, $3) RETURNING {}",
            RECORD_COLUMNS
        );
        let row = sqlx::query_as::<_, Record>(&sql)
            .bind(&new.name)
            .bind(&new.category)
            .bind(&new.accessory)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, patch: RecordPatch) -> Result<Record, StoreError> {
        // COALESCE keeps the stored value for every field the patch omits
        let sql = format!(
            r#"
            UPDATE records
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                accessory = COALESCE($4, accessory)
            WHERE id = $1
            RETURNING {}
            "#,
            RECORD_COLUMNS
        );
        sqlx::query_as::<_, Record>(&sql)
            .bind(id)
            .bind(patch.name)
            .bind(patch.category)
            .bind(patch.accessory)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<Option<Record>, StoreError> {
        let sql = format!("DELETE FROM records WHERE id = $1 RETURNING {}", RECORD_COLUMNS);
        let row = sqlx::query_as::<_, Record>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
