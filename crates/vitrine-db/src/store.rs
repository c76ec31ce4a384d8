use serde_json::Value;
use sqlx::PgPool;
use vitrine_core::{Business, BusinessDirectory, PageConfig, Slot, SlotStore};

use crate::{businesses, page_configs, DbError};

/// Postgres-backed page config and business storage.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl SlotStore for PgStore {
    type Error = DbError;

    async fn load_slot(&self, business_id: i64, slot: Slot) -> Result<Option<Value>, DbError> {
        page_configs::load_slot(&self.pool, business_id, slot).await
    }

    async fn write_draft(&self, business_id: i64, config: &PageConfig) -> Result<(), DbError> {
        page_configs::upsert_draft(&self.pool, business_id, config).await
    }

    async fn write_draft_and_published(
        &self,
        business_id: i64,
        config: &PageConfig,
    ) -> Result<(), DbError> {
        page_configs::upsert_draft_and_published(&self.pool, business_id, config).await
    }
}

impl BusinessDirectory for PgStore {
    type Error = DbError;

    async fn get_business(&self, business_id: i64) -> Result<Option<Business>, DbError> {
        let row = businesses::get_business(&self.pool, business_id).await?;
        Ok(row.map(businesses::BusinessRow::into_business))
    }
}
