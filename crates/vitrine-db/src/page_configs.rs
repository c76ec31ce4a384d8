//! Database operations for the `page_configs` table.
//!
//! Both slots of a business live on one row. A draft save rewrites the
//! `draft` column only; a publish rewrites `draft` and `published` in one
//! upsert, so readers see both old or both new. Each slot carries the
//! schema version it was written with.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use vitrine_core::{PageConfig, Slot, SCHEMA_VERSION};

use crate::DbError;

const FOREIGN_KEY_VIOLATION: &str = "23503";

/// A row from the `page_configs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PageConfigRow {
    pub business_id: i64,
    pub draft: Value,
    pub draft_schema_version: i32,
    pub published: Option<Value>,
    pub published_schema_version: Option<i32>,
    pub draft_updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Get both slots for a business, if a config was ever saved.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn get_page_config(
    pool: &PgPool,
    business_id: i64,
) -> Result<Option<PageConfigRow>, DbError> {
    Ok(sqlx::query_as::<_, PageConfigRow>(
        "SELECT business_id, draft, draft_schema_version, published, published_schema_version, \
                draft_updated_at, published_at \
         FROM page_configs WHERE business_id = $1",
    )
    .bind(business_id)
    .fetch_optional(pool)
    .await?)
}

/// Raw JSON stored in one slot. `None` when the row is missing or, for
/// `published`, when the page was never published.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn load_slot(
    pool: &PgPool,
    business_id: i64,
    slot: Slot,
) -> Result<Option<Value>, DbError> {
    let sql = match slot {
        Slot::Draft => "SELECT draft FROM page_configs WHERE business_id = $1",
        Slot::Published => "SELECT published FROM page_configs WHERE business_id = $1",
    };
    let stored = sqlx::query_scalar::<_, Option<Value>>(sql)
        .bind(business_id)
        .fetch_optional(pool)
        .await?;
    Ok(stored.flatten())
}

/// Insert or overwrite the draft slot. `published` is left as it was.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the business does not exist, or
/// [`DbError`] on serialization or query failure.
pub async fn upsert_draft(
    pool: &PgPool,
    business_id: i64,
    config: &PageConfig,
) -> Result<(), DbError> {
    let draft = serde_json::to_value(config)?;
    sqlx::query(
        "INSERT INTO page_configs (business_id, draft, draft_schema_version, draft_updated_at) \
         VALUES ($1, $2, $3, NOW()) \
         ON CONFLICT (business_id) DO UPDATE SET \
           draft                = EXCLUDED.draft, \
           draft_schema_version = EXCLUDED.draft_schema_version, \
           draft_updated_at     = NOW()",
    )
    .bind(business_id)
    .bind(&draft)
    .bind(SCHEMA_VERSION)
    .execute(pool)
    .await
    .map_err(map_missing_business)?;
    Ok(())
}

/// Insert or overwrite both slots with the same config in a single statement.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the business does not exist, or
/// [`DbError`] on serialization or query failure.
pub async fn upsert_draft_and_published(
    pool: &PgPool,
    business_id: i64,
    config: &PageConfig,
) -> Result<(), DbError> {
    let snapshot = serde_json::to_value(config)?;
    sqlx::query(
        "INSERT INTO page_configs \
           (business_id, draft, draft_schema_version, published, published_schema_version, \
            draft_updated_at, published_at) \
         VALUES ($1, $2, $3, $2, $3, NOW(), NOW()) \
         ON CONFLICT (business_id) DO UPDATE SET \
           draft                    = EXCLUDED.draft, \
           draft_schema_version     = EXCLUDED.draft_schema_version, \
           published                = EXCLUDED.published, \
           published_schema_version = EXCLUDED.published_schema_version, \
           draft_updated_at         = NOW(), \
           published_at             = NOW()",
    )
    .bind(business_id)
    .bind(&snapshot)
    .bind(SCHEMA_VERSION)
    .execute(pool)
    .await
    .map_err(map_missing_business)?;
    Ok(())
}

fn map_missing_business(e: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return DbError::NotFound;
        }
    }
    DbError::Sqlx(e)
}
