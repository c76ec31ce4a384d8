//! Live integration tests for vitrine-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/vitrine-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use serde_json::json;
use vitrine_core::{
    default_config, BackgroundType, BusinessDirectory, Hours, PageConfigStore, Slot, SlotStore,
    StoreError, TemplateKey,
};
use vitrine_db::{get_page_config, load_slot, upsert_draft, DbError, PgStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a minimal business row and return its generated `id`.
async fn insert_test_business(pool: &sqlx::PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO businesses (name, category, phone, hours, services) \
         VALUES ($1, 'restaurant', '04 78 00 00 00', $2, 'Plats, Desserts') RETURNING id",
    )
    .bind(name)
    .bind(json!({"monday": {"open": "09:00", "close": "18:00"}}))
    .fetch_one(pool)
    .await
    .unwrap_or_else(|e| panic!("insert_test_business failed for '{name}': {e}"))
}

fn store(pool: &sqlx::PgPool) -> PageConfigStore<PgStore> {
    PageConfigStore::new(PgStore::new(pool.clone()), TemplateKey::SidebarRight)
}

// ---------------------------------------------------------------------------
// Section 1: Slots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn unsaved_business_reads_default_from_both_slots(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let store = store(&pool);

    let draft = store.read_draft(id).await.expect("read draft");
    let published = store.read_published(id).await.expect("read published");

    assert_eq!(draft, default_config(TemplateKey::SidebarRight));
    assert_eq!(published, draft);
    assert!(get_page_config(&pool, id).await.expect("row").is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn draft_save_leaves_published_null(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let store = store(&pool);
    let mut config = default_config(TemplateKey::HeroFull);
    config.hero.title = Some("Le Délice".to_string());

    store.save_draft(id, &config).await.expect("save draft");

    let row = get_page_config(&pool, id)
        .await
        .expect("query")
        .expect("row exists");
    assert_eq!(row.draft_schema_version, vitrine_core::SCHEMA_VERSION);
    assert!(row.published.is_none());
    assert!(row.published_schema_version.is_none());
    assert!(row.published_at.is_none());
    assert_eq!(store.read_draft(id).await.expect("draft"), config);
}

#[sqlx::test(migrations = "../../migrations")]
async fn publish_writes_both_slots(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let store = store(&pool);
    let mut config = default_config(TemplateKey::SidebarLeft);
    config.hero.background_type = BackgroundType::Color;

    store.publish(id, &config).await.expect("publish");

    assert_eq!(store.read_published(id).await.expect("published"), config);
    assert_eq!(store.read_draft(id).await.expect("draft"), config);
    let row = get_page_config(&pool, id).await.expect("query").expect("row");
    assert!(row.published_at.is_some());
    assert_eq!(row.published_schema_version, Some(vitrine_core::SCHEMA_VERSION));
}

#[sqlx::test(migrations = "../../migrations")]
async fn draft_save_keeps_published_schema_version(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let published = serde_json::to_value(default_config(TemplateKey::HeroFull)).expect("encode");
    sqlx::query(
        "INSERT INTO page_configs \
           (business_id, draft, draft_schema_version, published, published_schema_version, published_at) \
         VALUES ($1, $2, 0, $2, 0, NOW())",
    )
    .bind(id)
    .bind(&published)
    .execute(&pool)
    .await
    .expect("insert old-version row");

    store(&pool)
        .save_draft(id, &default_config(TemplateKey::SidebarLeft))
        .await
        .expect("save draft");

    let row = get_page_config(&pool, id).await.expect("query").expect("row");
    assert_eq!(row.draft_schema_version, vitrine_core::SCHEMA_VERSION);
    assert_eq!(row.published_schema_version, Some(0));
    assert_eq!(row.published, Some(published));
}

#[sqlx::test(migrations = "../../migrations")]
async fn later_draft_save_does_not_touch_published(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let store = store(&pool);
    let published = default_config(TemplateKey::SidebarLeft);
    store.publish(id, &published).await.expect("publish");

    let mut edited = published.clone();
    edited.theme.primary_color = "#ff0000".to_string();
    store.save_draft(id, &edited).await.expect("save draft");

    assert_eq!(store.read_published(id).await.expect("published"), published);
    assert_eq!(store.read_draft(id).await.expect("draft"), edited);
}

#[sqlx::test(migrations = "../../migrations")]
async fn invalid_publish_keeps_previous_published(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let store = store(&pool);
    let published = default_config(TemplateKey::HeroFull);
    store.publish(id, &published).await.expect("publish");

    let mut broken = published.clone();
    broken.theme.primary_color = "not-a-color".to_string();
    let err = store.publish(id, &broken).await.expect_err("must reject");

    assert!(matches!(err, StoreError::Invalid(_)));
    assert_eq!(store.read_published(id).await.expect("published"), published);
}

#[sqlx::test(migrations = "../../migrations")]
async fn write_for_unknown_business_is_not_found(pool: sqlx::PgPool) {
    let config = default_config(TemplateKey::HeroFull);
    let err = upsert_draft(&pool, 999_999, &config)
        .await
        .expect_err("foreign key must reject");
    assert!(matches!(err, DbError::NotFound), "got {err:?}");
}

#[sqlx::test(migrations = "../../migrations")]
async fn undecodable_snapshot_reads_as_default(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    sqlx::query(
        "INSERT INTO page_configs (business_id, draft, draft_schema_version) VALUES ($1, $2, 0)",
    )
    .bind(id)
    .bind(json!({"templateKey": "carousel"}))
    .execute(&pool)
    .await
    .expect("insert drifted row");

    let raw = load_slot(&pool, id, Slot::Draft).await.expect("load");
    assert_eq!(raw, Some(json!({"templateKey": "carousel"})));

    let draft = store(&pool).read_draft(id).await.expect("draft");
    assert_eq!(draft, default_config(TemplateKey::SidebarRight));
}

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_stored_template_keeps_content(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let mut config = default_config(TemplateKey::HeroFull);
    config.hero.title = Some("Bienvenue".to_string());
    let mut raw = serde_json::to_value(&config).expect("encode");
    raw["templateKey"] = json!("carousel");
    sqlx::query(
        "INSERT INTO page_configs (business_id, draft, draft_schema_version) VALUES ($1, $2, 0)",
    )
    .bind(id)
    .bind(&raw)
    .execute(&pool)
    .await
    .expect("insert drifted row");

    let stored = store(&pool)
        .read_stored(id, Slot::Draft)
        .await
        .expect("draft");
    assert_eq!(stored.template_key, "carousel");
    assert_eq!(stored.config.template_key, TemplateKey::SidebarRight);
    assert_eq!(stored.config.hero.title.as_deref(), Some("Bienvenue"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_business_removes_its_slots(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    store(&pool)
        .publish(id, &default_config(TemplateKey::HeroFull))
        .await
        .expect("publish");

    sqlx::query("DELETE FROM businesses WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .expect("delete business");

    assert!(get_page_config(&pool, id).await.expect("query").is_none());
}

// ---------------------------------------------------------------------------
// Section 2: Businesses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn business_lookup_maps_row(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let backend = PgStore::new(pool.clone());

    let business = backend
        .get_business(id)
        .await
        .expect("query")
        .expect("business exists");

    assert_eq!(business.name, "Le Délice");
    assert_eq!(business.service_list(), vec!["Plats", "Desserts"]);
    assert!(matches!(business.hours, Some(Hours::Weekly(_))));
    assert!(business.images.is_empty());

    assert!(backend.get_business(id + 1).await.expect("query").is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn missing_published_slot_loads_as_none(pool: sqlx::PgPool) {
    let id = insert_test_business(&pool, "Le Délice").await;
    let backend = PgStore::new(pool.clone());
    backend
        .write_draft(id, &default_config(TemplateKey::HeroFull))
        .await
        .expect("write draft");

    assert!(backend
        .load_slot(id, Slot::Published)
        .await
        .expect("load")
        .is_none());
    assert!(backend
        .load_slot(id, Slot::Draft)
        .await
        .expect("load")
        .is_some());
}
