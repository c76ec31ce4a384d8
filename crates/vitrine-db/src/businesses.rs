//! Read-only access to the `businesses` table.

use serde_json::Value;
use sqlx::PgPool;
use vitrine_core::{Business, Hours};

use crate::DbError;

/// A row from the `businesses` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BusinessRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub hours: Option<Value>,
    pub services: Option<String>,
    pub images: Vec<String>,
    pub hero_image: Option<String>,
}

impl BusinessRow {
    /// Convert to the domain record. Hours in an unrecognized shape are
    /// dropped so the page renders without them.
    #[must_use]
    pub fn into_business(self) -> Business {
        let hours = self.hours.and_then(|raw| {
            serde_json::from_value::<Hours>(raw)
                .map_err(|e| {
                    tracing::warn!(business_id = self.id, error = %e, "ignoring malformed business hours");
                })
                .ok()
        });

        Business {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            address: self.address,
            phone: self.phone,
            email: self.email,
            website: self.website,
            facebook: self.facebook,
            instagram: self.instagram,
            tiktok: self.tiktok,
            youtube: self.youtube,
            hours,
            services: self.services,
            images: self.images,
            hero_image: self.hero_image,
        }
    }
}

/// Get one business by id.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn get_business(pool: &PgPool, business_id: i64) -> Result<Option<BusinessRow>, DbError> {
    Ok(sqlx::query_as::<_, BusinessRow>(
        "SELECT id, name, category, description, address, phone, email, website, \
                facebook, instagram, tiktok, youtube, hours, services, images, hero_image \
         FROM businesses WHERE id = $1",
    )
    .bind(business_id)
    .fetch_optional(pool)
    .await?)
}
