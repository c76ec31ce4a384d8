//! Draft/published persistence.
//!
//! Backends implement [`SlotStore`] and only move JSON in and out of the two
//! slots. [`PageConfigStore`] layers the rules on top: validate before every
//! write, never touch `published` from a draft save, and never fail a read:
//! a missing slot reads as the default config, a snapshot that no longer
//! validates is served as stored when it still decodes, and only a snapshot
//! that cannot be decoded at all is replaced by the default.

mod memory;

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::business::Business;
use crate::defaults::default_config;
use crate::schema::PageConfig;
use crate::template::TemplateKey;
use crate::validate::{validate, validate_value, ValidationErrors};

pub use memory::{MemoryStore, MemoryStoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    #[default]
    Draft,
    Published,
}

impl Slot {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Draft => "draft",
            Slot::Published => "published",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A snapshot as read back from a slot.
///
/// `template_key` is the key exactly as stored. It differs from
/// `config.template_key` only when the stored key is no longer recognized: the
/// config then carries [`TemplateKey::FALLBACK`] and renderers dispatch on the
/// stored key, which reports the drift where the layout is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredConfig {
    pub template_key: String,
    pub config: PageConfig,
}

impl From<PageConfig> for StoredConfig {
    fn from(config: PageConfig) -> Self {
        Self {
            template_key: config.template_key.as_str().to_string(),
            config,
        }
    }
}

/// Raw slot storage for page configs, keyed by business id.
pub trait SlotStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Stored JSON for one slot, or `None` if that slot was never written.
    fn load_slot(
        &self,
        business_id: i64,
        slot: Slot,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// Overwrite the draft slot only.
    fn write_draft(
        &self,
        business_id: i64,
        config: &PageConfig,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Overwrite both slots with the same config as one atomic write.
    ///
    /// A concurrent reader must observe either both old values or both new ones.
    fn write_draft_and_published(
        &self,
        business_id: i64,
        config: &PageConfig,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Read-only access to business records.
pub trait BusinessDirectory: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get_business(
        &self,
        business_id: i64,
    ) -> impl Future<Output = Result<Option<Business>, Self::Error>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError<E> {
    #[error("page config rejected: {0}")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Backend(E),
}

impl<E> StoreError<E> {
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            StoreError::Invalid(errors) => Some(errors),
            StoreError::Backend(_) => None,
        }
    }
}

/// Draft/published page config operations over a [`SlotStore`].
#[derive(Debug, Clone)]
pub struct PageConfigStore<S> {
    backend: S,
    fallback_template: TemplateKey,
}

impl<S: SlotStore> PageConfigStore<S> {
    #[must_use]
    pub fn new(backend: S, fallback_template: TemplateKey) -> Self {
        Self {
            backend,
            fallback_template,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    #[must_use]
    pub fn fallback_template(&self) -> TemplateKey {
        self.fallback_template
    }

    /// Validate, then overwrite the draft. `published` is never touched.
    ///
    /// # Errors
    ///
    /// [`StoreError::Invalid`] with every invalid field, or
    /// [`StoreError::Backend`] if the write fails.
    pub async fn save_draft(
        &self,
        business_id: i64,
        config: &PageConfig,
    ) -> Result<(), StoreError<S::Error>> {
        reject_invalid(business_id, config)?;
        self.backend
            .write_draft(business_id, config)
            .await
            .map_err(|e| backend_failure(business_id, Slot::Draft, e))?;
        tracing::info!(business_id, slot = "draft", "page config saved");
        Ok(())
    }

    /// Validate, then overwrite draft and published together.
    ///
    /// # Errors
    ///
    /// [`StoreError::Invalid`] with every invalid field, or
    /// [`StoreError::Backend`] if the write fails; in both cases `published`
    /// keeps its previous value.
    pub async fn publish(
        &self,
        business_id: i64,
        config: &PageConfig,
    ) -> Result<(), StoreError<S::Error>> {
        reject_invalid(business_id, config)?;
        self.backend
            .write_draft_and_published(business_id, config)
            .await
            .map_err(|e| backend_failure(business_id, Slot::Published, e))?;
        tracing::info!(business_id, slot = "published", "page config published");
        Ok(())
    }

    /// `publish = false` saves the draft only; `publish = true` writes both slots.
    ///
    /// # Errors
    ///
    /// See [`Self::save_draft`] and [`Self::publish`].
    pub async fn save(
        &self,
        business_id: i64,
        config: &PageConfig,
        publish: bool,
    ) -> Result<(), StoreError<S::Error>> {
        if publish {
            self.publish(business_id, config).await
        } else {
            self.save_draft(business_id, config).await
        }
    }

    /// Validate an untyped submission and save it.
    ///
    /// # Errors
    ///
    /// See [`Self::save`].
    pub async fn save_value(
        &self,
        business_id: i64,
        candidate: &Value,
        publish: bool,
    ) -> Result<PageConfig, StoreError<S::Error>> {
        let config = validate_value(candidate).map_err(|errors| {
            tracing::info!(business_id, error_count = errors.len(), "page config rejected");
            StoreError::Invalid(errors)
        })?;
        self.save(business_id, &config, publish).await?;
        Ok(config)
    }

    /// The working copy, or the fallback template's default if none is stored.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the slot cannot be read.
    pub async fn read_draft(&self, business_id: i64) -> Result<PageConfig, StoreError<S::Error>> {
        self.read(business_id, Slot::Draft).await
    }

    /// The public copy, or the fallback template's default if never published.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the slot cannot be read.
    pub async fn read_published(
        &self,
        business_id: i64,
    ) -> Result<PageConfig, StoreError<S::Error>> {
        self.read(business_id, Slot::Published).await
    }

    /// # Errors
    ///
    /// [`StoreError::Backend`] if the slot cannot be read.
    pub async fn read(
        &self,
        business_id: i64,
        slot: Slot,
    ) -> Result<PageConfig, StoreError<S::Error>> {
        Ok(self.read_stored(business_id, slot).await?.config)
    }

    /// Like [`Self::read`], but keeps the template key as it was stored.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the slot cannot be read.
    pub async fn read_stored(
        &self,
        business_id: i64,
        slot: Slot,
    ) -> Result<StoredConfig, StoreError<S::Error>> {
        let stored = self
            .backend
            .load_slot(business_id, slot)
            .await
            .map_err(|e| backend_failure(business_id, slot, e))?;

        let Some(raw) = stored else {
            return Ok(default_config(self.fallback_template).into());
        };

        let errors = match validate_value(&raw) {
            Ok(config) => return Ok(config.into()),
            Err(errors) => errors,
        };

        if let Some(recovered) = recover_snapshot(raw) {
            tracing::warn!(
                business_id,
                slot = %slot,
                template_key = %recovered.template_key,
                errors = %errors,
                "stored page config no longer validates; serving it as stored"
            );
            return Ok(recovered);
        }

        tracing::warn!(
            business_id,
            slot = %slot,
            errors = %errors,
            "stored page config cannot be decoded; serving default"
        );
        Ok(default_config(self.fallback_template).into())
    }
}

/// Structural decode of a snapshot the validator refused.
///
/// An unrecognized `templateKey` is swapped for [`TemplateKey::FALLBACK`],
/// which also gets its default sidebar if the snapshot had none. Returns
/// `None` when the rest of the document does not decode.
fn recover_snapshot(mut raw: Value) -> Option<StoredConfig> {
    let fields = raw.as_object_mut()?;
    let template_key = fields.get("templateKey")?.as_str()?.to_string();
    let known = template_key.parse::<TemplateKey>().is_ok();
    if !known {
        fields.insert(
            "templateKey".to_string(),
            Value::String(TemplateKey::FALLBACK.as_str().to_string()),
        );
    }

    let mut config: PageConfig = serde_json::from_value(raw).ok()?;
    if !known && config.sidebar.is_none() {
        config.sidebar = default_config(TemplateKey::FALLBACK).sidebar;
    }
    Some(StoredConfig {
        template_key,
        config,
    })
}

fn reject_invalid<E>(business_id: i64, config: &PageConfig) -> Result<(), StoreError<E>> {
    validate(config).map_err(|errors| {
        tracing::info!(business_id, error_count = errors.len(), "page config rejected");
        StoreError::Invalid(errors)
    })
}

fn backend_failure<E: std::fmt::Display>(business_id: i64, slot: Slot, error: E) -> StoreError<E> {
    tracing::error!(business_id, slot = %slot, error = %error, "page config store failed");
    StoreError::Backend(error)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
