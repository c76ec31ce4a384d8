use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::{BusinessDirectory, Slot, SlotStore};
use crate::business::Business;
use crate::schema::PageConfig;

#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("business {0} not found")]
    UnknownBusiness(i64),
    #[error("memory store lock poisoned")]
    Poisoned,
    #[error("failed to encode page config: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct Slots {
    draft: Option<Value>,
    published: Option<Value>,
}

#[derive(Debug, Default)]
struct Inner {
    businesses: HashMap<i64, Business>,
    configs: HashMap<i64, Slots>,
}

/// Process-local store. Both slots of a business sit behind one lock, so a
/// publish is observed whole or not at all.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a business record; page configs can only be written for known businesses.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryStoreError::Poisoned`] if a writer panicked.
    pub fn insert_business(&self, business: Business) -> Result<(), MemoryStoreError> {
        let mut inner = self.inner.write().map_err(|_| MemoryStoreError::Poisoned)?;
        inner.businesses.insert(business.id, business);
        Ok(())
    }

    /// Put raw JSON into a slot without validation, e.g. to simulate stored-data drift.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryStoreError::Poisoned`] if a writer panicked.
    pub fn put_raw(&self, business_id: i64, slot: Slot, raw: Value) -> Result<(), MemoryStoreError> {
        let mut inner = self.inner.write().map_err(|_| MemoryStoreError::Poisoned)?;
        let slots = inner.configs.entry(business_id).or_default();
        match slot {
            Slot::Draft => slots.draft = Some(raw),
            Slot::Published => slots.published = Some(raw),
        }
        Ok(())
    }

    fn write(
        &self,
        business_id: i64,
        config: &PageConfig,
        publish: bool,
    ) -> Result<(), MemoryStoreError> {
        let encoded = serde_json::to_value(config)?;
        let mut inner = self.inner.write().map_err(|_| MemoryStoreError::Poisoned)?;
        if !inner.businesses.contains_key(&business_id) {
            return Err(MemoryStoreError::UnknownBusiness(business_id));
        }
        let slots = inner.configs.entry(business_id).or_default();
        if publish {
            slots.published = Some(encoded.clone());
        }
        slots.draft = Some(encoded);
        Ok(())
    }
}

impl SlotStore for MemoryStore {
    type Error = MemoryStoreError;

    async fn load_slot(&self, business_id: i64, slot: Slot) -> Result<Option<Value>, Self::Error> {
        let inner = self.inner.read().map_err(|_| MemoryStoreError::Poisoned)?;
        let Some(slots) = inner.configs.get(&business_id) else {
            return Ok(None);
        };
        Ok(match slot {
            Slot::Draft => slots.draft.clone(),
            Slot::Published => slots.published.clone(),
        })
    }

    async fn write_draft(&self, business_id: i64, config: &PageConfig) -> Result<(), Self::Error> {
        self.write(business_id, config, false)
    }

    async fn write_draft_and_published(
        &self,
        business_id: i64,
        config: &PageConfig,
    ) -> Result<(), Self::Error> {
        self.write(business_id, config, true)
    }
}

impl BusinessDirectory for MemoryStore {
    type Error = MemoryStoreError;

    async fn get_business(&self, business_id: i64) -> Result<Option<Business>, Self::Error> {
        let inner = self.inner.read().map_err(|_| MemoryStoreError::Poisoned)?;
        Ok(inner.businesses.get(&business_id).cloned())
    }
}
