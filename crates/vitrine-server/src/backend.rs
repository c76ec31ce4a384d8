use std::future::Future;

use vitrine_core::{BusinessDirectory, MemoryStore, SlotStore};
use vitrine_db::PgStore;

/// Storage the HTTP layer can run on: page config slots, business lookup and
/// a liveness probe for `/api/v1/health`.
pub trait Backend: SlotStore + BusinessDirectory + Clone + 'static {
    fn health(&self) -> impl Future<Output = Result<(), String>> + Send;
}

impl Backend for PgStore {
    async fn health(&self) -> Result<(), String> {
        vitrine_db::health_check(self.pool())
            .await
            .map_err(|e| e.to_string())
    }
}

impl Backend for MemoryStore {
    async fn health(&self) -> Result<(), String> {
        Ok(())
    }
}
