//! Session token persistence.
//!
//! One storage entry holds `{"id", "ts"}` as JSON. Entries older than the
//! TTL read as absent but are left in place; the next save overwrites them.
//! Every storage failure is logged and absorbed.

use std::rc::Rc;

use widget_types::{config::SessionConfig, session::StoredSession};

use crate::ports::{ClockPort, StoragePort};

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn StoragePort>,
    clock: Rc<dyn ClockPort>,
    key: String,
    ttl_ms: i64,
}

impl SessionStore {
    pub fn new(
        storage: Rc<dyn StoragePort>,
        clock: Rc<dyn ClockPort>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            storage,
            clock,
            key: config.storage_key.clone(),
            ttl_ms: config.ttl_ms(),
        }
    }

    /// The persisted session id, if one exists and is still fresh.
    pub async fn load(&self) -> Option<String> {
        let raw = match self.storage.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!(
                    "Session read failed on {}: {}",
                    self.storage.backend_name(),
                    e
                );
                return None;
            }
        };

        let stored: StoredSession = match serde_json::from_str(&raw) {
            Ok(s) => s,
            Err(e) => {
                log::debug!("Ignoring malformed session entry: {}", e);
                return None;
            }
        };

        if stored.id.is_empty() || !stored.is_fresh(self.clock.now_ms(), self.ttl_ms) {
            return None;
        }
        Some(stored.id)
    }

    /// Persist `id` stamped with the current time.
    pub async fn save(&self, id: &str) {
        let stored = StoredSession::new(id, self.clock.now_ms());
        let json = match serde_json::to_string(&stored) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Session encode failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json).await {
            log::warn!(
                "Session write failed on {}: {}",
                self.storage.backend_name(),
                e
            );
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
