use serde::{Deserialize, Serialize};

/// The session token as persisted in browser storage: `{"id": "...", "ts": 1700000000000}`.
/// `ts` is milliseconds since the Unix epoch, refreshed on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub id: String,
    pub ts: i64,
}

impl StoredSession {
    pub fn new(id: impl Into<String>, ts: i64) -> Self {
        Self { id: id.into(), ts }
    }

    /// Fresh while strictly less than `ttl_ms` has elapsed since `ts`.
    pub fn is_fresh(&self, now_ms: i64, ttl_ms: i64) -> bool {
        now_ms.saturating_sub(self.ts) < ttl_ms
    }
}
