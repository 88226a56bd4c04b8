//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `widget-core` (pure Rust).
//! Implementations live in `widget-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use widget_types::{
    Result,
    message::{ChatReply, ChatRequest},
};

// ─── Chat API Port ───────────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatApiPort {
    /// `GET /greet`: a fresh session id plus the greeting text
    async fn greet(&self) -> Result<ChatReply>;

    /// `POST /chat`; non-2xx responses come back as `Err`
    async fn chat(&self, req: ChatRequest) -> Result<ChatReply>;
}

// ─── Storage Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Clock Port ──────────────────────────────────────────────

pub trait ClockPort {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;
}

/// Wall clock. Uses `Date.now()` under wasm via chrono's `wasmbind` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
