//! WASM-target tests for widget-platform (Node.js runtime).
//!
//! Tests MemoryStorage and the script-config helpers under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage and DOM tests require a browser and live in browser.rs.

use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen_test::*;

use widget_core::ports::{ClockPort, StoragePort};
use widget_core::session::SessionStore;
use widget_platform::script::{config_from_attributes, origin_of, resolve_api_base};
use widget_platform::storage::MemoryStorage;
use widget_types::config::{SessionConfig, StorageBackendType};

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    assert!(storage.get("nonexistent").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_get_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", "v1").await.unwrap();
    storage.set("key", "v2").await.unwrap();
    assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("v2"));
}

#[wasm_bindgen_test]
async fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("key", "val").await.unwrap();
    storage.delete("key").await.unwrap();
    assert!(!storage.exists("key").await.unwrap());
    storage.delete("key").await.unwrap();
}

struct Clock(i64);

impl ClockPort for Clock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

#[wasm_bindgen_test]
async fn session_store_over_memory_storage() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let config = SessionConfig::default();

    let writer = SessionStore::new(storage.clone(), Rc::new(Clock(0)), &config);
    writer.save("s-1").await;

    let fresh = SessionStore::new(
        storage.clone(),
        Rc::new(Clock(config.ttl_ms() - 1)),
        &config,
    );
    assert_eq!(fresh.load().await.as_deref(), Some("s-1"));

    let stale = SessionStore::new(storage, Rc::new(Clock(config.ttl_ms())), &config);
    assert_eq!(stale.load().await, None);
}

// ─── Script config Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn api_base_explicit_wins() {
    let base = resolve_api_base(
        Some(" https://api.example.org/ "),
        Some("https://cdn.example.org/widget.js"),
        "https:",
        "www.example.org",
    );
    assert_eq!(base, "https://api.example.org");
}

#[wasm_bindgen_test]
fn api_base_from_script_src() {
    let base = resolve_api_base(
        None,
        Some("https://chat.example.org:8443/widget.js?v=2"),
        "https:",
        "example.org",
    );
    assert_eq!(base, "https://chat.example.org:8443");
}

#[wasm_bindgen_test]
fn api_base_relative_src_falls_back_to_hostname() {
    assert_eq!(
        resolve_api_base(None, Some("/widget.js"), "https:", "example.org"),
        "https://example.org"
    );
    assert_eq!(
        resolve_api_base(Some("  "), None, "http:", "intranet"),
        "http://intranet"
    );
}

#[wasm_bindgen_test]
fn api_base_localhost_uses_dev_port() {
    assert_eq!(
        resolve_api_base(None, None, "http:", "localhost"),
        "http://localhost:5012"
    );
    assert_eq!(
        resolve_api_base(None, None, "http:", "127.0.0.1"),
        "http://localhost:5012"
    );
    assert_eq!(
        resolve_api_base(None, None, "file:", ""),
        "http://localhost:5012"
    );
}

#[wasm_bindgen_test]
fn origin_parsing() {
    assert_eq!(
        origin_of("http://a.b/c", "https:").as_deref(),
        Some("http://a.b")
    );
    assert_eq!(
        origin_of("https://a.b#x", "https:").as_deref(),
        Some("https://a.b")
    );
    assert_eq!(origin_of("ftp://a.b/c", "https:"), None);
    assert_eq!(origin_of("https://", "https:"), None);
    assert_eq!(origin_of("widget.js", "https:"), None);
}

#[wasm_bindgen_test]
fn config_from_attributes_applies_overrides() {
    let attrs: HashMap<&str, &str> = [
        ("data-api-base", "https://chat.example.org"),
        ("data-title", "Ask EdOpt"),
        ("data-placeholder", "  "),
        ("data-storage", "memory"),
        ("data-log-level", "DEBUG"),
    ]
    .into_iter()
    .collect();

    let config = config_from_attributes(
        |name| attrs.get(name).map(|v| v.to_string()),
        "https:",
        "example.org",
    );
    assert_eq!(config.api_base, "https://chat.example.org");
    assert_eq!(config.title, "Ask EdOpt");
    assert_eq!(config.placeholder, "Type your question...");
    assert_eq!(config.storage, StorageBackendType::Memory);
    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.stylesheet_url(),
        "https://chat.example.org/widget.css"
    );
}

#[wasm_bindgen_test]
fn config_from_attributes_unknown_storage_keeps_auto() {
    let config = config_from_attributes(
        |name| (name == "data-storage").then(|| "redis".to_string()),
        "https:",
        "example.org",
    );
    assert_eq!(config.storage, StorageBackendType::Auto);
    assert_eq!(config.api_base, "https://example.org");
}
