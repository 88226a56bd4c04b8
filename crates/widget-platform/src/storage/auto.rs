//! Pick the storage backend named in the config.
//!
//! Priority for `Auto`: localStorage → Memory (fallback).
//! The widget keeps working on memory; it just asks for a new session
//! on the next page load.

use std::rc::Rc;
use widget_core::ports::StoragePort;
use widget_types::config::StorageBackendType;
use super::{LocalStorage, MemoryStorage};

/// Returns a trait object so callers are backend-agnostic.
pub fn select_storage(kind: &StorageBackendType) -> Rc<dyn StoragePort> {
    if *kind == StorageBackendType::Memory {
        log::info!("Storage backend: memory (configured)");
        return Rc::new(MemoryStorage::new());
    }

    match LocalStorage::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
