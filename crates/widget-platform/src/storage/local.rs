//! `window.localStorage` backend.
//! Persistent across page loads on the same origin.
//!
//! Access can throw (private browsing, blocked third-party storage, quota),
//! so `open` tests with a write before handing the backend out.

use async_trait::async_trait;
use web_sys::Storage;

use widget_core::ports::StoragePort;
use widget_types::{Result, WidgetError};

const WRITE_CHECK_KEY: &str = "__chat_widget_write_check__";

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| WidgetError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| WidgetError::Storage("localStorage not available".to_string()))?;

        storage
            .set_item(WRITE_CHECK_KEY, "1")
            .map_err(|e| WidgetError::Storage(format!("localStorage not writable: {:?}", e)))?;
        let _ = storage.remove_item(WRITE_CHECK_KEY);

        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
