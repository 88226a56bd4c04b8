use serde::{Deserialize, Serialize};

/// Port the chat backend listens on during local development
pub const DEV_API_PORT: u16 = 5012;

/// Top-level widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Base URL of the chat API, without trailing slash
    pub api_base: String,
    /// Stylesheet to inject; `None` means `{api_base}/widget.css`
    pub stylesheet_href: Option<String>,
    pub title: String,
    pub placeholder: String,
    /// Shown as the first assistant message when `/greet` fails
    pub greeting_fallback: String,
    /// Shown as the assistant reply when `/chat` fails
    pub error_fallback: String,
    /// The input grows with its content up to this height
    pub max_input_height_px: f64,
    pub session: SessionConfig,
    pub storage: StorageBackendType,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: format!("http://localhost:{}", DEV_API_PORT),
            stylesheet_href: None,
            title: "Chat with us".to_string(),
            placeholder: "Type your question...".to_string(),
            greeting_fallback: DEFAULT_GREETING_FALLBACK.to_string(),
            error_fallback: DEFAULT_ERROR_FALLBACK.to_string(),
            max_input_height_px: 120.0,
            session: SessionConfig::default(),
            storage: StorageBackendType::Auto,
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn greet_url(&self) -> String {
        format!("{}/greet", self.api_base)
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.api_base)
    }

    pub fn stylesheet_url(&self) -> String {
        self.stylesheet_href
            .clone()
            .unwrap_or_else(|| format!("{}/widget.css", self.api_base))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub storage_key: String,
    pub ttl_hours: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "chat_widget_session".to_string(),
            ttl_hours: 24,
        }
    }
}

impl SessionConfig {
    pub fn ttl_ms(&self) -> i64 {
        i64::from(self.ttl_hours) * 60 * 60 * 1000
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// localStorage when accessible, memory otherwise
    Auto,
    LocalStorage,
    Memory,
}

impl StorageBackendType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(StorageBackendType::Auto),
            "local" | "localstorage" => Some(StorageBackendType::LocalStorage),
            "memory" | "none" => Some(StorageBackendType::Memory),
            _ => None,
        }
    }
}

const DEFAULT_GREETING_FALLBACK: &str =
    "Hi there! How can I help you today?";

const DEFAULT_ERROR_FALLBACK: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";
