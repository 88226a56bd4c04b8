//! Configuration from the embedding `<script>` tag.
//!
//! ```html
//! <script type="module" src="https://chat.example.org/widget.js"
//!         data-api-base="https://chat.example.org"
//!         data-title="Ask us anything"></script>
//! ```
//!
//! API base resolution: `data-api-base`, else the origin of the script's
//! absolute or protocol-relative `src`, else a default derived from the
//! page's hostname.

use url::Url;
use web_sys::{Document, Element};

use widget_types::config::{StorageBackendType, WidgetConfig, DEV_API_PORT};

pub const ATTR_API_BASE: &str = "data-api-base";
pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_PLACEHOLDER: &str = "data-placeholder";
pub const ATTR_STYLESHEET: &str = "data-stylesheet";
pub const ATTR_STORAGE: &str = "data-storage";
pub const ATTR_LOG_LEVEL: &str = "data-log-level";

/// Scripts tried when `document.currentScript` is unset (module scripts).
const SCRIPT_SELECTOR: &str = "script[data-api-base], script[src*='widget.js']";

/// Build the config for the widget script on the current page.
pub fn config_from_page() -> WidgetConfig {
    let document = gloo_utils::document();
    let script = find_widget_script(&document);
    let location = gloo_utils::window().location();
    let protocol = location.protocol().unwrap_or_else(|_| "https:".to_string());
    let hostname = location.hostname().unwrap_or_default();

    config_from_attributes(
        |name| script.as_ref().and_then(|s| s.get_attribute(name)),
        &protocol,
        &hostname,
    )
}

fn find_widget_script(document: &Document) -> Option<Element> {
    if let Some(current) = document.current_script() {
        return Some(current.into());
    }
    document.query_selector(SCRIPT_SELECTOR).ok().flatten()
}

/// Apply script attributes (looked up through `attr`) on top of the defaults.
pub fn config_from_attributes(
    attr: impl Fn(&str) -> Option<String>,
    protocol: &str,
    hostname: &str,
) -> WidgetConfig {
    let mut config = WidgetConfig::default();

    config.api_base = resolve_api_base(
        attr(ATTR_API_BASE).as_deref(),
        attr("src").as_deref(),
        protocol,
        hostname,
    );

    if let Some(title) = non_empty(attr(ATTR_TITLE)) {
        config.title = title;
    }
    if let Some(placeholder) = non_empty(attr(ATTR_PLACEHOLDER)) {
        config.placeholder = placeholder;
    }
    if let Some(href) = non_empty(attr(ATTR_STYLESHEET)) {
        config.stylesheet_href = Some(href);
    }
    if let Some(storage) = non_empty(attr(ATTR_STORAGE)) {
        match StorageBackendType::parse(&storage) {
            Some(kind) => config.storage = kind,
            None => log::warn!("Unknown {} value {:?}, using auto", ATTR_STORAGE, storage),
        }
    }
    if let Some(level) = non_empty(attr(ATTR_LOG_LEVEL)) {
        config.log_level = level.to_ascii_lowercase();
    }

    config
}

/// Base URL of the chat API, without trailing slash.
pub fn resolve_api_base(
    explicit: Option<&str>,
    script_src: Option<&str>,
    protocol: &str,
    hostname: &str,
) -> String {
    if let Some(base) = explicit.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    if let Some(origin) = script_src.and_then(|src| origin_of(src, protocol)) {
        return origin;
    }
    match hostname {
        "" | "localhost" | "127.0.0.1" => format!("http://localhost:{}", DEV_API_PORT),
        host => format!("{}//{}", protocol, host),
    }
}

/// Origin (`scheme://host[:port]`) of an absolute or protocol-relative
/// http(s) URL. Relative paths have no origin of their own.
pub fn origin_of(src: &str, page_protocol: &str) -> Option<String> {
    let src = src.trim();
    let parsed = if src.starts_with("//") {
        Url::parse(&format!("{}{}", page_protocol, src))
    } else {
        Url::parse(src)
    }
    .ok()?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return None;
    }
    Some(parsed.origin().ascii_serialization())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
