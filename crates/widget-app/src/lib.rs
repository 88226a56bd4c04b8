//! Chat widget: WASM entry point.
//!
//! This crate is the composition root. It reads the embedding `<script>`
//! tag, assembles the platform adapters and mounts the widget. Loading the
//! module mounts one widget; `mountWidget` adds more.

mod app;

use std::str::FromStr;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use widget_platform::script::config_from_page;
use widget_types::config::WidgetConfig;
use widget_types::WidgetError;

pub use app::launch;

/// WASM entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    // Open to every level until the script tag has been read.
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    let config = config_from_page();
    log::set_max_level(level_filter(&config.log_level));
    log::info!("Chat widget starting...");

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document; chat widget not mounted");
        return;
    };

    if document.body().is_some() {
        launch_logged(&document, config);
        return;
    }

    // Classic script in <head>: wait for the body to exist.
    let doc = document.clone();
    let on_ready = Closure::once(move |_: web_sys::Event| launch_logged(&doc, config));
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::error!("Could not defer mount: {:?}", e);
    }
    on_ready.forget();
}

/// Mount another widget from JavaScript. `apiBase` overrides the base URL
/// found on the script tag.
#[wasm_bindgen(js_name = mountWidget)]
pub fn mount_widget(api_base: Option<String>) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| to_js(WidgetError::JsInterop("No document".to_string())))?;

    let config = with_override(config_from_page(), api_base.as_deref());
    launch(&document, config).map(|_| ()).map_err(to_js)
}

fn launch_logged(document: &Document, config: WidgetConfig) {
    if let Err(e) = launch(document, config) {
        log::error!("Chat widget mount failed: {}", e);
    }
}

fn with_override(config: WidgetConfig, api_base: Option<&str>) -> WidgetConfig {
    match api_base.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) => config.with_api_base(base),
        None => config,
    }
}

/// `data-log-level` as a filter; `off` silences the widget, unknown values mean `info`.
fn level_filter(level: &str) -> log::LevelFilter {
    log::LevelFilter::from_str(level.trim()).unwrap_or(log::LevelFilter::Info)
}

fn to_js(e: WidgetError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
