//! Composition root: builds the adapters for one widget and mounts it.

use std::rc::Rc;

use web_sys::Document;

use widget_core::controller::WidgetController;
use widget_core::event_bus::EventBus;
use widget_core::ports::{ChatApiPort, StoragePort, SystemClock};
use widget_core::session::SessionStore;
use widget_platform::api::HttpChatApi;
use widget_platform::storage::select_storage;
use widget_platform::stylesheet::ensure_stylesheet;
use widget_types::config::WidgetConfig;
use widget_types::{Result, WidgetError};

/// Wire one widget instance for `config` and attach it to `<body>`.
///
/// The stylesheet is best effort: the widget still works unstyled.
pub fn launch(document: &Document, config: WidgetConfig) -> Result<WidgetController> {
    if let Err(e) = ensure_stylesheet(document, &config.stylesheet_url()) {
        log::warn!("Stylesheet not injected: {}", e);
    }

    let body = document
        .body()
        .ok_or_else(|| WidgetError::JsInterop("Document has no <body>".to_string()))?;

    let storage: Rc<dyn StoragePort> = select_storage(&config.storage);
    let sessions = SessionStore::new(storage, Rc::new(SystemClock), &config.session);
    let api: Rc<dyn ChatApiPort> = Rc::new(HttpChatApi::new(&config));
    let api_base = config.api_base.clone();

    let controller = WidgetController::new(config, api, sessions, EventBus::new());
    widget_ui::mount(document, &body, &controller)?;

    let ctrl = controller.clone();
    wasm_bindgen_futures::spawn_local(async move {
        ctrl.restore_session().await;
    });

    log::info!("Chat widget ready (api: {})", api_base);
    Ok(controller)
}
