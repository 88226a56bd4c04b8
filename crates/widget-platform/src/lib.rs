//! Browser adapters for the chat widget.
//!
//! Implements the `widget-core` ports on top of `localStorage` and `fetch`,
//! and reads the page for configuration.

pub mod api;
pub mod storage;
pub mod script;
pub mod stylesheet;

use wasm_bindgen::JsValue;
use widget_types::WidgetError;

/// Render a thrown JS value for error messages.
pub(crate) fn js_error(value: JsValue) -> WidgetError {
    WidgetError::JsInterop(format!("{:?}", value))
}

#[cfg(test)]
mod tests;
