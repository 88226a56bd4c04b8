//! One-time injection of the widget stylesheet.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlLinkElement};

use widget_types::{Result, WidgetError};

use crate::js_error;

pub const STYLESHEET_ID: &str = "chat-widget-css";

/// Append `<link rel="stylesheet" href=…>` to `<head>` unless the page
/// already has it. Returns whether a link was added.
pub fn ensure_stylesheet(document: &Document, href: &str) -> Result<bool> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() || has_link(document, href)? {
        return Ok(false);
    }

    let head = document
        .head()
        .ok_or_else(|| WidgetError::JsInterop("Document has no <head>".to_string()))?;

    let link: HtmlLinkElement = document
        .create_element("link")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| WidgetError::JsInterop("<link> is not an HtmlLinkElement".to_string()))?;
    link.set_id(STYLESHEET_ID);
    link.set_rel("stylesheet");
    link.set_href(href);

    head.append_child(&link).map_err(js_error)?;
    log::debug!("Stylesheet injected: {}", href);
    Ok(true)
}

fn has_link(document: &Document, href: &str) -> Result<bool> {
    let links = document
        .query_selector_all("link[rel='stylesheet']")
        .map_err(js_error)?;

    for i in 0..links.length() {
        let Some(link) = links
            .item(i)
            .and_then(|n| n.dyn_into::<HtmlLinkElement>().ok())
        else {
            continue;
        };
        if link.href() == href || link.get_attribute("href").as_deref() == Some(href) {
            return Ok(true);
        }
    }
    Ok(false)
}
