//! Browser event listeners.
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `forget()`. Each one only forwards to the controller; all state changes
//! come back through the event bus.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent};

use widget_core::controller::WidgetController;
use widget_core::view::should_submit;
use widget_types::Result;

use crate::dom::{js_error, WidgetDom};

pub fn bind(dom: &Rc<WidgetDom>, controller: &WidgetController) -> Result<()> {
    let ctrl = controller.clone();
    listen(dom.launcher(), "click", move |_: Event| {
        if ctrl.toggle() {
            let ctrl = ctrl.clone();
            wasm_bindgen_futures::spawn_local(async move {
                ctrl.fetch_greeting().await;
            });
        }
    })?;

    let ctrl = controller.clone();
    listen(dom.close_button(), "click", move |_: Event| ctrl.close())?;

    let ctrl = controller.clone();
    let d = dom.clone();
    listen(dom.send_button(), "click", move |_: Event| {
        submit(&ctrl, &d);
    })?;

    let ctrl = controller.clone();
    let d = dom.clone();
    listen(dom.input(), "keydown", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if should_submit(&key.key(), key.shift_key(), key.is_composing()) {
            event.prevent_default();
            submit(&ctrl, &d);
        }
    })?;

    let d = dom.clone();
    listen(dom.input(), "input", move |_: Event| {
        if let Err(e) = d.autogrow() {
            log::debug!("Input resize failed: {}", e);
        }
    })?;

    Ok(())
}

fn submit(controller: &WidgetController, dom: &WidgetDom) {
    let text = dom.input().value();
    let ctrl = controller.clone();
    wasm_bindgen_futures::spawn_local(async move {
        ctrl.send_message(&text).await;
    });
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}
