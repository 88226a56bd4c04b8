//! DOM front end for the chat widget.
//!
//! [`mount`] builds the launcher and panel, wires the listeners to a
//! [`WidgetController`], and keeps the page in sync by applying every
//! event the controller emits.

pub mod bindings;
pub mod dom;
pub mod theme;

use std::rc::Rc;

use web_sys::{Document, Element};

use widget_core::controller::WidgetController;
use widget_core::view::panel_view;
use widget_types::Result;

pub use dom::WidgetDom;


/// Attach a widget for `controller` as the last child of `parent`.
pub fn mount(
    document: &Document,
    parent: &Element,
    controller: &WidgetController,
) -> Result<Rc<WidgetDom>> {
    let dom = Rc::new(WidgetDom::build(document, controller.config())?);

    let view = panel_view(&controller.state());
    dom.render(&view)?;
    parent.append_child(dom.root()).map_err(dom::js_error)?;

    bindings::bind(&dom, controller)?;

    // Events emitted before mount are already part of the rendered view.
    let bus = controller.event_bus().clone();
    bus.drain();
    let target = Rc::downgrade(&dom);
    let events = bus.clone();
    bus.set_notifier(move || {
        let Some(dom) = target.upgrade() else {
            return;
        };
        for event in events.drain() {
            dom.apply(&event);
        }
    });

    log::debug!("Chat widget mounted");
    Ok(dom)
}
