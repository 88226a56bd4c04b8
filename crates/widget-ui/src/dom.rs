//! DOM construction and patching for one widget instance.
//!
//! Elements are created once and held by reference, so several widgets can
//! live on the same page. All changes after mount arrive as `WidgetEvent`s.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlTextAreaElement};

use widget_core::view::{input_height, PanelView};
use widget_types::{config::WidgetConfig, event::WidgetEvent, Result, WidgetError};

use crate::theme;

pub struct WidgetDom {
    document: Document,
    root: HtmlElement,
    launcher: HtmlButtonElement,
    panel: HtmlElement,
    close: HtmlButtonElement,
    messages: HtmlElement,
    input: HtmlTextAreaElement,
    send: HtmlButtonElement,
    typing: RefCell<Option<Element>>,
    max_input_height: f64,
}

impl WidgetDom {
    /// Create the element tree. Nothing is attached to the page yet.
    pub fn build(document: &Document, config: &WidgetConfig) -> Result<Self> {
        let root: HtmlElement = create(document, "div", theme::ROOT)?;

        let launcher: HtmlButtonElement = create(document, "button", theme::LAUNCHER)?;
        launcher.set_type("button");
        launcher.set_text_content(Some(theme::LAUNCHER_ICON));
        set_attr(&launcher, "aria-label", &config.title)?;
        set_attr(&launcher, "aria-expanded", "false")?;

        let panel: HtmlElement = create(document, "div", theme::PANEL)?;
        panel.set_hidden(true);
        set_attr(&panel, "role", "dialog")?;
        set_attr(&panel, "aria-label", &config.title)?;

        let header: HtmlElement = create(document, "div", theme::HEADER)?;
        let title: HtmlElement = create(document, "span", theme::TITLE)?;
        title.set_text_content(Some(&config.title));
        let close: HtmlButtonElement = create(document, "button", theme::CLOSE)?;
        close.set_type("button");
        close.set_text_content(Some(theme::CLOSE_ICON));
        set_attr(&close, "aria-label", "Close chat")?;
        append(&header, &title)?;
        append(&header, &close)?;

        let messages: HtmlElement = create(document, "div", theme::MESSAGES)?;
        set_attr(&messages, "role", "log")?;
        set_attr(&messages, "aria-live", "polite")?;

        let input_row: HtmlElement = create(document, "div", theme::INPUT_ROW)?;
        let input: HtmlTextAreaElement = create(document, "textarea", theme::INPUT)?;
        input.set_rows(1);
        input.set_placeholder(&config.placeholder);
        let send: HtmlButtonElement = create(document, "button", theme::SEND)?;
        send.set_type("button");
        send.set_text_content(Some(theme::SEND_LABEL));
        append(&input_row, &input)?;
        append(&input_row, &send)?;

        append(&panel, &header)?;
        append(&panel, &messages)?;
        append(&panel, &input_row)?;
        append(&root, &launcher)?;
        append(&root, &panel)?;

        Ok(Self {
            document: document.clone(),
            root,
            launcher,
            panel,
            close,
            messages,
            input,
            send,
            typing: RefCell::new(None),
            max_input_height: config.max_input_height_px,
        })
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    pub fn launcher(&self) -> &HtmlButtonElement {
        &self.launcher
    }

    pub fn close_button(&self) -> &HtmlButtonElement {
        &self.close
    }

    pub fn send_button(&self) -> &HtmlButtonElement {
        &self.send
    }

    pub fn input(&self) -> &HtmlTextAreaElement {
        &self.input
    }

    /// Draw a full view. Used once at mount; later changes come via [`apply`](Self::apply).
    pub fn render(&self, view: &PanelView) -> Result<()> {
        self.set_open(view.open)?;
        for message in &view.messages {
            self.append_message(message.role.as_str(), &message.html)?;
        }
        self.set_typing(view.typing)?;
        self.set_loading(!view.send_enabled)
    }

    /// Patch the page for one controller event. Failures are logged, not raised.
    pub fn apply(&self, event: &WidgetEvent) {
        let result = match event {
            WidgetEvent::PanelToggled { open } => self.set_open(*open),
            WidgetEvent::MessageAdded { role, html } => self.append_message(role.as_str(), html),
            WidgetEvent::TypingChanged { visible } => self.set_typing(*visible),
            WidgetEvent::LoadingChanged { loading } => self.set_loading(*loading),
            WidgetEvent::InputCleared => self.clear_input(),
            WidgetEvent::FocusRequested => {
                self.focus_input();
                Ok(())
            }
        };
        if let Err(e) = result {
            log::warn!("Failed to apply {:?}: {}", event, e);
        }
    }

    /// Grow the input with its content, capped at the configured height.
    pub fn autogrow(&self) -> Result<()> {
        let style = self.input.style();
        style.set_property("height", "auto").map_err(js_error)?;

        let content = f64::from(self.input.scroll_height());
        let height = input_height(content, self.max_input_height);
        style
            .set_property("height", &format!("{}px", height))
            .map_err(js_error)?;
        let overflow = if content > self.max_input_height {
            "auto"
        } else {
            "hidden"
        };
        style.set_property("overflow-y", overflow).map_err(js_error)
    }

    fn set_open(&self, open: bool) -> Result<()> {
        self.panel.set_hidden(!open);
        self.panel
            .class_list()
            .toggle_with_force(theme::PANEL_OPEN, open)
            .map_err(js_error)?;
        let expanded = if open { "true" } else { "false" };
        set_attr(&self.launcher, "aria-expanded", expanded)
    }

    fn append_message(&self, role: &str, html: &str) -> Result<()> {
        let message: HtmlElement = create(&self.document, "div", &theme::message_class(role))?;
        let bubble: HtmlElement = create(&self.document, "div", theme::BUBBLE)?;
        bubble.set_inner_html(html);
        append(&message, &bubble)?;
        append(&self.messages, &message)?;
        self.scroll_to_end();
        Ok(())
    }

    fn set_typing(&self, visible: bool) -> Result<()> {
        let mut typing = self.typing.borrow_mut();
        if !visible {
            if let Some(indicator) = typing.take() {
                indicator.remove();
            }
            return Ok(());
        }
        if typing.is_some() {
            return Ok(());
        }

        let class = format!("{} {}", theme::message_class("assistant"), theme::TYPING);
        let indicator: Element = create(&self.document, "div", &class)?;
        set_attr(&indicator, "aria-label", "Assistant is typing")?;
        for _ in 0..3 {
            let dot: Element = create(&self.document, "span", "")?;
            append(&indicator, &dot)?;
        }
        append(&self.messages, &indicator)?;
        *typing = Some(indicator);
        self.scroll_to_end();
        Ok(())
    }

    fn set_loading(&self, loading: bool) -> Result<()> {
        self.send.set_disabled(loading);
        self.root
            .class_list()
            .toggle_with_force(theme::LOADING, loading)
            .map(|_| ())
            .map_err(js_error)
    }

    fn clear_input(&self) -> Result<()> {
        self.input.set_value("");
        self.autogrow()
    }

    fn focus_input(&self) {
        let input = self.input.clone();
        Timeout::new(theme::FOCUS_DELAY_MS, move || {
            if let Err(e) = input.focus() {
                log::debug!("Input focus failed: {:?}", e);
            }
        })
        .forget();
    }

    fn scroll_to_end(&self) {
        self.messages.set_scroll_top(self.messages.scroll_height());
    }
}

fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T> {
    let element = document.create_element(tag).map_err(js_error)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| WidgetError::JsInterop(format!("<{}> has an unexpected element type", tag)))
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_error)
}

fn set_attr(element: &Element, name: &str, value: &str) -> Result<()> {
    element.set_attribute(name, value).map_err(js_error)
}

pub(crate) fn js_error(value: JsValue) -> WidgetError {
    WidgetError::JsInterop(format!("{:?}", value))
}
