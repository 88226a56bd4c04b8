//! Pure view projection: widget state in, view description out.
//! The DOM layer in `widget-ui` applies these; nothing here touches the page.

use widget_types::message::{Message, Role};

use crate::markdown::{render_markdown, render_plain};
use crate::state::WidgetState;

/// One rendered message bubble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub role: Role,
    pub html: String,
}

impl MessageView {
    pub fn from_message(message: &Message) -> Self {
        Self {
            role: message.role,
            html: message_html(message),
        }
    }
}

/// Everything needed to draw the panel from scratch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub open: bool,
    pub messages: Vec<MessageView>,
    pub typing: bool,
    pub send_enabled: bool,
}

pub fn panel_view(state: &WidgetState) -> PanelView {
    PanelView {
        open: state.is_open(),
        messages: state
            .messages()
            .iter()
            .map(MessageView::from_message)
            .collect(),
        typing: state.is_typing(),
        send_enabled: !state.is_loading(),
    }
}

/// Assistant text goes through markdown; user text is only escaped.
pub fn message_html(message: &Message) -> String {
    match message.role {
        Role::Assistant => render_markdown(message.content.as_str()),
        Role::User => render_plain(&message.content),
    }
}

/// Enter submits; Shift+Enter (and Enter while an IME is composing) does not.
pub fn should_submit(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Height for the auto-growing input given its content height.
pub fn input_height(scroll_height: f64, max_height: f64) -> f64 {
    scroll_height.max(0.0).min(max_height)
}
