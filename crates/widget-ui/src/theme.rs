//! Class names shared with `widget.css`.
//! The stylesheet is served by the chat backend; keep both in sync.

pub const ROOT: &str = "chat-widget";
pub const LOADING: &str = "chat-widget--loading";

pub const LAUNCHER: &str = "chat-widget-launcher";
pub const PANEL: &str = "chat-widget-panel";
pub const PANEL_OPEN: &str = "chat-widget-panel--open";
pub const HEADER: &str = "chat-widget-header";
pub const TITLE: &str = "chat-widget-title";
pub const CLOSE: &str = "chat-widget-close";
pub const MESSAGES: &str = "chat-widget-messages";
pub const INPUT_ROW: &str = "chat-widget-input-row";
pub const INPUT: &str = "chat-widget-input";
pub const SEND: &str = "chat-widget-send";

pub const MESSAGE: &str = "chat-widget-message";
pub const BUBBLE: &str = "chat-widget-bubble";
pub const TYPING: &str = "chat-widget-typing";

pub const LAUNCHER_ICON: &str = "\u{1F4AC}";
pub const CLOSE_ICON: &str = "\u{00D7}";
pub const SEND_LABEL: &str = "Send";

/// Delay before focusing the input, so the panel's open transition has started.
pub const FOCUS_DELAY_MS: u32 = 50;

/// Modifier class for a message bubble, e.g. `chat-widget-message--user`.
pub fn message_class(role: &str) -> String {
    format!("{} {}--{}", MESSAGE, MESSAGE, role)
}
