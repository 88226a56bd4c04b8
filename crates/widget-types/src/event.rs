use serde::{Deserialize, Serialize};
use crate::message::Role;

/// Events emitted by the widget controller.
/// The DOM layer subscribes to these and patches the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// Panel was opened or closed
    PanelToggled { open: bool },

    /// A message was appended; `html` is ready to inject
    MessageAdded { role: Role, html: String },

    /// Typing indicator shown or removed
    TypingChanged { visible: bool },

    /// A chat request started or finished
    LoadingChanged { loading: bool },

    /// The input field should be emptied
    InputCleared,

    /// The input field should receive focus
    FocusRequested,
}
