//! Per-instance widget state.
//!
//! Replaces page-global flags: each mounted widget owns one of these and
//! only the controller mutates it, through the transitions below.

use widget_types::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    panel: PanelState,
    is_loading: bool,
    has_greeted: bool,
    typing: bool,
    session_id: Option<String>,
    messages: Vec<Message>,
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            panel: PanelState::Closed,
            is_loading: false,
            has_greeted: false,
            typing: false,
            session_id: None,
            messages: Vec::new(),
        }
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_greeted(&self) -> bool {
        self.has_greeted
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Flip open/closed and return the new state.
    pub fn toggle(&mut self) -> PanelState {
        self.panel = match self.panel {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        };
        self.panel
    }

    /// Claim the one greeting of this instance. False if already claimed.
    pub fn claim_greeting(&mut self) -> bool {
        if self.has_greeted {
            return false;
        }
        self.has_greeted = true;
        true
    }

    /// Enter the loading state. False if a request is already in flight.
    pub fn begin_request(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        true
    }

    pub fn end_request(&mut self) {
        self.is_loading = false;
    }

    pub fn set_typing(&mut self, visible: bool) {
        self.typing = visible;
    }

    pub fn set_session_id(&mut self, id: impl Into<String>) {
        self.session_id = Some(id.into());
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}
