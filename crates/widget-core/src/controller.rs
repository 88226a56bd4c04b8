//! Widget controller: panel toggling plus the greeting and message lifecycles.
//!
//! All methods take `&self`: state sits behind `Rc<RefCell<_>>` so a greeting
//! and a message send can be in flight at the same time on the single
//! browser thread. No borrow is held across an `.await` or an emit.
//!
//! Async methods must be spawned via `wasm_bindgen_futures::spawn_local`.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use widget_types::{
    config::WidgetConfig,
    event::WidgetEvent,
    message::{ChatRequest, Message},
};

use crate::event_bus::EventBus;
use crate::ports::ChatApiPort;
use crate::session::SessionStore;
use crate::state::{PanelState, WidgetState};
use crate::view::message_html;

#[derive(Clone)]
pub struct WidgetController {
    state: Rc<RefCell<WidgetState>>,
    config: Rc<WidgetConfig>,
    api: Rc<dyn ChatApiPort>,
    sessions: SessionStore,
    event_bus: EventBus,
}

impl WidgetController {
    pub fn new(
        config: WidgetConfig,
        api: Rc<dyn ChatApiPort>,
        sessions: SessionStore,
        event_bus: EventBus,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(WidgetState::new())),
            config: Rc::new(config),
            api,
            sessions,
            event_bus,
        }
    }

    pub fn state(&self) -> Ref<'_, WidgetState> {
        self.state.borrow()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Pick up a persisted session, if any. Run once at page load.
    pub async fn restore_session(&self) {
        if self.state.borrow().session_id().is_some() {
            return;
        }
        if let Some(id) = self.sessions.load().await {
            log::debug!("Restored session {}", id);
            self.state.borrow_mut().set_session_id(id);
        }
    }

    /// Open or close the panel.
    ///
    /// Returns true when the caller should spawn [`fetch_greeting`](Self::fetch_greeting),
    /// i.e. the panel just opened and no greeting has been requested yet.
    pub fn toggle(&self) -> bool {
        let (panel, needs_greeting) = {
            let mut state = self.state.borrow_mut();
            let panel = state.toggle();
            (panel, panel == PanelState::Open && !state.has_greeted())
        };

        let open = panel == PanelState::Open;
        log::debug!("Panel {}", if open { "opened" } else { "closed" });
        self.event_bus.emit(WidgetEvent::PanelToggled { open });
        if open {
            self.event_bus.emit(WidgetEvent::FocusRequested);
        }
        needs_greeting
    }

    /// Close the panel if it is open. History is kept.
    pub fn close(&self) {
        if self.state.borrow().is_open() {
            self.toggle();
        }
    }

    /// Fetch and show the greeting. Runs at most once per widget instance.
    pub async fn fetch_greeting(&self) {
        // Claimed before the request so a slow response can't cause a second fetch.
        if !self.state.borrow_mut().claim_greeting() {
            return;
        }

        match self.api.greet().await {
            Ok(reply) => {
                self.adopt_session(&reply.session_id).await;
                self.append(Message::assistant(reply.answer));
            }
            Err(e) => {
                log::warn!("Greeting request failed: {}", e);
                self.append(Message::assistant(self.config.greeting_fallback.clone()));
            }
        }
    }

    /// Send a user message and show the reply.
    ///
    /// Dropped when `text` is blank or another send is still in flight.
    pub async fn send_message(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.state.borrow_mut().begin_request() {
            log::debug!("Send ignored: request already in flight");
            return;
        }

        self.append(Message::user(text));
        self.event_bus.emit(WidgetEvent::InputCleared);

        self.restore_session().await;

        self.event_bus.emit(WidgetEvent::LoadingChanged { loading: true });
        self.set_typing(true);

        let req = ChatRequest {
            message: text.to_string(),
            session_id: self.state.borrow().session_id().map(String::from),
        };
        let result = self.api.chat(req).await;

        match result {
            Ok(reply) => {
                self.adopt_session(&reply.session_id).await;
                self.set_typing(false);
                self.append(Message::assistant(reply.answer));
            }
            Err(e) => {
                log::warn!("Chat request failed: {}", e);
                self.set_typing(false);
                self.append(Message::assistant(self.config.error_fallback.clone()));
            }
        }

        self.state.borrow_mut().end_request();
        self.event_bus.emit(WidgetEvent::LoadingChanged { loading: false });
        self.event_bus.emit(WidgetEvent::FocusRequested);
    }

    async fn adopt_session(&self, id: &str) {
        if id.is_empty() {
            log::warn!("Server sent an empty session id; keeping the current one");
            return;
        }
        self.state.borrow_mut().set_session_id(id);
        self.sessions.save(id).await;
    }

    fn append(&self, message: Message) {
        let event = WidgetEvent::MessageAdded {
            role: message.role,
            html: message_html(&message),
        };
        self.state.borrow_mut().push_message(message);
        self.event_bus.emit(event);
    }

    fn set_typing(&self, visible: bool) {
        self.state.borrow_mut().set_typing(visible);
        self.event_bus.emit(WidgetEvent::TypingChanged { visible });
    }
}
