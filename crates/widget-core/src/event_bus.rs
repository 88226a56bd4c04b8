//! Simple event bus for decoupled communication between the controller and the DOM.
//!
//! The bus is single-threaded (WASM constraint) and uses interior mutability
//! via RefCell. Events are buffered; an optional notifier is invoked after
//! each emit so the DOM layer can drain without a frame loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use widget_types::event::WidgetEvent;

type Notifier = Rc<dyn Fn()>;

/// Shared event bus, clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<WidgetEvent>>>,
    notifier: Rc<RefCell<Option<Notifier>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
            notifier: Rc::new(RefCell::new(None)),
        }
    }

    /// Publish an event. Called by the controller.
    pub fn emit(&self, event: WidgetEvent) {
        self.inner.borrow_mut().push_back(event);
        // Clone out so the notifier may itself emit or replace the notifier.
        let notify = self.notifier.borrow().clone();
        if let Some(notify) = notify {
            notify();
        }
    }

    /// Drain all pending events. Called by the DOM layer.
    pub fn drain(&self) -> Vec<WidgetEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending events.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }

    /// Install the callback run after every emit. Replaces any previous one.
    pub fn set_notifier(&self, notify: impl Fn() + 'static) {
        *self.notifier.borrow_mut() = Some(Rc::new(notify));
    }

    pub fn clear_notifier(&self) {
        self.notifier.borrow_mut().take();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
