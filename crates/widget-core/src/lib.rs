//! Platform-independent core of the chat widget.
//!
//! Everything here runs natively in tests; the browser is reached only
//! through the traits in [`ports`].

pub mod ports;
pub mod event_bus;
pub mod markdown;
pub mod session;
pub mod state;
pub mod controller;
pub mod view;
