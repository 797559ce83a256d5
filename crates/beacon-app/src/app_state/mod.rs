//! Window-mode application state and event loop handling.

mod core;
mod event_handler;
mod init;
mod shutdown;
mod widget;

pub use self::core::{BeaconApp, UserEvent};
