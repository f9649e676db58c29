//! # Interactive Terminal Surface
//!
//! The event loop, key mapping, and rendering for the form. All components
//! take their I/O by injection: the controller reads key events through an
//! [`EventSource`] and the renderer writes to any `io::Write` sink, so the
//! full flow runs headless in tests.

pub mod command;
pub mod controller;
pub mod events;
pub mod view;

pub use command::{map_key, Command};
pub use controller::AppController;
pub use events::{EventSource, TerminalEventSource, TestEventSource};
pub use view::FormRenderer;
