//! # Event Source Abstraction
//!
//! Abstracts the key-event input mechanism so the controller does not
//! depend on a real TTY:
//!
//! ```text
//! Production:   AppController ──▶ TerminalEventSource ──▶ crossterm::event::read()
//! Testing:      AppController ──▶ TestEventSource      ──▶ scripted event queue
//! ```
//!
//! Production uses actual crossterm, maintaining fidelity; tests inject a
//! pre-programmed queue and run deterministically in CI without a terminal.

use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::time::Duration;

/// Trait for abstracting event input sources
pub trait EventSource {
    /// Check if events are available without blocking.
    ///
    /// Returns true if an event is ready to be read, false if the timeout
    /// elapsed first. Equivalent to `crossterm::event::poll()`.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event.
    ///
    /// Should only be called after `poll()` returns true.
    fn read(&mut self) -> Result<Event>;

    /// Check if the event source is exhausted (for testing).
    ///
    /// Terminal sources never exhaust; test sources report when every
    /// queued event has been consumed.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Event source backed by the real terminal
#[derive(Debug, Default)]
pub struct TerminalEventSource;

impl TerminalEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEventSource {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(crossterm::event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(crossterm::event::read()?)
    }
}

/// Event source backed by a scripted queue of events
#[derive(Debug, Default)]
pub struct TestEventSource {
    events: VecDeque<Event>,
}

impl TestEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source pre-loaded with the given events
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Append an event to the queue
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventSource for TestEventSource {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Test event source is exhausted"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}
