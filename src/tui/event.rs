use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press (or auto-repeat of a held key)
    Key(KeyEvent),
    /// Terminal resize event
    Resize,
    /// Nothing happened within the tick; completions and timers still run
    Tick,
}

/// Polls crossterm for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event
    pub fn poll(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Event::Tick));
        }

        let event = match event::read()? {
            event::Event::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
            event::Event::Resize(_, _) => Some(Event::Resize),
            _ => None,
        };
        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(16) // ~60fps for smooth animations
    }
}
