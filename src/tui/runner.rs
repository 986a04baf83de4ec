//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, event handler and URL opener. It
//! runs the main loop: render → handle events → process actions → repeat.

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use crate::opener::UrlOpener;
use eyre::Result;
use log::info;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    /// The terminal instance
    terminal: Tui,
    /// Application state and input handling
    app: App,
    /// Event handler for keyboard and tick events
    event_handler: EventHandler,
    /// Opens tool URLs
    opener: Box<dyn UrlOpener>,
}

impl TuiRunner {
    /// Create a new TUI runner.
    pub fn new(terminal: Tui, app: App, event_handler: EventHandler, opener: Box<dyn UrlOpener>) -> Self {
        Self {
            terminal,
            app,
            event_handler,
            opener,
        }
    }

    /// Get a reference to the app.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the main TUI loop.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            // 1. Render current state
            self.terminal.draw(|f| render(&self.app, f))?;

            // 2. Handle events (keyboard, tick)
            match self.event_handler.next()? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break; // Quit requested
                    }
                }
                Event::Tick => {}
                Event::Resize(_, _) => {
                    // Terminal will handle resize on next draw
                }
            }

            // 3. Process pending actions
            self.app.process_pending_open(self.opener.as_ref());

            // 4. Check for quit
            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}
