//! Terminal User Interface for devkit.
//!
//! One screen with three focusable panels:
//! - **My Pins**: pinned tools, or a placeholder when none are pinned
//! - **Tags**: the "All" badge and the tag vocabulary
//! - **Tools**: the catalog filtered by the selected tags
//!
//! Everything runs on the main thread; input is polled with a tick timeout.

mod app;
mod events;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use state::{AppState, Focus, InteractionMode};
pub use views::render;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Palette.
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const FOCUS: Color = Color::Rgb(0, 191, 255); // Deep sky blue
    pub const PINNED: Color = Color::Rgb(255, 215, 0); // Gold
    pub const TAG: Color = Color::Rgb(173, 216, 230); // Light blue
    pub const BADGE_FG: Color = Color::Black;
    pub const BADGE_BG: Color = Color::Rgb(30, 144, 255); // Dodger blue
    pub const SELECTED_BG: Color = Color::Rgb(48, 48, 48);
    pub const STATUS: Color = Color::Rgb(255, 255, 0); // Yellow
    pub const DIM: Color = Color::DarkGray;
}
