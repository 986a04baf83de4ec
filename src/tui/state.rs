//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: All mutable application state
//! - `Focus`: Which panel receives navigation keys
//! - `InteractionMode`: Normal navigation or the help overlay

use crate::view_state::ViewState;

/// The primary application state.
///
/// Wraps the catalog `ViewState` together with cursor positions and the
/// bits of bookkeeping the runner needs between frames.
#[derive(Debug, Default)]
pub struct AppState {
    /// Pins, tag filter and expansion
    pub view: ViewState,
    /// Panel receiving navigation keys
    pub focus: Focus,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,

    // Cursors
    /// Index into the pinned projection
    pub pin_cursor: usize,
    /// Index into the tag bar; 0 is "All", `i + 1` is vocabulary entry `i`
    pub tag_cursor: usize,
    /// Index into the filtered projection
    pub tool_cursor: usize,

    /// Status line text
    pub status_message: Option<String>,
    /// URL waiting to be handed to the opener
    pub pending_open: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Which panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Pins,
    Tags,
    #[default]
    Tools,
}

impl Focus {
    /// Cycle to the next panel.
    pub fn next(self) -> Self {
        match self {
            Focus::Pins => Focus::Tags,
            Focus::Tags => Focus::Tools,
            Focus::Tools => Focus::Pins,
        }
    }

    /// Cycle to the previous panel.
    pub fn prev(self) -> Self {
        match self {
            Focus::Pins => Focus::Tools,
            Focus::Tags => Focus::Pins,
            Focus::Tools => Focus::Tags,
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation
    #[default]
    Normal,
    /// Help overlay visible
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Pins.next(), Focus::Tags);
        assert_eq!(Focus::Tags.next(), Focus::Tools);
        assert_eq!(Focus::Tools.next(), Focus::Pins);
    }

    #[test]
    fn test_focus_prev_inverts_next() {
        for focus in [Focus::Pins, Focus::Tags, Focus::Tools] {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::new();
        assert_eq!(state.focus, Focus::Tools);
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
        assert_eq!(state.tag_cursor, 0);
        assert!(state.pending_open.is_none());
        assert!(!state.should_quit);
    }
}
