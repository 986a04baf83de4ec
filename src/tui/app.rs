//! TUI Application
//!
//! `App` owns the catalog, its tag vocabulary and the `AppState`, and turns
//! key presses into view-state actions.

use super::state::{AppState, Focus, InteractionMode};
use crate::catalog::{Catalog, Tool};
use crate::opener::UrlOpener;
use crate::tags;
use crate::view_state::{Action, DEFAULT_DESCRIPTION_LIMIT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};

/// Main TUI application
pub struct App {
    catalog: Catalog,
    vocabulary: Vec<String>,
    description_limit: usize,
    state: AppState,
}

impl App {
    /// Create an application over `catalog`.
    pub fn new(catalog: Catalog, description_limit: usize) -> Self {
        let vocabulary = tags::vocabulary(&catalog);
        info!("App created with {} tools and {} tags", catalog.len(), vocabulary.len());
        Self {
            catalog,
            vocabulary,
            description_limit,
            state: AppState::new(),
        }
    }

    /// Create over `catalog` with the default description limit
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(catalog, DEFAULT_DESCRIPTION_LIMIT)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn description_limit(&self) -> usize {
        self.description_limit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Tools shown in the "My Pins" panel.
    pub fn pinned_tools(&self) -> Vec<&Tool> {
        self.state.view.pinned_tools(&self.catalog)
    }

    /// Tools shown in the "Tools" panel.
    pub fn visible_tools(&self) -> Vec<&Tool> {
        self.state.view.filtered(&self.catalog)
    }

    /// Tool under the cursor of the focused panel.
    pub fn selected_tool(&self) -> Option<&Tool> {
        match self.state.focus {
            Focus::Pins => self.pinned_tools().get(self.state.pin_cursor).copied(),
            Focus::Tools => self.visible_tools().get(self.state.tool_cursor).copied(),
            Focus::Tags => None,
        }
    }

    /// Tag under the tag-bar cursor; `None` is the "All" badge.
    pub fn tag_at_cursor(&self) -> Option<&str> {
        match self.state.tag_cursor {
            0 => None,
            i => self.vocabulary.get(i - 1).map(String::as_str),
        }
    }

    /// Apply a view-state action and keep cursors in range.
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatch {:?}", action);
        let view = std::mem::take(&mut self.state.view);
        self.state.view = view.apply(&self.catalog, action);
        self.clamp_cursors();
    }

    /// Request to quit
    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.state.status_message = None;
    }

    /// Handle a key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match self.state.interaction_mode {
            InteractionMode::Help => self.handle_help_key(key),
            InteractionMode::Normal => self.handle_normal_key(key),
        }

        self.state.should_quit
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            _ => self.state.interaction_mode = InteractionMode::Normal,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        self.clear_status();
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.state.interaction_mode = InteractionMode::Help,
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_tag_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_tag_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('a') => self.dispatch(Action::ClearTags),
            KeyCode::Char('p') => self.toggle_pin_selected(),
            KeyCode::Char('e') => self.toggle_expand_selected(),
            KeyCode::Char('g') | KeyCode::Char('o') => self.open_selected(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.state.focus {
            Focus::Pins => {
                let len = self.pinned_tools().len();
                self.state.pin_cursor = step(self.state.pin_cursor, delta, len);
            }
            Focus::Tools => {
                let len = self.visible_tools().len();
                self.state.tool_cursor = step(self.state.tool_cursor, delta, len);
            }
            Focus::Tags => self.move_tag_cursor(delta),
        }
    }

    fn move_tag_cursor(&mut self, delta: isize) {
        // "All" plus one slot per tag
        let len = self.vocabulary.len() + 1;
        self.state.tag_cursor = step(self.state.tag_cursor, delta, len);
    }

    /// Enter/Space: toggle the tag under the cursor, or expand the selected tool.
    fn activate(&mut self) {
        match self.state.focus {
            Focus::Tags => match self.tag_at_cursor() {
                Some(tag) => {
                    let tag = tag.to_string();
                    self.dispatch(Action::ToggleTag(tag));
                }
                None => self.dispatch(Action::ClearTags),
            },
            Focus::Pins | Focus::Tools => self.toggle_expand_selected(),
        }
    }

    fn toggle_pin_selected(&mut self) {
        if let Some(id) = self.selected_tool().map(|t| t.id.clone()) {
            self.dispatch(Action::TogglePin(id));
        }
    }

    fn toggle_expand_selected(&mut self) {
        let Some(tool) = self.selected_tool() else {
            return;
        };
        // Only tools in the filtered list may be expanded.
        if !self.state.view.is_visible(tool) {
            let message = format!("{} is hidden by the tag filter", tool.title);
            self.set_status(message);
            return;
        }
        if tool.description.chars().count() <= self.description_limit {
            return;
        }
        let id = tool.id.clone();
        self.dispatch(Action::ToggleExpand(id));
    }

    fn open_selected(&mut self) {
        if let Some(url) = self.selected_tool().map(|t| t.url.clone()) {
            self.state.pending_open = Some(url);
        }
    }

    fn clamp_cursors(&mut self) {
        let pins = self.pinned_tools().len();
        let tools = self.visible_tools().len();
        self.state.pin_cursor = self.state.pin_cursor.min(pins.saturating_sub(1));
        self.state.tool_cursor = self.state.tool_cursor.min(tools.saturating_sub(1));
    }

    /// Hand any pending URL to `opener`, reporting the outcome in the status line.
    pub fn process_pending_open(&mut self, opener: &dyn UrlOpener) {
        if let Some(url) = self.state.pending_open.take() {
            match opener.open(&url) {
                Ok(()) => self.set_status(format!("Opened {}", url)),
                Err(e) => self.set_status(e.to_string()),
            }
        }
    }
}

/// Move `current` by `delta` within `0..len`, wrapping at both ends.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}
