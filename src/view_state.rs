//! View-state controller.
//!
//! `ViewState` owns the three pieces of transient UI state (pinned ids,
//! selected tags, expanded id). Projections over the catalog are computed
//! on demand and never stored. Every operation here is total: unknown ids
//! and tags are accepted and simply match nothing.

use crate::catalog::{Catalog, Tool};
use log::debug;
use std::collections::BTreeSet;

/// Descriptions longer than this many characters are truncated when collapsed.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 27;

/// Appended to a truncated description.
pub const ELLIPSIS: char = '…';

/// A single user-driven state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePin(String),
    ToggleTag(String),
    /// The "All" badge
    ClearTags,
    ToggleExpand(String),
}

/// Pinned ids, selected tags and the expanded description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pinned: BTreeSet<String>,
    selected_tags: BTreeSet<String>,
    expanded: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the next state.
    pub fn apply(mut self, catalog: &Catalog, action: Action) -> Self {
        match action {
            Action::TogglePin(id) => self.toggle_pin(&id),
            Action::ToggleTag(tag) => self.toggle_tag(catalog, &tag),
            Action::ClearTags => self.clear_tags(),
            Action::ToggleExpand(id) => self.toggle_expand(&id),
        }
        self
    }

    /// Pin `id` if unpinned, unpin it otherwise.
    pub fn toggle_pin(&mut self, id: &str) {
        if self.pinned.remove(id) {
            debug!("Unpinned {}", id);
        } else {
            self.pinned.insert(id.to_string());
            debug!("Pinned {}", id);
        }
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.contains(id)
    }

    pub fn pinned(&self) -> &BTreeSet<String> {
        &self.pinned
    }

    /// Select `tag` if unselected, deselect it otherwise.
    ///
    /// If the change hides the expanded tool, the expansion is cleared.
    pub fn toggle_tag(&mut self, catalog: &Catalog, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
        debug!("Selected tags: {:?}", self.selected_tags);
        self.collapse_if_hidden(catalog);
    }

    /// Drop every tag selection, showing the whole catalog.
    pub fn clear_tags(&mut self) {
        self.selected_tags.clear();
        debug!("Cleared tag selection");
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    /// Collapse `id` if it is expanded, otherwise expand it (collapsing any other).
    pub fn toggle_expand(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
            debug!("Collapsed {}", id);
        } else {
            self.expanded = Some(id.to_string());
            debug!("Expanded {}", id);
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Whether `tool` passes the current tag filter.
    ///
    /// No selection means no filter; otherwise any one selected tag suffices.
    pub fn is_visible(&self, tool: &Tool) -> bool {
        self.selected_tags.is_empty() || tool.tags.iter().any(|t| self.selected_tags.contains(t))
    }

    /// Catalog tools passing the tag filter, in catalog order.
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Tool> {
        catalog.tools().iter().filter(|tool| self.is_visible(tool)).collect()
    }

    /// Pinned catalog tools, in catalog order.
    pub fn pinned_tools<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Tool> {
        catalog.tools().iter().filter(|tool| self.is_pinned(&tool.id)).collect()
    }

    fn collapse_if_hidden(&mut self, catalog: &Catalog) {
        let hidden = match self.expanded.as_deref() {
            Some(id) => catalog.get(id).is_none_or(|tool| !self.is_visible(tool)),
            None => false,
        };
        if hidden {
            debug!("Expanded tool filtered out, collapsing");
            self.expanded = None;
        }
    }
}

/// How a description should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionView {
    /// Text to display
    pub text: String,
    /// Whether a "show more"/"show less" affordance applies
    pub expandable: bool,
    /// Whether the text was cut short
    pub truncated: bool,
}

/// Decide how to show a description given the character limit and expansion.
pub fn describe(description: &str, limit: usize, expanded: bool) -> DescriptionView {
    let expandable = description.chars().count() > limit;
    if expandable && !expanded {
        let mut text: String = description.chars().take(limit).collect();
        text.push(ELLIPSIS);
        DescriptionView {
            text,
            expandable,
            truncated: true,
        }
    } else {
        DescriptionView {
            text: description.to_string(),
            expandable,
            truncated: false,
        }
    }
}
