//! TUI Views
//!
//! Rendering is a pure function of `App`: title, "My Pins" panel, tag bar,
//! tool list, footer, and the help overlay when it is open.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::app::App;
use super::colors;
use super::state::{Focus, InteractionMode};
use crate::catalog::Tool;
use crate::view_state::describe;

/// Page heading.
pub const TITLE: &str = "MyDevToolkit";

/// Shown in place of the pinned list when nothing is pinned.
pub const EMPTY_PINS_MESSAGE: &str = "Nothing here :p";

/// Rows used by the pins panel when empty.
const EMPTY_PINS_HEIGHT: u16 = 5;

/// Upper bound on rows given to the pins panel.
const MAX_PINS_HEIGHT: u16 = 14;

/// Trait for renderable panels
pub trait Panel {
    /// Render the panel to the frame
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);

    /// Panel title
    fn title(&self) -> &'static str;
}

/// Render the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let pins_height = pins_panel_height(app.pinned_tools().len());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(pins_height),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    PinsPanel.render(frame, chunks[1], app);
    TagBar.render(frame, chunks[2], app);
    ToolsPanel.render(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.state().interaction_mode == InteractionMode::Help {
        render_help(frame, frame.area());
    }
}

fn pins_panel_height(pinned: usize) -> u16 {
    if pinned == 0 {
        EMPTY_PINS_HEIGHT
    } else {
        // Three lines per card plus borders
        (pinned as u16).saturating_mul(3).saturating_add(2).min(MAX_PINS_HEIGHT)
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(colors::FOCUS)
    } else {
        Style::default().fg(colors::DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Build a tool card.
///
/// Lines: pin marker and title, tags (when `show_tags`), description with
/// the more/less affordance, URL.
pub fn tool_card(tool: &Tool, pinned: bool, expanded: bool, show_tags: bool, limit: usize) -> ListItem<'static> {
    let mut lines = Vec::with_capacity(4);

    let (marker, marker_style) = if pinned {
        ("● ", Style::default().fg(colors::PINNED))
    } else {
        ("○ ", Style::default().fg(colors::DIM))
    };
    lines.push(Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(tool.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ]));

    if show_tags {
        let spans: Vec<Span> = tool
            .tags
            .iter()
            .map(|tag| Span::styled(format!("[{}] ", tag), Style::default().fg(colors::TAG)))
            .collect();
        let mut tag_line = vec![Span::raw("  ")];
        tag_line.extend(spans);
        lines.push(Line::from(tag_line));
    }

    let description = describe(&tool.description, limit, expanded);
    let mut desc_line = vec![Span::raw("  "), Span::raw(description.text)];
    if description.expandable {
        let hint = if expanded { " [less]" } else { " [more]" };
        desc_line.push(Span::styled(hint, Style::default().fg(colors::KEYBIND)));
    }
    lines.push(Line::from(desc_line));

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(tool.url.clone(), Style::default().fg(colors::DIM)),
    ]));

    if expanded && !tool.image.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("image: {}", tool.image), Style::default().fg(colors::DIM)),
        ]));
    }

    ListItem::new(lines)
}

fn render_cards(frame: &mut Frame, area: Rect, block: Block<'static>, items: Vec<ListItem<'static>>, selected: Option<usize>) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors::SELECTED_BG))
        .highlight_symbol("▌");
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// "My Pins": pinned cards, or the empty placeholder.
pub struct PinsPanel;

impl Panel for PinsPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state();
        let focused = state.focus == Focus::Pins;
        let pinned = app.pinned_tools();

        if pinned.is_empty() {
            let block = panel_block(format!(" {} ", self.title()), focused).border_type(BorderType::Double);
            // Leading blank line centers the message in the three inner rows
            let message = Paragraph::new(vec![Line::default(), Line::from(EMPTY_PINS_MESSAGE)])
                .style(Style::default().fg(colors::DIM))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items = pinned
            .iter()
            .map(|tool| {
                tool_card(
                    tool,
                    true,
                    state.view.is_expanded(&tool.id),
                    false,
                    app.description_limit(),
                )
            })
            .collect();
        let selected = focused.then_some(state.pin_cursor);
        render_cards(frame, area, panel_block(format!(" {} ", self.title()), focused), items, selected);
    }

    fn title(&self) -> &'static str {
        "My Pins"
    }
}

/// "All" badge followed by the tag vocabulary.
pub struct TagBar;

impl TagBar {
    fn badge(label: &str, active: bool, under_cursor: bool) -> Span<'static> {
        let mut style = if active {
            Style::default().fg(colors::BADGE_FG).bg(colors::BADGE_BG)
        } else {
            Style::default().fg(colors::TAG)
        };
        if under_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        Span::styled(format!(" {} ", label), style)
    }
}

impl Panel for TagBar {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state();
        let focused = state.focus == Focus::Tags;

        let mut spans = vec![
            Self::badge("All", state.view.selected_tags().is_empty(), focused && state.tag_cursor == 0),
            Span::raw(" "),
        ];
        for (i, tag) in app.vocabulary().iter().enumerate() {
            spans.push(Self::badge(
                tag,
                state.view.is_tag_selected(tag),
                focused && state.tag_cursor == i + 1,
            ));
            spans.push(Span::raw(" "));
        }

        let bar = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(panel_block(format!(" {} ", self.title()), focused));
        frame.render_widget(bar, area);
    }

    fn title(&self) -> &'static str {
        "Tags"
    }
}

/// "Tools": the filtered catalog.
pub struct ToolsPanel;

impl Panel for ToolsPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state();
        let focused = state.focus == Focus::Tools;
        let visible = app.visible_tools();

        let title = if state.view.selected_tags().is_empty() {
            format!(" {} ({}) ", self.title(), visible.len())
        } else {
            format!(" {} ({}/{}) ", self.title(), visible.len(), app.catalog().len())
        };
        let block = panel_block(title, focused);

        let items = visible
            .iter()
            .map(|tool| {
                tool_card(
                    tool,
                    state.view.is_pinned(&tool.id),
                    state.view.is_expanded(&tool.id),
                    true,
                    app.description_limit(),
                )
            })
            .collect();
        let selected = focused.then_some(state.tool_cursor);
        render_cards(frame, area, block, items, selected);
    }

    fn title(&self) -> &'static str {
        "Tools"
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state().status_message {
        Some(message) => Line::from(Span::styled(message.clone(), Style::default().fg(colors::STATUS))),
        None => {
            let keys = [
                ("Tab", "focus"),
                ("↑↓", "move"),
                ("⏎", "toggle"),
                ("p", "pin"),
                ("e", "expand"),
                ("g", "go"),
                ("a", "all"),
                ("?", "help"),
                ("q", "quit"),
            ];
            let mut spans = Vec::new();
            for (key, label) in keys {
                spans.push(Span::styled(format!("<{}>", key), Style::default().fg(colors::KEYBIND)));
                spans.push(Span::styled(format!(" {}  ", label), Style::default().fg(colors::DIM)));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Help text lines.
const HELP_LINES: [(&str, &str); 10] = [
    ("Tab / Shift+Tab", "Cycle focus: My Pins, Tags, Tools"),
    ("↑↓ / j k", "Move within the focused panel"),
    ("←→ / h l", "Move along the tag bar"),
    ("Enter / Space", "Toggle tag (or All); expand description"),
    ("p", "Pin or unpin the selected tool"),
    ("e", "Show more / show less"),
    ("g / o", "Open the selected tool in the browser"),
    ("a", "Clear the tag filter"),
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, text)| {
            Line::from(vec![
                Span::styled(format!("{:<18}", key), Style::default().fg(colors::KEYBIND)),
                Span::raw(*text),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Help "),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

/// A rect of `percent_x` by `percent_y` centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::view_state::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::with_catalog(Catalog::bundled().unwrap())
    }

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(120, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let symbols: Vec<&str> = buffer.content().iter().map(|cell| cell.symbol()).collect();
        symbols.chunks(width).map(|row| row.concat()).collect::<Vec<_>>().join("\n")
    }

    fn pins_panel_text(app: &App) -> String {
        let text = screen(app);
        let start = text.find("My Pins").unwrap();
        let end = text.find(" Tags ").unwrap();
        text[start..end].to_string()
    }

    #[test]
    fn test_title_and_tag_bar() {
        let text = screen(&app());
        assert!(text.contains(TITLE));
        assert!(text.contains(" All "));
        assert!(text.contains(" free tier "));
        assert!(text.contains(" gamedev "));
    }

    #[test]
    fn test_empty_pins_placeholder() {
        let text = screen(&app());
        assert!(text.contains(EMPTY_PINS_MESSAGE));
    }

    #[test]
    fn test_single_pin_replaces_placeholder() {
        let mut app = app();
        app.dispatch(Action::TogglePin("unity".to_string()));

        let pins = pins_panel_text(&app);
        assert!(!pins.contains(EMPTY_PINS_MESSAGE));
        assert_eq!(pins.matches("Unity").count(), 1);
        assert_eq!(pins.matches('●').count(), 1);
    }

    #[test]
    fn test_pinned_cards_omit_tags() {
        let mut app = app();
        app.dispatch(Action::TogglePin("unity".to_string()));
        let pins = pins_panel_text(&app);
        assert!(!pins.contains("[gamedev]"));
    }

    #[test]
    fn test_filtered_list_renders_matching_tools_only() {
        let mut app = app();
        app.dispatch(Action::ToggleTag("IDE".to_string()));
        let text = screen(&app);
        assert!(text.contains("Visual Studio Code"));
        assert!(!text.contains("Mantine"));
        assert!(text.contains("Tools (1/6)"));
    }

    #[test]
    fn test_truncated_description_offers_more() {
        let text = screen(&app());
        assert!(text.contains("A collection of free game a… [more]"));
    }

    #[test]
    fn test_expanded_description_offers_less() {
        let mut app = app();
        app.dispatch(Action::ToggleExpand("kenney-assets".to_string()));
        let text = screen(&app);
        assert!(text.contains("A collection of free game assets. [less]"));
    }

    #[test]
    fn test_short_description_has_no_affordance() {
        let tool = Tool {
            id: "tiny".to_string(),
            title: "Tiny".to_string(),
            description: "Short and sweet.".to_string(),
            url: "https://tiny.example".to_string(),
            image: String::new(),
            tags: vec!["ui".to_string()],
        };
        let app = App::with_catalog(Catalog::new(vec![tool]).unwrap());
        let text = screen(&app);
        assert!(text.contains("Short and sweet."));
        assert!(!text.contains("[more]"));
        assert!(!text.contains("[less]"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        app.state_mut().interaction_mode = InteractionMode::Help;
        let text = screen(&app);
        assert!(text.contains("Help"));
        assert!(text.contains("Clear the tag filter"));
    }

    #[test]
    fn test_status_replaces_keybinds() {
        let mut app = app();
        app.set_status("Opened https://unity.com/");
        let text = screen(&app);
        assert!(text.contains("Opened https://unity.com/"));
        assert!(!text.contains("<q> quit"));
    }

    #[test]
    fn test_pins_panel_height() {
        assert_eq!(pins_panel_height(0), EMPTY_PINS_HEIGHT);
        assert_eq!(pins_panel_height(1), 5);
        assert_eq!(pins_panel_height(10), MAX_PINS_HEIGHT);
    }

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 60, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }
}
