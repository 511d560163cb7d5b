use crate::ui::app::App;
use crate::ui::page::Page;
use crate::ui::theme::{BRAND, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

type Hint = (&'static str, &'static str);

const CATALOG_HINTS: &[Hint] = &[
    ("Type", "Search"),
    ("Tab", "Status"),
    ("Shift+Tab", "Sort"),
    ("Esc", "Clear"),
    ("Ctrl+N/P", "Page"),
    ("Ctrl+Q", "Quit"),
];

const DASHBOARD_HINTS: &[Hint] = &[
    ("a", "Add"),
    ("e", "Edit"),
    ("d", "Delete"),
    ("↑↓", "Select"),
    ("Ctrl+N/P", "Page"),
    ("Ctrl+Q", "Quit"),
];

const FORM_HINTS: &[Hint] = &[("Tab", "Next field"), ("Enter", "Save"), ("Esc", "Cancel")];

const CONFIRM_HINTS: &[Hint] = &[("y", "Delete"), ("n", "Keep")];

const ASSISTANT_HINTS: &[Hint] = &[
    ("Enter", "Send"),
    ("Ctrl+V", "Voice"),
    ("F1-F4", "Suggestions"),
    ("PgUp/PgDn", "Scroll"),
    ("Ctrl+N/P", "Page"),
    ("Ctrl+Q", "Quit"),
];

/// Key hints for the current page and mode, with the version on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
    let version_width = u16::try_from(version.chars().count()).unwrap_or(u16::MAX);
    let [hints_area, version_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(version_width)]).areas(inner);

    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    frame.render_widget(Paragraph::new(hint_line(hints_for(app))), hints_area);
    frame.render_widget(Paragraph::new(Span::styled(version, dim)), version_area);
}

fn hints_for(app: &App) -> &'static [Hint] {
    match app.page() {
        Page::Catalog => CATALOG_HINTS,
        Page::Dashboard => {
            let dashboard = app.dashboard();
            if dashboard.form().is_some() {
                FORM_HINTS
            } else if dashboard.is_browsing() {
                DASHBOARD_HINTS
            } else {
                CONFIRM_HINTS
            }
        }
        Page::Assistant => ASSISTANT_HINTS,
    }
}

fn hint_line(hints: &[Hint]) -> Line<'static> {
    let key_style = Style::default().fg(BRAND).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let mut spans = vec![Span::raw(" ")];
    for (index, (key, label)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", label_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(": {label}"), label_style));
    }
    Line::from(spans)
}
