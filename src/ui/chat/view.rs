use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::assistant::{Speaker, QUICK_QUESTIONS};
use crate::inventory::StockStatus;
use crate::ui::chat::state::ChatState;
use crate::ui::theme::{
    status_color, BRAND, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, USER_BUBBLE,
};

fn split(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area)
}

fn messages_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Furthest the transcript can scroll back when the page body is `area`.
pub fn scroll_limit(state: &ChatState, area: Rect) -> u16 {
    let [messages_area, _, _] = split(area);
    let inner = messages_block().inner(messages_area);
    let hidden = transcript_lines(state, inner.width)
        .len()
        .saturating_sub(usize::from(inner.height));
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

pub fn render_chat(frame: &mut Frame<'_>, area: Rect, state: &ChatState) {
    let [messages_area, status_area, input_area] = split(area);

    let block = messages_block();
    let inner = block.inner(messages_area);
    frame.render_widget(block, messages_area);

    let mut lines = transcript_lines(state, inner.width);
    let height = usize::from(inner.height);
    let scroll = usize::from(state.scroll).min(lines.len().saturating_sub(height));
    let newest = lines.len() - scroll;
    let start = newest.saturating_sub(height);
    let window: Vec<Line> = lines.drain(start..newest).collect();
    frame.render_widget(Paragraph::new(window), inner);

    frame.render_widget(Paragraph::new(status_line(state)), status_area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(state.input.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled("▏", Style::default().fg(BRAND)),
    ]))
    .block(
        Block::default()
            .title(Span::styled(
                " Ask about your inventory... ",
                Style::default().fg(HEADER_SEPARATOR),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input, input_area);
}

fn transcript_lines(state: &ChatState, inner_width: u16) -> Vec<Line<'static>> {
    let width = usize::from(inner_width.saturating_sub(2));
    let mut lines = if state.conversation.is_fresh() {
        welcome_lines()
    } else {
        Vec::new()
    };
    for message in state.conversation.messages() {
        let (label, color) = match message.speaker {
            Speaker::Bot => ("Assistant", BRAND),
            Speaker::User => ("You", USER_BUBBLE),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for row in wrap_text(&message.text, width) {
            lines.push(Line::from(Span::styled(
                format!("  {row}"),
                Style::default().fg(HEADER_TEXT),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn welcome_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "SupplySoul Assistant",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "How can I help you with your inventory today?",
            Style::default().fg(HEADER_SEPARATOR),
        )),
        Line::from(""),
    ];
    for (index, question) in QUICK_QUESTIONS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  F{} ", index + 1), Style::default().fg(BRAND)),
            Span::styled(*question, Style::default().fg(HEADER_TEXT)),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

fn status_line(state: &ChatState) -> Line<'static> {
    if let Some(notice) = &state.notice {
        return Line::from(Span::styled(
            format!(" {notice}"),
            Style::default().fg(status_color(StockStatus::OutOfStock)),
        ));
    }
    if state.listening {
        return Line::from(Span::styled(
            " ● Listening...",
            Style::default().fg(status_color(StockStatus::OutOfStock)),
        ));
    }
    if state.is_thinking() {
        return Line::from(Span::styled(
            " Thinking...",
            Style::default().fg(HEADER_SEPARATOR),
        ));
    }
    Line::from("")
}

/// Greedy word wrap on character counts; embedded newlines are kept.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_len = 0;
        for word in paragraph.split(' ') {
            let word_len = word.chars().count();
            if row_len > 0 && row_len + 1 + word_len > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            if row_len > 0 {
                row.push(' ');
                row_len += 1;
            }
            let mut chars = word.chars().peekable();
            while chars.peek().is_some() {
                if row_len == width {
                    rows.push(std::mem::take(&mut row));
                    row_len = 0;
                }
                if let Some(c) = chars.next() {
                    row.push(c);
                    row_len += 1;
                }
            }
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("Total items: 15", 8),
            vec!["Total".to_string(), "items:".to_string(), "15".to_string()]
        );
    }

    #[test]
    fn keeps_line_breaks() {
        assert_eq!(
            wrap_text("a\n- b", 20),
            vec!["a".to_string(), "- b".to_string()]
        );
    }

    #[test]
    fn scroll_limit_is_what_does_not_fit() {
        let state = ChatState::default();
        let total = transcript_lines(&state, 78).len() as u16;
        assert!(total > welcome_lines().len() as u16);
        // Three-line message box leaves one visible row.
        assert_eq!(scroll_limit(&state, Rect::new(0, 0, 80, 7)), total - 1);
        assert_eq!(scroll_limit(&state, Rect::new(0, 0, 80, 40)), 0);
    }

    #[test]
    fn splits_words_longer_than_the_width() {
        assert_eq!(
            wrap_text("abcdefgh", 3),
            vec!["abc".to_string(), "def".to_string(), "gh".to_string()]
        );
    }
}
