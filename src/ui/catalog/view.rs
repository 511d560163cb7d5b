use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::inventory::StockStatus;
use crate::ui::catalog::state::CatalogState;
use crate::ui::theme::{
    status_color, ACTIVE_HIGHLIGHT, BRAND, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};

pub fn render_catalog(frame: &mut Frame<'_>, area: Rect, state: &CatalogState) {
    let [controls, table_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .areas(area);

    let visible = state.visible();
    let stats = state.stats();
    let label_style = Style::default().fg(HEADER_SEPARATOR);
    let value_style = Style::default().fg(HEADER_TEXT);
    let controls_line = Line::from(vec![
        Span::styled(" Search: ", label_style),
        Span::styled(format!("{}▏", state.query.search), value_style),
        Span::styled("  │  Status: ", label_style),
        Span::styled(state.query.status.label(), value_style),
        Span::styled("  │  Sort: ", label_style),
        Span::styled(state.query.sort.label(), value_style),
        Span::styled(
            format!("  │  {} of {} items", visible.len(), state.inventory.len()),
            label_style,
        ),
        Span::styled("  │  ", label_style),
        Span::styled(
            format!("{} low", stats.low_stock),
            Style::default().fg(status_color(StockStatus::LowStock)),
        ),
        Span::styled(" · ", label_style),
        Span::styled(
            format!("{} out", stats.out_of_stock),
            Style::default().fg(status_color(StockStatus::OutOfStock)),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(controls_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        controls,
    );

    let block = Block::default()
        .title(Span::styled(" Inventory ", Style::default().fg(BRAND)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " No items found. Try adjusting your search or filter criteria.",
                label_style,
            )))
            .block(block),
            table_area,
        );
        return;
    }

    let header = Row::new(["Name", "Category", "Quantity", "Threshold", "Status"])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));
    let rows = visible.iter().map(|item| {
        let status = item.status();
        Row::new(vec![
            Cell::from(item.name.clone()),
            Cell::from(item.category.clone()),
            Cell::from(format!("{} units", item.quantity)),
            Cell::from(item.threshold.to_string()),
            Cell::from(Span::styled(
                status.label(),
                Style::default().fg(status_color(status)),
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(22),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, table_area, &mut table_state);
}
