use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table,
    TableState,
};
use ratatui::Frame;

use crate::inventory::{
    by_category, consumption_series, low_stock_alerts, status_distribution, StockStatus,
};
use crate::ui::dashboard::form::{FormField, ItemForm};
use crate::ui::dashboard::state::{DashboardMode, DashboardState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    status_color, ACTIVE_HIGHLIGHT, BRAND, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    POPUP_BORDER, USAGE_LINE,
};

const FORM_WIDTH: u16 = 66;

pub fn render_dashboard(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let [cards, charts, management] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Min(6),
        ])
        .areas(area);

    render_stat_cards(frame, cards, state);

    let [category_area, status_area, usage_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .areas(charts);
    render_category_chart(frame, category_area, state);
    render_status_overview(frame, status_area, state);
    render_consumption(frame, usage_area);

    let [table_area, alerts_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .areas(management);
    render_table(frame, table_area, state);
    render_alerts(frame, alerts_area, state);

    match &state.mode {
        DashboardMode::Browse => {}
        DashboardMode::Adding(form) => {
            render_form(frame, area, " Add New Item ", form, state.notice.as_deref());
        }
        DashboardMode::Editing { form, .. } => {
            render_form(frame, area, " Edit Item ", form, state.notice.as_deref());
        }
        DashboardMode::ConfirmDelete { id } => {
            let name = state
                .inventory
                .get(*id)
                .map(|item| item.name.as_str())
                .unwrap_or_default();
            render_confirm(frame, area, name);
        }
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(BRAND)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn render_stat_cards(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let stats = state.stats();
    let cards = [
        ("Total Items", stats.total, BRAND),
        ("In Stock", stats.in_stock, status_color(StockStatus::InStock)),
        ("Low Stock", stats.low_stock, status_color(StockStatus::LowStock)),
        (
            "Out of Stock",
            stats.out_of_stock,
            status_color(StockStatus::OutOfStock),
        ),
    ];
    let slots: [Rect; 4] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .areas(area);

    for ((label, value, color), slot) in cards.into_iter().zip(slots) {
        let lines = vec![
            Line::from(Span::styled(
                format!(" {value}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {label}"),
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        frame.render_widget(Paragraph::new(lines).block(block), slot);
    }
}

fn render_category_chart(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let bars: Vec<Bar> = by_category(state.inventory.items())
        .into_iter()
        .map(|summary| {
            Bar::default()
                .value(summary.quantity)
                .label(Line::from(summary.name))
                .style(Style::default().fg(BRAND))
        })
        .collect();
    let chart = BarChart::default()
        .block(panel(" Inventory by Category "))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn render_status_overview(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let total = state.inventory.len();
    let bar_room = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for slice in status_distribution(state.inventory.items()) {
        let percent = slice.percent_of(total);
        let color = status_color(slice.status);
        lines.push(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(color)),
            Span::styled(slice.label, Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("  {} ({percent}%)", slice.value),
                Style::default().fg(HEADER_SEPARATOR),
            ),
        ]));
        let filled = bar_room * percent as usize / 100;
        lines.push(Line::from(Span::styled(
            format!(" {}", "█".repeat(filled)),
            Style::default().fg(color),
        )));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel(" Stock Status Overview ")),
        area,
    );
}

fn render_consumption(frame: &mut Frame<'_>, area: Rect) {
    let bars: Vec<Bar> = consumption_series()
        .into_iter()
        .map(|point| {
            Bar::default()
                .value(point.usage)
                .label(Line::from(point.month))
                .style(Style::default().fg(USAGE_LINE))
        })
        .collect();
    let chart = BarChart::default()
        .block(panel(" Consumption (Last 6 Months) "))
        .bar_width(3)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn render_table(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let header = Row::new(["Name", "Category", "Quantity", "Threshold", "Status"])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));
    let rows = state.inventory.items().iter().map(|item| {
        let status = item.status();
        Row::new(vec![
            Cell::from(item.name.clone()),
            Cell::from(item.category.clone()),
            Cell::from(item.quantity.to_string()),
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
            Constraint::Percentage(32),
            Constraint::Percentage(24),
            Constraint::Percentage(13),
            Constraint::Percentage(13),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .block(panel(" Inventory Management "))
    .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
    .highlight_symbol("▶ ");

    let selected = (!state.inventory.is_empty()).then_some(state.selected);
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_alerts(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    let alerts = low_stock_alerts(state.inventory.items());
    let block = panel(" Low Stock Alerts ");
    if alerts.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " No low stock alerts at this time.",
                Style::default().fg(HEADER_SEPARATOR),
            )))
            .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = alerts
        .into_iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!(" ⚠ {}", item.name),
                    Style::default()
                        .fg(status_color(item.status()))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("   Current: {} | Threshold: {}", item.quantity, item.threshold),
                    Style::default().fg(HEADER_SEPARATOR),
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    form: &ItemForm,
    notice: Option<&str>,
) {
    let mut lines = Vec::new();
    for field in FormField::ALL {
        let focused = field == form.focus;
        let marker = if focused { "▶ " } else { "  " };
        let cursor = if focused { "▏" } else { "" };
        let mut line = Line::from(vec![
            Span::styled(
                format!("{marker}{:<10} ", field.label()),
                Style::default().fg(HEADER_SEPARATOR),
            ),
            Span::styled(
                format!("{}{cursor}", form.value(field)),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    if let Some(notice) = notice {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(status_color(StockStatus::OutOfStock)),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Tab: Next field  Ctrl+←/→: Pick category  Enter: Save  Esc: Cancel",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    let height = lines.len() as u16 + 2;
    let popup = centered_rect_by_size(area, FORM_WIDTH, height);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(BRAND)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect, name: &str) {
    let lines = vec![
        Line::from("Are you sure you want to delete this item?"),
        Line::from(Span::styled(
            name.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y: Delete  n/Esc: Keep",
            Style::default().fg(HEADER_SEPARATOR),
        )),
    ];
    let popup = centered_rect_by_size(area, FORM_WIDTH, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Delete Item ", Style::default().fg(BRAND)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
