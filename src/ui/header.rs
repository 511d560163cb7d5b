use crate::inventory::{aggregate, Inventory, StockStatus};
use crate::ui::page::Page;
use crate::ui::theme::{status_color, BRAND, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Page tabs plus a stock summary of the page on screen.
pub struct Header {
    active: Page,
}

impl Header {
    pub fn new(active: Page) -> Self {
        Self { active }
    }

    pub fn widget(&self, inventory: &Inventory) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  SupplySoul", Style::default().fg(BRAND).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];
        for (index, page) in Page::ALL.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ", text_style));
            }
            let style = if page == self.active {
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                text_style
            };
            spans.push(Span::styled(page.title(), style));
        }

        let stats = aggregate(inventory.items());
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(format!("{} items", stats.total), text_style));
        for status in [StockStatus::LowStock, StockStatus::OutOfStock] {
            spans.push(Span::styled("  ", text_style));
            spans.push(Span::styled(
                format!("{} {}", stats.count(status), status.phrase()),
                Style::default().fg(status_color(status)),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
