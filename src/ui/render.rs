use crate::ui::app::App;
use crate::ui::catalog::render_catalog;
use crate::ui::chat::render_chat;
use crate::ui::dashboard::render_dashboard;
use crate::ui::footer::render_footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::page::Page;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.page());
    frame.render_widget(header_widget.widget(app.active_inventory()), header);
    frame.render_widget(Clear, body);
    match app.page() {
        Page::Catalog => render_catalog(frame, body, app.catalog()),
        Page::Dashboard => render_dashboard(frame, body, app.dashboard()),
        Page::Assistant => render_chat(frame, body, app.chat()),
    }
    render_footer(frame, footer, app);
}
