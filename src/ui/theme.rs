use ratatui::style::Color;

use crate::inventory::StockStatus;

pub const BRAND: Color = Color::Rgb(0x66, 0x7e, 0xea);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const IN_STOCK: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const LOW_STOCK: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const OUT_OF_STOCK: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const USAGE_LINE: Color = Color::Rgb(0x4f, 0xac, 0xfe);
pub const USER_BUBBLE: Color = Color::Rgb(0x93, 0xc5, 0xfd);

pub fn status_color(status: StockStatus) -> Color {
    match status {
        StockStatus::InStock => IN_STOCK,
        StockStatus::LowStock => LOW_STOCK,
        StockStatus::OutOfStock => OUT_OF_STOCK,
    }
}
