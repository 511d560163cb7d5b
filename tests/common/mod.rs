//! Shared helpers for integration tests.
#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use supplysoul::config::Config;
use supplysoul::ui::{App, Page};

/// App on `page` with the built-in dataset and no reply delay.
pub fn make_app(page: Page) -> App {
    App::new(&Config::default(), page)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        supplysoul::ui::input::handle_key(app, press_key(KeyCode::Char(ch)));
    }
}
