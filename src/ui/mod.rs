//! Terminal front end: three pages over independent inventory copies.

pub mod app;
pub mod catalog;
pub mod chat;
pub mod dashboard;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod page;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use page::Page;
pub use runtime::run;
