//! SupplySoul: in-memory pharmacy stock tracking with a terminal catalog,
//! a management dashboard and a rule-based stock assistant.

pub mod assistant;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod shutdown;
pub mod ui;
