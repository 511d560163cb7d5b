//! Application configuration.
//!
//! Loaded once at startup from `~/.config/supplysoul/config.toml` (or the
//! path given with `--config`). A missing file yields [`Config::default`].

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AssistantConfig, Config, InventoryConfig, LoggingConfig, UiConfig};
