use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::assistant::{DEFAULT_CATEGORY_VOCABULARY, DEFAULT_GREETING};
use crate::inventory::{seed_items, Item};
use crate::ui::Page;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Page shown at startup (default: catalog).
    #[serde(default)]
    pub start_page: Page,
}

/// Assistant behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Artificial "thinking" delay before a reply appears (default: 500).
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
    /// First bot message of every conversation.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Category terms recognised in queries, in priority order.
    #[serde(default = "default_category_vocabulary")]
    pub category_vocabulary: Vec<String>,
    /// Speech-to-text command (`[program, args...]`) whose stdout is the
    /// transcript. Empty disables voice input.
    #[serde(default)]
    pub speech_command: Vec<String>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the TUI. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Dataset every page is seeded with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Replaces the built-in dataset when non-empty.
    #[serde(default)]
    pub seed: Vec<Item>,
}

impl InventoryConfig {
    pub fn seed_items(&self) -> Vec<Item> {
        if self.seed.is_empty() {
            seed_items()
        } else {
            self.seed.clone()
        }
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("supplysoul")
                .join("supplysoul.log")
        })
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_response_delay_ms() -> u64 {
    500
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_category_vocabulary() -> Vec<String> {
    DEFAULT_CATEGORY_VOCABULARY
        .iter()
        .map(|term| term.to_string())
        .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_page: Page::default(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            greeting: default_greeting(),
            category_vocabulary: default_category_vocabulary(),
            speech_command: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
