use serde::{Deserialize, Serialize};

use crate::inventory::item::Item;

/// Unvalidated, all-text form input for creating or editing an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub threshold: String,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        threshold: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            threshold: threshold.into(),
        }
    }

    /// Pre-fills a draft from an existing item, as the edit form does.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
            threshold: item.threshold.to_string(),
        }
    }

    /// True when every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.category, &self.quantity, &self.threshold]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn parsed_quantity(&self) -> u32 {
        parse_count(&self.quantity)
    }

    pub fn parsed_threshold(&self) -> u32 {
        parse_count(&self.threshold)
    }
}

/// Parses a leading non-negative integer, defaulting to 0.
///
/// `"12abc"` reads as 12 and `"3.7"` as 3; negative, empty or
/// non-numeric text yields 0. Values past `u32::MAX` saturate.
pub fn parse_count(text: &str) -> u32 {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if seen_digit {
        value
    } else {
        0
    }
}
