use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-unique item identifier.
pub type ItemId = u32;

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub threshold: u32,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        threshold: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            threshold,
        }
    }

    pub fn status(&self) -> StockStatus {
        classify(self)
    }
}

/// Stock classification derived from `(quantity, threshold)`.
///
/// Variant order is the status sort priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::OutOfStock,
        StockStatus::LowStock,
        StockStatus::InStock,
    ];

    pub fn of(quantity: u32, threshold: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Title-case label used by filters and tables.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    /// Lowercase form used inside assistant sentences.
    pub fn phrase(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out of stock",
            StockStatus::LowStock => "low stock",
            StockStatus::InStock => "in stock",
        }
    }

    pub fn priority(self) -> u8 {
        match self {
            StockStatus::OutOfStock => 0,
            StockStatus::LowStock => 1,
            StockStatus::InStock => 2,
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(item: &Item) -> StockStatus {
    StockStatus::of(item.quantity, item.threshold)
}
