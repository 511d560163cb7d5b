//! Aggregates for the dashboard and the assistant.

use serde::Serialize;

use crate::inventory::item::{Item, StockStatus};

/// Headline counts over a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_quantity: u64,
}

impl Stats {
    pub fn count(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::InStock => self.in_stock,
            StockStatus::LowStock => self.low_stock,
            StockStatus::OutOfStock => self.out_of_stock,
        }
    }
}

/// Per-category totals, one bar of the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub quantity: u64,
    pub items: usize,
}

/// One slice of the stock status chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub status: StockStatus,
    pub label: &'static str,
    pub value: usize,
}

impl StatusSlice {
    /// Whole-number share of `total`, 0 for an empty collection.
    pub fn percent_of(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((self.value as f64 / total as f64) * 100.0).round() as u32
    }
}

pub fn aggregate(items: &[Item]) -> Stats {
    items.iter().fold(
        Stats {
            total: items.len(),
            ..Stats::default()
        },
        |mut stats, item| {
            match item.status() {
                StockStatus::InStock => stats.in_stock += 1,
                StockStatus::LowStock => stats.low_stock += 1,
                StockStatus::OutOfStock => stats.out_of_stock += 1,
            }
            stats.total_quantity += u64::from(item.quantity);
            stats
        },
    )
}

/// Category totals in order of first appearance.
pub fn by_category(items: &[Item]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    for item in items {
        match summaries.iter_mut().find(|s| s.name == item.category) {
            Some(summary) => {
                summary.quantity += u64::from(item.quantity);
                summary.items += 1;
            }
            None => summaries.push(CategorySummary {
                name: item.category.clone(),
                quantity: u64::from(item.quantity),
                items: 1,
            }),
        }
    }
    summaries
}

/// Fixed three-bucket distribution: In Stock, Low Stock, Out of Stock.
pub fn status_distribution(items: &[Item]) -> [StatusSlice; 3] {
    let stats = aggregate(items);
    [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ]
    .map(|status| StatusSlice {
        status,
        label: status.label(),
        value: stats.count(status),
    })
}

/// Items at or below their threshold, out-of-stock included.
pub fn low_stock_alerts(items: &[Item]) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| item.quantity <= item.threshold)
        .collect()
}

/// Distinct category names in order of first appearance.
pub fn categories(items: &[Item]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}
