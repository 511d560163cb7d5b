//! Filtered and sorted presentation views.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::inventory::item::{Item, StockStatus};

/// Status filter offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(StockStatus),
}

impl StatusFilter {
    /// UI cycle order: All, In Stock, Low Stock, Out of Stock.
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(StockStatus::InStock),
        StatusFilter::Only(StockStatus::LowStock),
        StatusFilter::Only(StockStatus::OutOfStock),
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(self, item: &Item) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => item.status() == status,
        }
    }

    pub fn next(self) -> Self {
        let index = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
        Self::OPTIONS[(index + 1) % Self::OPTIONS.len()]
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown stock status '{0}' (expected one of: All, In Stock, Low Stock, Out of Stock)")]
pub struct ParseStatusFilterError(pub String);

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    /// Accepts display labels ("Low Stock") and slug forms ("low-stock", "low_stock").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "all" => Ok(StatusFilter::All),
            "in stock" => Ok(StatusFilter::Only(StockStatus::InStock)),
            "low stock" => Ok(StatusFilter::Only(StockStatus::LowStock)),
            "out of stock" => Ok(StatusFilter::Only(StockStatus::OutOfStock)),
            _ => Err(ParseStatusFilterError(s.to_string())),
        }
    }
}

/// Sort order for presented views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Quantity,
    Category,
    Status,
    /// Keeps collection order.
    Insertion,
}

impl SortKey {
    /// Keys offered by the sort selector, in cycle order.
    pub const OPTIONS: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Quantity,
        SortKey::Category,
        SortKey::Status,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Quantity => "Quantity",
            SortKey::Category => "Category",
            SortKey::Status => "Status",
            SortKey::Insertion => "Unsorted",
        }
    }

    pub fn next(self) -> Self {
        match Self::OPTIONS.iter().position(|o| *o == self) {
            Some(index) => Self::OPTIONS[(index + 1) % Self::OPTIONS.len()],
            None => Self::OPTIONS[0],
        }
    }

    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::Name => locale_cmp(&a.name, &b.name),
            SortKey::Quantity => b.quantity.cmp(&a.quantity),
            SortKey::Category => locale_cmp(&a.category, &b.category),
            SortKey::Status => a.status().priority().cmp(&b.status().priority()),
            SortKey::Insertion => Ordering::Equal,
        }
    }
}

impl From<&str> for SortKey {
    /// Unrecognized keys fall back to [`SortKey::Insertion`].
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "name" => SortKey::Name,
            "quantity" => SortKey::Quantity,
            "category" => SortKey::Category,
            "status" => SortKey::Status,
            _ => SortKey::Insertion,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search term, status filter and sort key bundled for a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl ViewQuery {
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        filter_and_sort(items, &self.search, self.status, self.sort)
    }
}

/// Case-insensitive name search, status filter, then a stable sort.
pub fn filter_and_sort(
    items: &[Item],
    search_term: &str,
    status_filter: StatusFilter,
    sort_key: SortKey,
) -> Vec<Item> {
    let needle = search_term.to_lowercase();
    let mut view: Vec<Item> = items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .filter(|item| status_filter.matches(item))
        .cloned()
        .collect();
    view.sort_by(|a, b| sort_key.compare(a, b));
    view
}

/// Root-locale style ordering: base letters, then accents, then case
/// with lowercase first. Raw text breaks what is left.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    CollationKey::new(a)
        .cmp(&CollationKey::new(b))
        .then_with(|| a.cmp(b))
}

/// Field order is comparison order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accents: String,
    uppercase: Vec<bool>,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let decomposed: Vec<char> = text.nfd().collect();
        let letters = || decomposed.iter().copied().filter(|c| !is_combining_mark(*c));
        Self {
            base: letters().flat_map(char::to_lowercase).collect(),
            accents: decomposed.iter().copied().flat_map(char::to_lowercase).collect(),
            uppercase: letters().map(char::is_uppercase).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new(1, "bandages", "First Aid", 300, 100),
            Item::new(2, "Aspirin 100mg", "Pain Relief", 200, 50),
            Item::new(3, "Amoxicillin 250mg", "Antibiotics", 0, 30),
            Item::new(4, "Gauze Pads", "First Aid", 15, 50),
        ]
    }

    fn names(view: &[Item]) -> Vec<&str> {
        view.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let view = filter_and_sort(&items(), "AMOX", StatusFilter::All, SortKey::Name);
        assert_eq!(names(&view), vec!["Amoxicillin 250mg"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let view = filter_and_sort(&items(), "", StatusFilter::All, SortKey::Name);
        assert_eq!(
            names(&view),
            vec!["Amoxicillin 250mg", "Aspirin 100mg", "bandages", "Gauze Pads"]
        );
    }

    #[test]
    fn name_sort_folds_accents_and_puts_lowercase_first() {
        let items = vec![
            Item::new(1, "Zinc Tablets", "Vitamins", 10, 5),
            Item::new(2, "Ácido Fólico", "Vitamins", 10, 5),
            Item::new(3, "bandages", "First Aid", 10, 5),
            Item::new(4, "Bandages", "First Aid", 10, 5),
        ];
        let view = filter_and_sort(&items, "", StatusFilter::All, SortKey::Name);
        assert_eq!(
            names(&view),
            vec!["Ácido Fólico", "bandages", "Bandages", "Zinc Tablets"]
        );
    }

    #[test]
    fn unaccented_form_sorts_before_accented() {
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_cmp("Éclair", "eclairs"), Ordering::Less);
    }

    #[test]
    fn quantity_sort_is_descending() {
        let view = filter_and_sort(&items(), "", StatusFilter::All, SortKey::Quantity);
        let quantities: Vec<u32> = view.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![300, 200, 15, 0]);
    }

    #[test]
    fn category_sort_is_stable_within_ties() {
        let view = filter_and_sort(&items(), "", StatusFilter::All, SortKey::Category);
        assert_eq!(
            names(&view),
            vec!["Amoxicillin 250mg", "bandages", "Gauze Pads", "Aspirin 100mg"]
        );
    }

    #[test]
    fn insertion_key_keeps_order() {
        let view = filter_and_sort(&items(), "", StatusFilter::All, SortKey::from("price"));
        assert_eq!(view, items());
    }

    #[test]
    fn status_filter_parses_labels_and_slugs() {
        assert_eq!("All".parse(), Ok(StatusFilter::All));
        assert_eq!(
            "Low Stock".parse(),
            Ok(StatusFilter::Only(StockStatus::LowStock))
        );
        assert_eq!(
            "out-of-stock".parse(),
            Ok(StatusFilter::Only(StockStatus::OutOfStock))
        );
        assert!("backordered".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn cycles_wrap() {
        assert_eq!(
            StatusFilter::Only(StockStatus::OutOfStock).next(),
            StatusFilter::All
        );
        assert_eq!(SortKey::Status.next(), SortKey::Name);
        assert_eq!(SortKey::Insertion.next(), SortKey::Name);
    }
}
