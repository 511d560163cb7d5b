//! Ordered intent rules: each pairs a predicate with a responder.

use serde::Serialize;

use crate::inventory::{aggregate, Item, StockStatus};

/// Which canned answer a query resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    ItemLookup,
    CategoryLookup,
    OutOfStock,
    LowStock,
    Totals,
    Help,
}

/// Input shared by every rule of one evaluation.
pub struct MatchContext<'a> {
    /// Lowercased query text, untrimmed.
    pub query: &'a str,
    pub items: &'a [Item],
    /// Lowercased category vocabulary, in priority order.
    pub vocabulary: &'a [String],
}

/// What a predicate captured for its responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'a> {
    Item(&'a Item),
    Category(&'a str),
    Query,
}

pub type Predicate = for<'a> fn(&MatchContext<'a>) -> Option<Capture<'a>>;
pub type Responder = for<'a> fn(&MatchContext<'a>, Capture<'a>) -> String;

/// One step of the cascade.
#[derive(Clone, Copy)]
pub struct IntentRule {
    pub intent: QueryIntent,
    predicate: Predicate,
    responder: Responder,
}

impl IntentRule {
    pub fn new(intent: QueryIntent, predicate: Predicate, responder: Responder) -> Self {
        Self {
            intent,
            predicate,
            responder,
        }
    }

    /// Runs the predicate and, on a match, the responder.
    pub fn evaluate(&self, ctx: &MatchContext<'_>) -> Option<String> {
        (self.predicate)(ctx).map(|capture| (self.responder)(ctx, capture))
    }
}

impl std::fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRule")
            .field("intent", &self.intent)
            .finish_non_exhaustive()
    }
}

pub const DEFAULT_CATEGORY_VOCABULARY: [&str; 6] = [
    "pain relief",
    "antibiotics",
    "diabetes",
    "first aid",
    "medical supplies",
    "medical equipment",
];

pub const HELP_TEXT: &str = "I can help you with:\n\
- Searching for specific items (e.g., 'Paracetamol')\n\
- Checking stock status (e.g., 'low stock items')\n\
- Category information (e.g., 'pain relief items')\n\
- General inventory statistics\n\
\n\
Try asking me something specific!";

/// The standard cascade. Order is the matching policy.
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(QueryIntent::ItemLookup, match_item, describe_item),
        IntentRule::new(QueryIntent::CategoryLookup, match_category, list_category),
        IntentRule::new(QueryIntent::OutOfStock, match_out_of_stock, list_out_of_stock),
        IntentRule::new(QueryIntent::LowStock, match_low_stock, list_low_stock),
        IntentRule::new(QueryIntent::Totals, match_totals, summarize_totals),
        IntentRule::new(QueryIntent::Help, match_anything, help),
    ]
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

// Item name contains the query, not the other way around.
fn match_item<'a>(ctx: &MatchContext<'a>) -> Option<Capture<'a>> {
    ctx.items
        .iter()
        .find(|item| item.name.to_lowercase().contains(ctx.query))
        .map(Capture::Item)
}

fn describe_item<'a>(_ctx: &MatchContext<'a>, capture: Capture<'a>) -> String {
    let Capture::Item(item) = capture else {
        return HELP_TEXT.to_string();
    };
    format!(
        "{} is currently {}. Quantity: {} units. Category: {}. Threshold: {} units.",
        item.name,
        item.status().phrase(),
        item.quantity,
        item.category,
        item.threshold
    )
}

// Only the first vocabulary hit is tried; if it lists nothing the cascade moves on.
fn match_category<'a>(ctx: &MatchContext<'a>) -> Option<Capture<'a>> {
    let term = ctx
        .vocabulary
        .iter()
        .find(|term| ctx.query.contains(term.as_str()))?;
    ctx.items
        .iter()
        .any(|item| item.category.to_lowercase().contains(term.as_str()))
        .then_some(Capture::Category(term.as_str()))
}

fn list_category<'a>(ctx: &MatchContext<'a>, capture: Capture<'a>) -> String {
    let Capture::Category(term) = capture else {
        return HELP_TEXT.to_string();
    };
    let listing = ctx
        .items
        .iter()
        .filter(|item| item.category.to_lowercase().contains(term))
        .map(|item| {
            format!(
                "{} ({} units, {})",
                item.name,
                item.quantity,
                item.status().phrase()
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Items in {term}: {listing}")
}

fn match_out_of_stock<'a>(ctx: &MatchContext<'a>) -> Option<Capture<'a>> {
    contains_any(ctx.query, &["out of stock", "out-of-stock"]).then_some(Capture::Query)
}

fn list_out_of_stock<'a>(ctx: &MatchContext<'a>, _capture: Capture<'a>) -> String {
    let names: Vec<&str> = ctx
        .items
        .iter()
        .filter(|item| item.status() == StockStatus::OutOfStock)
        .map(|item| item.name.as_str())
        .collect();
    if names.is_empty() {
        "All items are currently in stock!".to_string()
    } else {
        format!("Out of stock items: {}", names.join(", "))
    }
}

fn match_low_stock<'a>(ctx: &MatchContext<'a>) -> Option<Capture<'a>> {
    contains_any(ctx.query, &["low stock", "low-stock"]).then_some(Capture::Query)
}

fn list_low_stock<'a>(ctx: &MatchContext<'a>, _capture: Capture<'a>) -> String {
    let entries: Vec<String> = ctx
        .items
        .iter()
        .filter(|item| item.status() == StockStatus::LowStock)
        .map(|item| format!("{} ({} units)", item.name, item.quantity))
        .collect();
    if entries.is_empty() {
        "No items are currently low in stock.".to_string()
    } else {
        format!("Low stock items: {}", entries.join(", "))
    }
}

fn match_totals<'a>(ctx: &MatchContext<'a>) -> Option<Capture<'a>> {
    contains_any(ctx.query, &["total", "how many", "count"]).then_some(Capture::Query)
}

fn summarize_totals<'a>(ctx: &MatchContext<'a>, _capture: Capture<'a>) -> String {
    let stats = aggregate(ctx.items);
    format!(
        "Total items: {}. In stock: {}, Low stock: {}, Out of stock: {}",
        stats.total, stats.in_stock, stats.low_stock, stats.out_of_stock
    )
}

fn match_anything<'a>(_ctx: &MatchContext<'a>) -> Option<Capture<'a>> {
    Some(Capture::Query)
}

fn help<'a>(_ctx: &MatchContext<'a>, _capture: Capture<'a>) -> String {
    HELP_TEXT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<String> {
        DEFAULT_CATEGORY_VOCABULARY
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn rule_order_is_fixed() {
        let intents: Vec<QueryIntent> = default_rules().iter().map(|r| r.intent).collect();
        assert_eq!(
            intents,
            vec![
                QueryIntent::ItemLookup,
                QueryIntent::CategoryLookup,
                QueryIntent::OutOfStock,
                QueryIntent::LowStock,
                QueryIntent::Totals,
                QueryIntent::Help,
            ]
        );
    }

    #[test]
    fn category_term_without_items_does_not_fire() {
        let items = vec![Item::new(1, "Bandages", "First Aid", 3, 1)];
        let vocab = vocabulary();
        let ctx = MatchContext {
            query: "antibiotics count",
            items: &items,
            vocabulary: &vocab,
        };
        assert!(match_category(&ctx).is_none());
        assert!(match_totals(&ctx).is_some());
    }

    #[test]
    fn help_text_uses_line_breaks() {
        assert!(HELP_TEXT.lines().count() >= 6);
        assert!(HELP_TEXT.contains("\n- Checking stock status"));
    }
}
