//! Inventory store: items, stock classification and derived views.
//!
//! Every operation here is a pure transformation over a flat list of
//! [`Item`] records. Mutations return a new [`Inventory`] value; derived
//! views (filtered/sorted sequences, statistics, chart series) are
//! recomputed from the list on demand and never stored.
//!
//! ```text
//! ItemDraft ──parse──→ Item ──classify──→ StockStatus
//!                       │
//!        Inventory ─────┼──→ filter_and_sort ──→ Vec<Item>
//!                       └──→ aggregate / by_category / status_distribution
//! ```

mod draft;
mod item;
mod seed;
mod stats;
mod store;
mod view;

pub use draft::{parse_count, ItemDraft};
pub use item::{classify, Item, ItemId, StockStatus};
pub use seed::{consumption_series, seed_items, UsagePoint};
pub use stats::{
    aggregate, by_category, categories, low_stock_alerts, status_distribution, CategorySummary,
    StatusSlice, Stats,
};
pub use store::Inventory;
pub use view::{filter_and_sort, ParseStatusFilterError, SortKey, StatusFilter, ViewQuery};
