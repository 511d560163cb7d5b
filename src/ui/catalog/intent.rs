use crate::inventory::{SortKey, StatusFilter};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// Appends text to the search term (typed character or paste).
    Type(String),
    Backspace,
    ClearSearch,
    CycleStatus,
    CycleSort,
    SetStatus(StatusFilter),
    SetSort(SortKey),
    MoveUp,
    MoveDown,
}

impl Intent for CatalogIntent {}
