use crate::inventory::{aggregate, Inventory, Item, Stats, ViewQuery};
use crate::ui::mvi::UiState;

/// Browse-only catalog: search, status filter and sort over its own copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub inventory: Inventory,
    pub query: ViewQuery,
    /// Row index into [`CatalogState::visible`].
    pub selected: usize,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    pub fn visible(&self) -> Vec<Item> {
        self.query.apply(self.inventory.items())
    }

    pub fn stats(&self) -> Stats {
        aggregate(self.inventory.items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{seed_items, SortKey, StatusFilter};

    #[test]
    fn defaults_to_name_sort_without_filter() {
        let state = CatalogState::new(Inventory::new(seed_items()));
        assert_eq!(state.query.sort, SortKey::Name);
        assert_eq!(state.query.status, StatusFilter::All);
        assert_eq!(state.visible().len(), 15);
        assert_eq!(state.visible()[0].name, "Amoxicillin 250mg");
    }
}
