use crate::inventory::{aggregate, categories, Inventory, Item, ItemId, Stats};
use crate::ui::dashboard::form::ItemForm;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardMode {
    #[default]
    Browse,
    Adding(ItemForm),
    Editing {
        id: ItemId,
        form: ItemForm,
    },
    /// Delete requested; waits for an explicit yes/no.
    ConfirmDelete {
        id: ItemId,
    },
}

/// Management view: statistics, charts and the editable table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub inventory: Inventory,
    /// Row index into the table, which shows collection order.
    pub selected: usize,
    pub mode: DashboardMode,
    pub notice: Option<String>,
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.inventory.items().get(self.selected)
    }

    pub fn stats(&self) -> Stats {
        aggregate(self.inventory.items())
    }

    pub fn categories(&self) -> Vec<String> {
        categories(self.inventory.items())
    }

    pub fn form(&self) -> Option<&ItemForm> {
        match &self.mode {
            DashboardMode::Adding(form) | DashboardMode::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self.mode, DashboardMode::Browse)
    }
}
