//! Collection value with create/update/delete transitions.

use serde::{Deserialize, Serialize};

use crate::inventory::draft::ItemDraft;
use crate::inventory::item::{Item, ItemId};

/// Ordered item collection owned by a single page.
///
/// Transitions take `&self` and return a new collection; the receiver is
/// never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Id the next added item will receive: current maximum plus one.
    pub fn next_id(&self) -> ItemId {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Appends a new item built from `draft`.
    ///
    /// Returns an unchanged copy when any draft field is blank.
    pub fn add(&self, draft: &ItemDraft) -> Self {
        if !draft.is_complete() {
            tracing::debug!("Add rejected: draft has blank fields");
            return self.clone();
        }

        let item = Item {
            id: self.next_id(),
            name: draft.name.trim().to_string(),
            category: draft.category.trim().to_string(),
            quantity: draft.parsed_quantity(),
            threshold: draft.parsed_threshold(),
        };
        tracing::info!(id = item.id, name = %item.name, "Item added");

        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Replaces every editable field of the item with `id`.
    pub fn update(&self, id: ItemId, draft: &ItemDraft) -> Self {
        if self.get(id).is_none() {
            tracing::debug!(id = id, "Update ignored: unknown item");
            return self.clone();
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id != id {
                    return item.clone();
                }
                Item {
                    id,
                    name: draft.name.clone(),
                    category: draft.category.clone(),
                    quantity: draft.parsed_quantity(),
                    threshold: draft.parsed_threshold(),
                }
            })
            .collect();
        tracing::info!(id = id, "Item updated");
        Self { items }
    }

    /// Removes the item with `id`. Confirmation is the caller's concern.
    pub fn delete(&self, id: ItemId) -> Self {
        let items: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        if items.len() == self.items.len() {
            tracing::debug!(id = id, "Delete ignored: unknown item");
        } else {
            tracing::info!(id = id, "Item deleted");
        }
        Self { items }
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
