//! Packing List Value
//!
//! Immutable snapshot of the items. Each transition returns a fresh list
//! and leaves `self` untouched.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackingList {
    items: Vec<Item>,
}

impl PackingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` at the end. The caller supplies a fresh id.
    pub fn with_item(&self, item: Item) -> Self {
        tracing::debug!(id = %item.id, description = %item.description, "add item");
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        Self { items }
    }

    /// Drop the entry with `id`; unknown ids leave the list as is
    pub fn without_item(&self, id: ItemId) -> Self {
        tracing::debug!(%id, "delete item");
        Self {
            items: self.items.iter().filter(|item| item.id != id).cloned().collect(),
        }
    }

    /// Flip `packed` on the entry with `id`
    pub fn with_toggled(&self, id: ItemId) -> Self {
        tracing::debug!(%id, "toggle item");
        Self {
            items: self
                .items
                .iter()
                .map(|item| if item.id == id { item.toggled() } else { item.clone() })
                .collect(),
        }
    }

    /// Empty list if `confirmed`, otherwise an unchanged copy
    pub fn cleared(&self, confirmed: bool) -> Self {
        if confirmed {
            tracing::debug!(removed = self.items.len(), "clear list");
            Self::new()
        } else {
            self.clone()
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|item| item.packed).count()
    }
}

impl From<Vec<Item>> for PackingList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for PackingList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PackingList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
