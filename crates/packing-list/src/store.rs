//! Packing List Store
//!
//! Owner of the canonical snapshot. Renderers only ever talk to a
//! [`PackingListActions`] implementation, so the same components work
//! against this plain store or a reactive wrapper around it.

use std::fmt;

use crate::confirm::Confirm;
use crate::item::{Item, ItemId};
use crate::list::PackingList;
use crate::sort::{sorted_view, CaseFoldCollator, Collator, SortKey};
use crate::summary::{stats, Summary};

/// The four list operations and two derived views
pub trait PackingListActions {
    fn add_item(&mut self, item: Item);

    fn delete_item(&mut self, id: ItemId);

    fn toggle_item(&mut self, id: ItemId);

    fn clear(&mut self, confirmed: bool);

    fn sorted_view(&self, key: SortKey) -> PackingList;

    fn stats(&self) -> Summary;

    /// Ask `prompt` and clear on yes. Returns the answer.
    fn clear_with(&mut self, prompt: &dyn Confirm, message: &str) -> bool {
        let confirmed = prompt.confirm(message);
        self.clear(confirmed);
        confirmed
    }
}

pub struct PackingListStore {
    list: PackingList,
    collator: Box<dyn Collator>,
}

impl Default for PackingListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PackingListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackingListStore")
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

impl PackingListStore {
    pub fn new() -> Self {
        Self::with_collator(CaseFoldCollator)
    }

    pub fn with_collator(collator: impl Collator + 'static) -> Self {
        Self {
            list: PackingList::new(),
            collator: Box::new(collator),
        }
    }

    /// Current snapshot
    pub fn list(&self) -> &PackingList {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.list.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.list.get(id)
    }
}

impl PackingListActions for PackingListStore {
    fn add_item(&mut self, item: Item) {
        self.list = self.list.with_item(item);
    }

    fn delete_item(&mut self, id: ItemId) {
        self.list = self.list.without_item(id);
    }

    fn toggle_item(&mut self, id: ItemId) {
        self.list = self.list.with_toggled(id);
    }

    fn clear(&mut self, confirmed: bool) {
        self.list = self.list.cleared(confirmed);
    }

    fn sorted_view(&self, key: SortKey) -> PackingList {
        sorted_view(&self.list, key, self.collator.as_ref())
    }

    fn stats(&self) -> Summary {
        stats(&self.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn descriptions(list: &PackingList) -> Vec<&str> {
        list.iter().map(|item| item.description.as_str()).collect()
    }

    /// Passports (unpacked) and Socks (packed)
    fn trip() -> PackingListStore {
        let mut store = PackingListStore::new();
        store.add_item(Item::new(ItemId(1), "Passports", 2));
        store.add_item(Item {
            packed: true,
            ..Item::new(ItemId(2), "Socks", 12)
        });
        store
    }

    #[test]
    fn test_starts_empty() {
        let store = PackingListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.stats(), Summary::Empty);
    }

    #[test]
    fn test_two_items_half_packed() {
        let store = trip();
        assert_eq!(
            store.stats(),
            Summary::InProgress { total: 2, packed: 1, percentage: 50 }
        );
    }

    #[test]
    fn test_toggle_to_complete() {
        let mut store = trip();
        store.toggle_item(ItemId(1));
        assert!(store.get(ItemId(1)).unwrap().packed);
        assert_eq!(store.stats(), Summary::Complete);
    }

    #[test]
    fn test_sort_by_description() {
        let store = trip();
        let sorted = store.sorted_view(SortKey::Description);
        assert_eq!(descriptions(&sorted), vec!["Passports", "Socks"]);
    }

    #[test]
    fn test_sort_by_packed() {
        let store = trip();
        let sorted = store.sorted_view(SortKey::Packed);
        let packed: Vec<_> = sorted.iter().map(|item| (item.description.as_str(), item.packed)).collect();
        assert_eq!(packed, vec![("Passports", false), ("Socks", true)]);
    }

    #[test]
    fn test_clear_declined_then_confirmed() {
        let mut store = trip();
        let before = store.list().clone();
        store.clear(false);
        assert_eq!(store.list(), &before);
        store.clear(true);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_with_prompt() {
        let mut store = trip();
        let asked = RefCell::new(Vec::new());
        let decline = |message: &str| {
            asked.borrow_mut().push(message.to_string());
            false
        };
        assert!(!store.clear_with(&decline, "Are you sure you want to delete all items?"));
        assert_eq!(store.len(), 2);
        assert_eq!(
            asked.borrow().clone(),
            vec!["Are you sure you want to delete all items?".to_string()]
        );

        assert!(store.clear_with(&|_: &str| true, "again"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_custom_collator() {
        let mut store = PackingListStore::with_collator(|a: &str, b: &str| b.cmp(a));
        store.add_item(Item::new(ItemId(1), "Apple", 1));
        store.add_item(Item::new(ItemId(2), "Banana", 1));
        let sorted = store.sorted_view(SortKey::Description);
        assert_eq!(descriptions(&sorted), vec!["Banana", "Apple"]);
    }
}
