//! Global Application State Store
//!
//! Uses Leptos reactive_stores so every component that reads the list
//! re-renders when a transition replaces it.

use leptos::prelude::*;
use reactive_stores::Store;

use packing_list::{sorted_view, stats, Item, ItemId, PackingList, PackingListActions, SortKey, Summary};

use crate::collate::LocaleCollator;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current snapshot; replaced wholesale by every transition
    pub list: PackingList,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Copyable handle the components call into
#[derive(Clone, Copy)]
pub struct PackingStore {
    store: AppStore,
    collator: StoredValue<LocaleCollator>,
}

impl PackingStore {
    pub fn new(collator: LocaleCollator) -> Self {
        Self {
            store: Store::new(AppState::default()),
            collator: StoredValue::new(collator),
        }
    }

    /// Swap in the next snapshot
    fn replace(&self, next: PackingList) {
        *self.store.list().write() = next;
    }
}

/// Get the packing store from context
pub fn use_packing_store() -> PackingStore {
    expect_context::<PackingStore>()
}

impl PackingListActions for PackingStore {
    fn add_item(&mut self, item: Item) {
        let next = self.store.list().read().with_item(item);
        self.replace(next);
    }

    fn delete_item(&mut self, id: ItemId) {
        let next = self.store.list().read().without_item(id);
        self.replace(next);
    }

    fn toggle_item(&mut self, id: ItemId) {
        let next = self.store.list().read().with_toggled(id);
        self.replace(next);
    }

    fn clear(&mut self, confirmed: bool) {
        let next = self.store.list().read().cleared(confirmed);
        self.replace(next);
    }

    fn sorted_view(&self, key: SortKey) -> PackingList {
        let list = self.store.list().read();
        self.collator.with_value(|collator| sorted_view(&list, key, collator))
    }

    fn stats(&self) -> Summary {
        stats(&self.store.list().read())
    }
}
