//! Application Context
//!
//! Startup config and the id source, provided via Leptos Context API.

use leptos::prelude::*;

use packing_list::{IdAllocator, ItemId};

use crate::config::AppConfig;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    ids: StoredValue<IdAllocator>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            ids: StoredValue::new(IdAllocator::starting_at(id_seed())),
        }
    }

    /// Fresh id for a new item
    pub fn next_id(&self) -> ItemId {
        let mut id = ItemId(0);
        self.ids.update_value(|ids| id = ids.next());
        id
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Millisecond timestamp, so ids stay distinct across reloads
#[cfg(target_arch = "wasm32")]
fn id_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn id_seed() -> u64 {
    1
}
