//! Item Entity
//!
//! One packing entry plus the draft the entry form builds it from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListResult};

/// Opaque item identifier, unique within a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single packing entry
///
/// Only `packed` ever changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// Create an unpacked item
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Copy of this item with `packed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }

    /// Row label, e.g. "2 Passports"
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }
}

/// Pending entry captured by the add form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub description: String,
    pub quantity: u32,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
        }
    }
}

impl ItemDraft {
    pub fn new(description: impl Into<String>, quantity: u32) -> Self {
        Self {
            description: description.into(),
            quantity,
        }
    }

    /// Turn the draft into an item under `id`.
    ///
    /// Callers drop the submission on `Err`; nothing is surfaced to the user.
    pub fn build(&self, id: ItemId) -> ListResult<Item> {
        if self.description.is_empty() {
            return Err(ListError::EmptyDescription);
        }
        if self.quantity == 0 {
            return Err(ListError::ZeroQuantity);
        }
        Ok(Item::new(id, self.description.clone(), self.quantity))
    }
}

/// Monotonic id source
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdAllocator {
    /// Seed the allocator, e.g. from a millisecond timestamp
    pub fn starting_at(seed: u64) -> Self {
        Self { next: seed }
    }

    pub fn next(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}
