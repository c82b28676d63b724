//! Sort Projection
//!
//! Derived ordering of a list for display. The underlying list is never
//! reordered; every key works on a copy and ties keep input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ListError;
use crate::list::PackingList;

/// Display ordering selected in the list toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Insertion order
    #[default]
    Input,
    /// Ascending by description, locale-aware
    Description,
    /// Unpacked first
    Packed,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Input, SortKey::Description, SortKey::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Input => "input",
            SortKey::Description => "description",
            SortKey::Packed => "packed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Input => "Sort by input order",
            SortKey::Description => "Sort by description",
            SortKey::Packed => "Sort by packed status",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(SortKey::Input),
            "description" => Ok(SortKey::Description),
            "packed" => Ok(SortKey::Packed),
            other => Err(ListError::UnknownSortKey(other.to_string())),
        }
    }
}

/// String comparison used for description ordering
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Locale-free fallback: case-insensitive first, then exact
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldCollator;

impl Collator for CaseFoldCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}

/// Project `list` into display order for `key`
pub fn sorted_view(list: &PackingList, key: SortKey, collator: &dyn Collator) -> PackingList {
    let mut items = list.items().to_vec();
    match key {
        SortKey::Input => {}
        // `sort_by` is stable, which keeps equal keys in insertion order
        SortKey::Description => {
            items.sort_by(|a, b| collator.compare(&a.description, &b.description))
        }
        SortKey::Packed => items.sort_by_key(|item| item.packed),
    }
    PackingList::from(items)
}
