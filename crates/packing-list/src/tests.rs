//! Property Tests
//!
//! Invariants over arbitrary add/delete/toggle sequences.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{sorted_view, stats, CaseFoldCollator, Item, ItemId, PackingList, SortKey, Summary};

#[derive(Debug, Clone)]
enum Op {
    Add(String, bool),
    Delete(u64),
    Toggle(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-dA-D]{0,3}", any::<bool>()).prop_map(|(d, p)| Op::Add(d, p)),
        (0u64..12).prop_map(Op::Delete),
        (0u64..12).prop_map(Op::Toggle),
    ]
}

fn list() -> impl Strategy<Value = PackingList> {
    prop::collection::vec(("[a-c]{1,2}", any::<bool>()), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (description, packed))| Item {
                packed,
                ..Item::new(ItemId(i as u64), description, 1)
            })
            .collect::<PackingList>()
    })
}

fn ids(list: &PackingList) -> Vec<ItemId> {
    list.iter().map(|item| item.id).collect()
}

proptest! {
    #[test]
    fn prop_only_live_ids_remain(ops in prop::collection::vec(op(), 0..40)) {
        let mut list = PackingList::new();
        let mut live = BTreeSet::new();
        let mut next = 0u64;
        for op in ops {
            match op {
                Op::Add(description, packed) => {
                    let item = Item { packed, ..Item::new(ItemId(next), description, 1) };
                    live.insert(ItemId(next));
                    next += 1;
                    list = list.with_item(item);
                }
                Op::Delete(id) => {
                    live.remove(&ItemId(id));
                    list = list.without_item(ItemId(id));
                }
                Op::Toggle(id) => list = list.with_toggled(ItemId(id)),
            }
        }
        let remaining: BTreeSet<_> = ids(&list).into_iter().collect();
        prop_assert_eq!(remaining.len(), list.len());
        prop_assert_eq!(remaining, live);
    }

    #[test]
    fn prop_delete_missing_is_noop(list in list()) {
        prop_assert_eq!(list.without_item(ItemId(1_000)), list);
    }

    #[test]
    fn prop_double_toggle_is_identity(list in list(), id in 0u64..14) {
        prop_assert_eq!(list.with_toggled(ItemId(id)).with_toggled(ItemId(id)), list);
    }

    #[test]
    fn prop_input_view_is_identity(list in list()) {
        prop_assert_eq!(sorted_view(&list, SortKey::Input, &CaseFoldCollator), list);
    }

    #[test]
    fn prop_sort_is_stable_permutation(list in list()) {
        for key in [SortKey::Description, SortKey::Packed] {
            let sorted = sorted_view(&list, key, &CaseFoldCollator);
            let mut before = ids(&list);
            let mut after = ids(&sorted);
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);

            // ids were assigned in insertion order, so equal keys must keep ascending ids
            for pair in sorted.items().windows(2) {
                let same_key = match key {
                    SortKey::Description => pair[0].description == pair[1].description,
                    _ => pair[0].packed == pair[1].packed,
                };
                if same_key {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }

    #[test]
    fn prop_stats_is_total(list in list()) {
        match stats(&list) {
            Summary::Empty => prop_assert!(list.is_empty()),
            Summary::Complete => prop_assert!(!list.is_empty()),
            Summary::InProgress { total, packed, percentage } => {
                prop_assert_eq!(total, list.len());
                prop_assert!(packed < total);
                prop_assert!(percentage < 100);
            }
        }
    }

    #[test]
    fn prop_delete_everything_is_empty(list in list()) {
        let emptied = ids(&list)
            .into_iter()
            .fold(list.clone(), |acc, id| acc.without_item(id));
        prop_assert!(emptied.is_empty());
        prop_assert_eq!(stats(&emptied), Summary::Empty);
    }
}
