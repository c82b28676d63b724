//! Packing Summary
//!
//! Footer statistics derived from the current list.

use std::fmt;

use crate::list::PackingList;

/// Outcome of [`stats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Nothing on the list yet
    Empty,
    /// Rounded percentage reached 100
    Complete,
    InProgress {
        total: usize,
        packed: usize,
        percentage: u32,
    },
}

/// Summarise packing progress.
///
/// The percentage rounds half up (1 of 8 packed is 13%). Because the
/// check runs on the rounded value, 199 of 200 already counts as complete.
pub fn stats(list: &PackingList) -> Summary {
    let total = list.len();
    if total == 0 {
        return Summary::Empty;
    }
    let packed = list.packed_count();
    let percentage = percent_half_up(packed, total);
    if percentage == 100 {
        Summary::Complete
    } else {
        Summary::InProgress {
            total,
            packed,
            percentage,
        }
    }
}

/// round(part / whole * 100) with ties going up; `whole` is non-zero
fn percent_half_up(part: usize, whole: usize) -> u32 {
    let scaled = part as u64 * 200 + whole as u64;
    (scaled / (whole as u64 * 2)) as u32
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Empty => f.write_str("Start adding some items to your packing list 🚀"),
            Summary::Complete => f.write_str("You got everything! Ready to go ✈️"),
            Summary::InProgress {
                total,
                packed,
                percentage,
            } => write!(
                f,
                "💼 You have {total} items on your list, and you already packed {packed} ({percentage}%)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemId};

    fn list_with(packed: usize, total: usize) -> PackingList {
        (0..total)
            .map(|i| Item {
                packed: i < packed,
                ..Item::new(ItemId(i as u64), format!("item {i}"), 1)
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(stats(&PackingList::new()), Summary::Empty);
    }

    #[test]
    fn test_half_packed() {
        assert_eq!(
            stats(&list_with(1, 2)),
            Summary::InProgress { total: 2, packed: 1, percentage: 50 }
        );
    }

    #[test]
    fn test_all_packed_is_complete() {
        assert_eq!(stats(&list_with(3, 3)), Summary::Complete);
    }

    #[test]
    fn test_nothing_packed() {
        assert_eq!(
            stats(&list_with(0, 4)),
            Summary::InProgress { total: 4, packed: 0, percentage: 0 }
        );
    }

    #[test]
    fn test_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(percent_half_up(1, 8), 13);
        // 3/8 = 37.5%
        assert_eq!(percent_half_up(3, 8), 38);
        // 1/3 = 33.33%
        assert_eq!(percent_half_up(1, 3), 33);
        // 2/3 = 66.67%
        assert_eq!(percent_half_up(2, 3), 67);
    }

    #[test]
    fn test_rounding_to_hundred_is_complete() {
        assert_eq!(stats(&list_with(199, 200)), Summary::Complete);
    }

    #[test]
    fn test_summary_messages() {
        assert_eq!(
            Summary::Empty.to_string(),
            "Start adding some items to your packing list 🚀"
        );
        assert_eq!(Summary::Complete.to_string(), "You got everything! Ready to go ✈️");
        assert_eq!(
            Summary::InProgress { total: 2, packed: 1, percentage: 50 }.to_string(),
            "💼 You have 2 items on your list, and you already packed 1 (50%)"
        );
    }
}
