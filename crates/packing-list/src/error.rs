//! List Errors
//!
//! Store operations are total; errors only arise at the item-creation
//! boundary and when parsing sort keys from UI values.

use thiserror::Error;

pub type ListResult<T> = Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("item description must not be empty")]
    EmptyDescription,

    #[error("item quantity must be at least 1")]
    ZeroQuantity,

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}
