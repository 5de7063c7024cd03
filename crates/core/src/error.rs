//! Domain error model.

use thiserror::Error;

use crate::Quantity;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// These are routine, expected outcomes of an `add`: callers branch on them
/// (report to the user, retry with a smaller quantity) rather than abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The projected total would exceed the inventory's capacity.
    #[error("capacity exceeded: requested {requested}, free space {free_space}")]
    CapacityExceeded {
        requested: Quantity,
        free_space: Quantity,
    },

    /// The inventory already tracks its maximum number of distinct items and
    /// the incoming item is new.
    #[error("too many item types: limit of {limit} distinct items reached")]
    TooManyItemTypes { limit: usize },

    /// An item name failed validation (e.g. empty input).
    #[error("invalid item name: {0}")]
    InvalidItemName(String),
}

impl InventoryError {
    pub fn capacity_exceeded(requested: Quantity, free_space: Quantity) -> Self {
        Self::CapacityExceeded {
            requested,
            free_space,
        }
    }

    pub fn too_many_item_types(limit: usize) -> Self {
        Self::TooManyItemTypes { limit }
    }

    pub fn invalid_item_name(msg: impl Into<String>) -> Self {
        Self::InvalidItemName(msg.into())
    }
}
