//! `courier-core` — domain building blocks shared by the inventory model and the CLI.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod name;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use name::ItemName;
pub use value_object::ValueObject;

/// Quantity of a single item type. Stock never goes negative.
pub type Quantity = u64;
