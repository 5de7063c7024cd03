//! Inventory domain module.
//!
//! This crate contains the capacity-checked storage model and the courier
//! transfer between two storages, implemented as plain in-memory logic
//! (no IO, no persistence).

pub mod storage;
pub mod transfer;

pub use storage::{Inventory, InventoryLimits, InventorySnapshot, SnapshotLine, STORE_MAX_ITEM_TYPES};
pub use transfer::{TransferError, TransferReceipt, transfer};
