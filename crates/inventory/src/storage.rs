use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use courier_core::{InventoryError, InventoryResult, ItemName, Quantity};

/// Distinct item types a store-style inventory may track at once.
pub const STORE_MAX_ITEM_TYPES: usize = 5;

/// Constraints fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLimits {
    /// Maximum total summed quantity.
    pub capacity: Quantity,
    /// Maximum number of distinct item names; `None` means unlimited.
    pub max_item_types: Option<usize>,
}

impl InventoryLimits {
    /// Limits with no cap on distinct item types.
    pub fn capacity_only(capacity: Quantity) -> Self {
        Self {
            capacity,
            max_item_types: None,
        }
    }

    /// Limits with a cap on distinct item types. A limit of `0` means unlimited.
    pub fn with_item_types(capacity: Quantity, max_item_types: usize) -> Self {
        Self {
            capacity,
            max_item_types: (max_item_types > 0).then_some(max_item_types),
        }
    }
}

/// Capacity-bounded mapping from item name to quantity.
///
/// Invariant: the summed quantity never exceeds `limits.capacity`. When
/// `limits.max_item_types` is set, the number of tracked names never exceeds it.
/// Names whose stock dropped to zero stay tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    label: String,
    limits: InventoryLimits,
    items: BTreeMap<ItemName, Quantity>,
}

impl Inventory {
    pub fn new(label: impl Into<String>, limits: InventoryLimits) -> Self {
        Self {
            label: label.into(),
            limits,
            items: BTreeMap::new(),
        }
    }

    /// Warehouse-style inventory: capacity only.
    pub fn warehouse(capacity: Quantity) -> Self {
        Self::new("warehouse", InventoryLimits::capacity_only(capacity))
    }

    /// Store-style inventory: capacity plus [`STORE_MAX_ITEM_TYPES`] distinct items.
    pub fn store(capacity: Quantity) -> Self {
        Self::new(
            "store",
            InventoryLimits::with_item_types(capacity, STORE_MAX_ITEM_TYPES),
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn limits(&self) -> InventoryLimits {
        self.limits
    }

    pub fn capacity(&self) -> Quantity {
        self.limits.capacity
    }

    /// Increase the stock of `name` by `quantity`.
    ///
    /// The distinct-type limit is checked before the capacity limit. On error
    /// the inventory is left unchanged.
    pub fn add(&mut self, name: &ItemName, quantity: Quantity) -> InventoryResult<()> {
        if let Some(limit) = self.limits.max_item_types {
            if !self.items.contains_key(name) && self.items.len() >= limit {
                return Err(InventoryError::too_many_item_types(limit));
            }
        }

        let free_space = self.free_space();
        if quantity > free_space {
            return Err(InventoryError::capacity_exceeded(quantity, free_space));
        }

        *self.items.entry(name.clone()).or_insert(0) += quantity;
        tracing::debug!(inventory = %self.label, item = %name, quantity, "stock added");
        Ok(())
    }

    /// Decrease the stock of `name` by `quantity`, clamped at zero.
    ///
    /// Unknown names are a no-op. Returns how much stock was actually removed.
    pub fn remove(&mut self, name: &ItemName, quantity: Quantity) -> Quantity {
        let Some(stock) = self.items.get_mut(name) else {
            tracing::debug!(inventory = %self.label, item = %name, "remove of untracked item ignored");
            return 0;
        };

        let removed = quantity.min(*stock);
        *stock -= removed;
        tracing::debug!(inventory = %self.label, item = %name, requested = quantity, removed, "stock removed");
        removed
    }

    /// Summed quantity across all items.
    pub fn used_space(&self) -> Quantity {
        self.items.values().sum()
    }

    pub fn free_space(&self) -> Quantity {
        self.limits.capacity.saturating_sub(self.used_space())
    }

    /// Read-only view of the current stock, ordered by name.
    pub fn items(&self) -> &BTreeMap<ItemName, Quantity> {
        &self.items
    }

    /// Current stock of `name` (zero when untracked).
    pub fn quantity_of(&self, name: &ItemName) -> Quantity {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Number of tracked names, including those whose stock is zero.
    pub fn unique_items_count(&self) -> usize {
        self.items.len()
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            label: self.label.clone(),
            capacity: self.limits.capacity,
            free_space: self.free_space(),
            items: self
                .items
                .iter()
                .map(|(name, quantity)| SnapshotLine {
                    name: name.clone(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }
}

/// Owned, serializable copy of an inventory's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub label: String,
    pub capacity: Quantity,
    pub free_space: Quantity,
    pub items: Vec<SnapshotLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    pub name: ItemName,
    pub quantity: Quantity,
}
