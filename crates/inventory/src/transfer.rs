//! Courier transfer: take stock out of one inventory and put it into another.

use thiserror::Error;

use courier_core::{InventoryError, ItemName, Quantity};

use crate::storage::Inventory;

/// Outcome of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub item: ItemName,
    /// Quantity delivered to the destination.
    pub requested: Quantity,
    /// Quantity the source actually held and gave up (clamped removal).
    pub taken_from_source: Quantity,
}

impl TransferReceipt {
    /// True when the destination received more than the source gave up.
    pub fn overdelivered(&self) -> bool {
        self.taken_from_source < self.requested
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The destination rejected the delivery. The source has already been debited.
    #[error("insufficient destination capacity for {item}")]
    InsufficientDestinationCapacity {
        item: ItemName,
        taken_from_source: Quantity,
        #[source]
        source: InventoryError,
    },
}

impl TransferError {
    pub fn item(&self) -> &ItemName {
        match self {
            TransferError::InsufficientDestinationCapacity { item, .. } => item,
        }
    }
}

/// Move `quantity` of `item` from `source` to `destination`.
///
/// The source removal always happens first and is clamped at zero, so the
/// source never reports insufficient stock and the destination is asked for
/// the full `quantity`. If the destination rejects the delivery the source is
/// NOT restored.
pub fn transfer(
    source: &mut Inventory,
    destination: &mut Inventory,
    item: &ItemName,
    quantity: Quantity,
) -> Result<TransferReceipt, TransferError> {
    let taken_from_source = source.remove(item, quantity);
    tracing::info!(
        from = source.label(),
        item = %item,
        quantity,
        taken_from_source,
        "courier picked up stock"
    );

    if let Err(err) = destination.add(item, quantity) {
        tracing::warn!(
            from = source.label(),
            to = destination.label(),
            item = %item,
            quantity,
            error = %err,
            "delivery rejected; source already debited"
        );
        return Err(TransferError::InsufficientDestinationCapacity {
            item: item.clone(),
            taken_from_source,
            source: err,
        });
    }

    tracing::info!(to = destination.label(), item = %item, quantity, "courier delivered stock");
    Ok(TransferReceipt {
        item: item.clone(),
        requested: quantity,
        taken_from_source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> ItemName {
        ItemName::new(name).unwrap()
    }

    #[test]
    fn transfer_moves_stock_between_inventories() {
        let mut warehouse = Inventory::warehouse(100);
        let mut store = Inventory::store(100);
        warehouse.add(&item("cookies"), 3).unwrap();

        let receipt = transfer(&mut warehouse, &mut store, &item("cookies"), 2).unwrap();

        assert_eq!(receipt.requested, 2);
        assert_eq!(receipt.taken_from_source, 2);
        assert!(!receipt.overdelivered());
        assert_eq!(warehouse.quantity_of(&item("cookies")), 1);
        assert_eq!(store.quantity_of(&item("cookies")), 2);
    }

    #[test]
    fn transfer_of_more_than_held_clamps_source_and_delivers_full_quantity() {
        let mut warehouse = Inventory::warehouse(100);
        let mut store = Inventory::store(100);
        warehouse.add(&item("doggie"), 4).unwrap();

        let receipt = transfer(&mut warehouse, &mut store, &item("doggie"), 10).unwrap();

        assert_eq!(warehouse.quantity_of(&item("doggie")), 0);
        assert_eq!(store.quantity_of(&item("doggie")), 10);
        assert_eq!(receipt.taken_from_source, 4);
        assert!(receipt.overdelivered());
    }

    #[test]
    fn rejected_delivery_does_not_roll_back_source() {
        let mut warehouse = Inventory::warehouse(100);
        let mut store = Inventory::store(5);
        warehouse.add(&item("boxes"), 5).unwrap();
        store.add(&item("cookies"), 3).unwrap();

        let err = transfer(&mut warehouse, &mut store, &item("boxes"), 5).unwrap_err();

        assert_eq!(err.to_string(), "insufficient destination capacity for boxes");
        assert_eq!(err.item(), &item("boxes"));
        match err {
            TransferError::InsufficientDestinationCapacity {
                taken_from_source,
                source,
                ..
            } => {
                assert_eq!(taken_from_source, 5);
                assert_eq!(source, InventoryError::capacity_exceeded(5, 2));
            }
        }
        assert_eq!(warehouse.quantity_of(&item("boxes")), 0);
        assert!(!store.items().contains_key(&item("boxes")));
    }

    #[test]
    fn rejected_by_type_limit_carries_cause() {
        let mut warehouse = Inventory::warehouse(100);
        let mut store = Inventory::store(100);
        for name in ["a", "b", "c", "d", "e"] {
            store.add(&item(name), 1).unwrap();
        }
        warehouse.add(&item("f"), 2).unwrap();

        let err = transfer(&mut warehouse, &mut store, &item("f"), 2).unwrap_err();
        let TransferError::InsufficientDestinationCapacity { source, .. } = err;
        assert_eq!(source, InventoryError::too_many_item_types(5));
        assert_eq!(warehouse.quantity_of(&item("f")), 0);
    }

    #[test]
    fn transfer_of_untracked_item_still_delivers() {
        let mut store = Inventory::store(100);
        let mut warehouse = Inventory::warehouse(100);

        let receipt = transfer(&mut store, &mut warehouse, &item("ghost"), 3).unwrap();

        assert_eq!(receipt.taken_from_source, 0);
        assert!(!store.items().contains_key(&item("ghost")));
        assert_eq!(warehouse.quantity_of(&item("ghost")), 3);
    }
}
