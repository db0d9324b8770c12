//! Booking a delivery against stock and the supplier's balance.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::Rejection;
use stockroom_events::Event;
use stockroom_inventory::{Item, ItemId};
use stockroom_parties::{Supplier, SupplierId};

use crate::delivery::Delivery;

/// Why a delivery could not be booked. Neither entity was changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("delivery does not reference an item")]
    NoItem,

    #[error("delivery is for item {expected}, but item {actual} was given")]
    WrongItem { expected: ItemId, actual: ItemId },

    #[error("item {item} has no supplier")]
    NoSupplier { item: ItemId },

    #[error("item {item} is supplied by {expected}, but supplier {actual} was given")]
    WrongSupplier {
        item: ItemId,
        expected: SupplierId,
        actual: SupplierId,
    },

    #[error("stock increase rejected: {0}")]
    StockRejected(Rejection),

    #[error("delivery cost does not fit the supplier balance")]
    CostOverflow,
}

/// Event: a delivery was booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReconciled {
    pub item_id: ItemId,
    pub supplier_id: SupplierId,
    pub delivered_on: NaiveDate,
    pub quantity: i64,
    pub unit_cost_price: Decimal,
    pub cost: Decimal,
    pub stock_before: i64,
    pub stock_after: i64,
    pub owed_before: Decimal,
    pub owed_after: Decimal,
    pub occurred_at: DateTime<Utc>,
}

impl Event for DeliveryReconciled {
    fn event_type(&self) -> &'static str {
        "purchasing.delivery.reconciled"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Add the delivered quantity to `item` and its cost to `supplier`.
///
/// The cost is `delivery.quantity * item.unit_cost_price()`, priced at the time
/// of the call. Every check runs before the first mutation, so on `Err` both
/// entities are exactly as they were.
pub fn reconcile(
    delivery: &Delivery,
    item: &mut Item,
    supplier: &mut Supplier,
) -> Result<DeliveryReconciled, ReconcileError> {
    let result = apply(delivery, item, supplier);
    match &result {
        Ok(event) => tracing::info!(
            item_id = %event.item_id,
            supplier_id = %event.supplier_id,
            quantity = event.quantity,
            cost = %event.cost,
            owed_after = %event.owed_after,
            "delivery reconciled"
        ),
        Err(err) => tracing::warn!(
            item_id = %item.id_typed(),
            supplier_id = %supplier.id_typed(),
            quantity = delivery.quantity(),
            error = %err,
            "delivery rejected"
        ),
    }
    result
}

fn apply(
    delivery: &Delivery,
    item: &mut Item,
    supplier: &mut Supplier,
) -> Result<DeliveryReconciled, ReconcileError> {
    let expected_item = delivery.item_ref().ok_or(ReconcileError::NoItem)?;
    if expected_item != item.id_typed() {
        return Err(ReconcileError::WrongItem {
            expected: expected_item,
            actual: item.id_typed(),
        });
    }

    let expected_supplier = item.supplier_ref().ok_or(ReconcileError::NoSupplier {
        item: item.id_typed(),
    })?;
    if expected_supplier != supplier.id_typed() {
        return Err(ReconcileError::WrongSupplier {
            item: item.id_typed(),
            expected: expected_supplier,
            actual: supplier.id_typed(),
        });
    }

    let quantity = delivery.quantity();
    if quantity < 0 {
        return Err(ReconcileError::StockRejected(Rejection::Invalid(
            "quantity must be non-negative",
        )));
    }
    if item.quantity_in_stock().checked_add(quantity).is_none() {
        return Err(ReconcileError::StockRejected(Rejection::Overflow));
    }

    let unit_cost_price = item.unit_cost_price();
    let cost = delivery
        .checked_delivery_cost(unit_cost_price)
        .ok_or(ReconcileError::CostOverflow)?;
    let owed_before = supplier.amount_owed();
    if owed_before.checked_add(cost).is_none() {
        return Err(ReconcileError::CostOverflow);
    }

    let stock_before = item.quantity_in_stock();
    item.increase_quantity_in_stock(quantity)
        .map_err(ReconcileError::StockRejected)?;
    // Pre-checked above, so this cannot fail once stock has moved.
    supplier
        .increase_amount_owed(cost)
        .map_err(|_| ReconcileError::CostOverflow)?;

    Ok(DeliveryReconciled {
        item_id: item.id_typed(),
        supplier_id: supplier.id_typed(),
        delivered_on: delivery.date(),
        quantity,
        unit_cost_price,
        cost,
        stock_before,
        stock_after: item.quantity_in_stock(),
        owed_before,
        owed_after: supplier.amount_owed(),
        occurred_at: Utc::now(),
    })
}
