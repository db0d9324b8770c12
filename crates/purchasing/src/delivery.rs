use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Outcome, ValueObject};
use stockroom_inventory::ItemId;

/// A quantity of one item arriving on a date.
///
/// The quantity is not validated here; [`crate::reconcile`] refuses negative
/// quantities when the delivery is booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    item_ref: Option<ItemId>,
    date: NaiveDate,
    quantity: i64,
}

impl Delivery {
    pub fn new(item_ref: ItemId, date: NaiveDate, quantity: i64) -> Self {
        Self {
            item_ref: Some(item_ref),
            date,
            quantity,
        }
    }

    /// Delivery dated today (local calendar).
    pub fn arriving_today(item_ref: ItemId, quantity: i64) -> Self {
        Self::new(item_ref, Local::now().date_naive(), quantity)
    }

    pub fn item_ref(&self) -> Option<ItemId> {
        self.item_ref
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn set_item_ref(&mut self, item_ref: ItemId) -> Outcome {
        self.item_ref = Some(item_ref);
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) -> Outcome {
        self.date = date;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i64) -> Outcome {
        self.quantity = quantity;
        Ok(())
    }

    /// `quantity * unit_cost_price`, using the caller's price rather than the item's.
    ///
    /// Panics on decimal overflow; see [`Delivery::checked_delivery_cost`].
    pub fn calculate_delivery_cost(&self, unit_cost_price: Decimal) -> Decimal {
        Decimal::from(self.quantity) * unit_cost_price
    }

    pub fn checked_delivery_cost(&self, unit_cost_price: Decimal) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(unit_cost_price)
    }
}

impl Default for Delivery {
    /// No item, dated today, quantity zero.
    fn default() -> Self {
        Self {
            item_ref: None,
            date: Local::now().date_naive(),
            quantity: 0,
        }
    }
}

impl ValueObject for Delivery {}
