use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{
    DomainError, DomainResult, Entity, Outcome, Rejection, eq_ignore_case, replace_if_changed,
};
use stockroom_parties::SupplierId;

use crate::registry::ItemIdRegistry;

/// Item identifier, issued by [`ItemIdRegistry`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Attributes for an explicitly constructed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity_in_stock: i64,
    pub reorder_level: i64,
    pub reorder_quantity: i64,
    pub unit_cost_price: Decimal,
    pub supplier_ref: Option<SupplierId>,
    pub on_order: bool,
}

/// Entity: Item.
///
/// Stock is an `i64` that never goes below zero: every path that changes it
/// checks first. The unit price is positive for every item built through
/// [`Item::create`]; only [`Item::unknown`] starts at zero. Serialize-only,
/// so those two constructors are the only way to get one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity_in_stock: i64,
    reorder_level: i64,
    reorder_quantity: i64,
    unit_cost_price: Decimal,
    supplier_ref: Option<SupplierId>,
    on_order: bool,
}

impl Item {
    /// Item named "Unknown" with zero stock, zero price and no supplier.
    pub fn unknown(registry: &mut ItemIdRegistry) -> Self {
        Self {
            id: registry.allocate(),
            name: "Unknown".to_string(),
            quantity_in_stock: 0,
            reorder_level: 0,
            reorder_quantity: 0,
            unit_cost_price: Decimal::ZERO,
            supplier_ref: None,
            on_order: false,
        }
    }

    /// Validate `new` and issue it an identifier.
    ///
    /// No identifier is consumed when validation fails.
    pub fn create(registry: &mut ItemIdRegistry, new: NewItem) -> DomainResult<Self> {
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if new.quantity_in_stock < 0 {
            return Err(DomainError::validation("quantity in stock cannot be negative"));
        }
        if new.reorder_level < 0 {
            return Err(DomainError::validation("reorder level cannot be negative"));
        }
        if new.reorder_quantity < 0 {
            return Err(DomainError::validation("reorder quantity cannot be negative"));
        }
        if new.unit_cost_price <= Decimal::ZERO {
            return Err(DomainError::validation("unit cost price must be positive"));
        }

        let item = Self {
            id: registry.allocate(),
            name: new.name,
            quantity_in_stock: new.quantity_in_stock,
            reorder_level: new.reorder_level,
            reorder_quantity: new.reorder_quantity,
            unit_cost_price: new.unit_cost_price,
            supplier_ref: new.supplier_ref,
            on_order: new.on_order,
        };
        tracing::debug!(item_id = %item.id, name = %item.name, "item created");
        Ok(item)
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity_in_stock(&self) -> i64 {
        self.quantity_in_stock
    }

    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }

    pub fn reorder_quantity(&self) -> i64 {
        self.reorder_quantity
    }

    pub fn unit_cost_price(&self) -> Decimal {
        self.unit_cost_price
    }

    pub fn supplier_ref(&self) -> Option<SupplierId> {
        self.supplier_ref
    }

    pub fn is_on_order(&self) -> bool {
        self.on_order
    }

    /// Stock has fallen below the reorder level. Advisory only.
    pub fn needs_reorder(&self) -> bool {
        self.quantity_in_stock < self.reorder_level
    }

    /// Rename unless `name` is empty or matches the current name ignoring case.
    pub fn set_name(&mut self, name: impl Into<String>) -> Outcome {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Rejection::Invalid("name cannot be empty"));
        }
        if eq_ignore_case(&name, &self.name) {
            return Err(Rejection::Unchanged);
        }
        self.name = name;
        Ok(())
    }

    pub fn set_quantity_in_stock(&mut self, quantity: i64) -> Outcome {
        if quantity < 0 {
            return Err(Rejection::Invalid("quantity in stock cannot be negative"));
        }
        replace_if_changed(&mut self.quantity_in_stock, quantity)
    }

    pub fn set_reorder_level(&mut self, level: i64) -> Outcome {
        if level < 0 {
            return Err(Rejection::Invalid("reorder level cannot be negative"));
        }
        replace_if_changed(&mut self.reorder_level, level)
    }

    pub fn set_reorder_quantity(&mut self, quantity: i64) -> Outcome {
        if quantity < 0 {
            return Err(Rejection::Invalid("reorder quantity cannot be negative"));
        }
        replace_if_changed(&mut self.reorder_quantity, quantity)
    }

    pub fn set_unit_cost_price(&mut self, price: Decimal) -> Outcome {
        if price <= Decimal::ZERO {
            return Err(Rejection::Invalid("unit cost price must be positive"));
        }
        replace_if_changed(&mut self.unit_cost_price, price)
    }

    /// Point the item at another supplier.
    pub fn set_supplier_ref(&mut self, supplier: SupplierId) -> Outcome {
        replace_if_changed(&mut self.supplier_ref, Some(supplier))?;
        tracing::debug!(item_id = %self.id, supplier_id = %supplier, "item supplier reassigned");
        Ok(())
    }

    pub fn set_on_order(&mut self, on_order: bool) -> Outcome {
        replace_if_changed(&mut self.on_order, on_order)
    }

    /// Add `quantity` units. Zero is accepted and changes nothing.
    pub fn increase_quantity_in_stock(&mut self, quantity: i64) -> Outcome {
        if quantity < 0 {
            return Err(Rejection::Invalid("quantity must be non-negative"));
        }
        self.quantity_in_stock = self
            .quantity_in_stock
            .checked_add(quantity)
            .ok_or(Rejection::Overflow)?;
        tracing::debug!(
            item_id = %self.id,
            quantity,
            quantity_in_stock = self.quantity_in_stock,
            "stock increased"
        );
        Ok(())
    }

    /// Remove `quantity` units if that many are on hand.
    pub fn decrease_quantity_in_stock(&mut self, quantity: i64) -> Outcome {
        if quantity < 0 {
            return Err(Rejection::Invalid("quantity must be non-negative"));
        }
        if quantity > self.quantity_in_stock {
            return Err(Rejection::InsufficientStock {
                requested: quantity,
                available: self.quantity_in_stock,
            });
        }
        self.quantity_in_stock -= quantity;
        tracing::debug!(
            item_id = %self.id,
            quantity,
            quantity_in_stock = self.quantity_in_stock,
            "stock decreased"
        );
        Ok(())
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use stockroom_core::AggregateId;

    fn test_registry() -> ItemIdRegistry {
        ItemIdRegistry::seeded(2024)
    }

    fn test_supplier_id() -> SupplierId {
        SupplierId::new(AggregateId::new())
    }

    fn new_item() -> NewItem {
        NewItem {
            name: "Creatine".to_string(),
            quantity_in_stock: 100,
            reorder_level: 50,
            reorder_quantity: 100,
            unit_cost_price: dec!(32.5),
            supplier_ref: Some(test_supplier_id()),
            on_order: false,
        }
    }

    fn item_with_stock(stock: i64) -> Item {
        let mut registry = test_registry();
        Item::create(
            &mut registry,
            NewItem {
                quantity_in_stock: stock,
                ..new_item()
            },
        )
        .unwrap()
    }

    #[test]
    fn unknown_item_has_defaults_and_an_id() {
        let mut registry = test_registry();
        let item = Item::unknown(&mut registry);

        assert_eq!(item.name(), "Unknown");
        assert_eq!(item.quantity_in_stock(), 0);
        assert_eq!(item.reorder_level(), 0);
        assert_eq!(item.reorder_quantity(), 0);
        assert_eq!(item.unit_cost_price(), Decimal::ZERO);
        assert_eq!(item.supplier_ref(), None);
        assert!(!item.is_on_order());
        assert!(registry.is_issued(item.id_typed()));
    }

    #[test]
    fn create_keeps_explicit_values() {
        let mut registry = test_registry();
        let new = new_item();
        let item = Item::create(&mut registry, new.clone()).unwrap();

        assert_eq!(item.name(), "Creatine");
        assert_eq!(item.quantity_in_stock(), 100);
        assert_eq!(item.reorder_level(), 50);
        assert_eq!(item.reorder_quantity(), 100);
        assert_eq!(item.unit_cost_price(), dec!(32.5));
        assert_eq!(item.supplier_ref(), new.supplier_ref);
        assert_eq!(*item.id(), item.id_typed());
    }

    #[test]
    fn create_rejects_invalid_values_without_consuming_an_id() {
        let mut registry = test_registry();
        let cases = [
            NewItem {
                name: "  ".to_string(),
                ..new_item()
            },
            NewItem {
                quantity_in_stock: -1,
                ..new_item()
            },
            NewItem {
                reorder_level: -1,
                ..new_item()
            },
            NewItem {
                reorder_quantity: -1,
                ..new_item()
            },
            NewItem {
                unit_cost_price: Decimal::ZERO,
                ..new_item()
            },
        ];

        for new in cases {
            assert!(matches!(
                Item::create(&mut registry, new),
                Err(DomainError::Validation(_))
            ));
        }
        assert_eq!(registry.issued_count(), 0);
    }

    #[test]
    fn items_from_one_registry_never_share_an_id() {
        let mut registry = test_registry();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..500 {
            assert!(ids.insert(Item::unknown(&mut registry).id_typed()));
        }
    }

    #[test]
    fn set_name_ignores_case_and_rejects_empty() {
        let mut item = item_with_stock(10);

        assert_eq!(item.set_name("CREATINE"), Err(Rejection::Unchanged));
        assert_eq!(item.set_name(""), Err(Rejection::Invalid("name cannot be empty")));
        assert_eq!(item.name(), "Creatine");

        assert_eq!(item.set_name("Creatine HCl"), Ok(()));
        assert_eq!(item.name(), "Creatine HCl");
    }

    #[test]
    fn set_reorder_level_twice_reports_unchanged_the_second_time() {
        let mut item = item_with_stock(10);

        assert_eq!(item.set_reorder_level(75), Ok(()));
        assert_eq!(item.set_reorder_level(75), Err(Rejection::Unchanged));
        assert_eq!(item.reorder_level(), 75);
    }

    #[test]
    fn numeric_setters_reject_out_of_range_values() {
        let mut item = item_with_stock(10);

        assert!(matches!(item.set_quantity_in_stock(-3), Err(Rejection::Invalid(_))));
        assert!(matches!(item.set_reorder_level(-1), Err(Rejection::Invalid(_))));
        assert!(matches!(item.set_reorder_quantity(-1), Err(Rejection::Invalid(_))));
        assert!(matches!(item.set_unit_cost_price(dec!(0)), Err(Rejection::Invalid(_))));
        assert!(matches!(item.set_unit_cost_price(dec!(-2.5)), Err(Rejection::Invalid(_))));

        assert_eq!(item.quantity_in_stock(), 10);
        assert_eq!(item.reorder_level(), 50);
        assert_eq!(item.reorder_quantity(), 100);
        assert_eq!(item.unit_cost_price(), dec!(32.5));
    }

    #[test]
    fn unit_cost_price_compares_by_value() {
        let mut item = item_with_stock(10);
        assert_eq!(item.set_unit_cost_price(dec!(32.50)), Err(Rejection::Unchanged));
        assert_eq!(item.set_unit_cost_price(dec!(30)), Ok(()));
        assert_eq!(item.unit_cost_price(), dec!(30));
    }

    #[test]
    fn supplier_and_flag_setters_report_no_op() {
        let mut item = item_with_stock(10);
        let current = item.supplier_ref().unwrap();
        let other = test_supplier_id();

        assert_eq!(item.set_supplier_ref(current), Err(Rejection::Unchanged));
        assert_eq!(item.set_supplier_ref(other), Ok(()));
        assert_eq!(item.supplier_ref(), Some(other));

        assert_eq!(item.set_on_order(false), Err(Rejection::Unchanged));
        assert_eq!(item.set_on_order(true), Ok(()));
        assert!(item.is_on_order());
    }

    #[test]
    fn decrease_beyond_stock_reports_shortfall() {
        let mut item = item_with_stock(5);
        assert_eq!(
            item.decrease_quantity_in_stock(6),
            Err(Rejection::InsufficientStock {
                requested: 6,
                available: 5
            })
        );
        assert_eq!(item.quantity_in_stock(), 5);

        assert_eq!(item.decrease_quantity_in_stock(5), Ok(()));
        assert_eq!(item.quantity_in_stock(), 0);
    }

    #[test]
    fn increase_rejects_overflow() {
        let mut item = item_with_stock(i64::MAX - 1);
        assert_eq!(item.increase_quantity_in_stock(2), Err(Rejection::Overflow));
        assert_eq!(item.quantity_in_stock(), i64::MAX - 1);
    }

    #[test]
    fn needs_reorder_only_below_level() {
        let mut item = item_with_stock(50);
        assert_eq!(item.reorder_level(), 50);
        assert!(!item.needs_reorder());
        item.decrease_quantity_in_stock(1).unwrap();
        assert!(item.needs_reorder());
    }

    #[test]
    fn create_rejects_negative_stock() {
        let mut registry = test_registry();
        let err = Item::create(
            &mut registry,
            NewItem {
                quantity_in_stock: -5,
                ..new_item()
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::validation("quantity in stock cannot be negative")
        );
        assert_eq!(registry.issued_count(), 0);
    }

    #[test]
    fn serializes_price_as_string() {
        let item = item_with_stock(3);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unit_cost_price"], "32.5");
        assert_eq!(json["quantity_in_stock"], 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: increasing by any non-negative n adds exactly n.
        #[test]
        fn increase_adds_non_negative_quantities(
            stock in 0i64..1_000_000i64,
            n in 0i64..1_000_000i64,
        ) {
            let mut item = item_with_stock(stock);
            prop_assert_eq!(item.increase_quantity_in_stock(n), Ok(()));
            prop_assert_eq!(item.quantity_in_stock(), stock + n);
        }

        /// Property: increasing by a negative n fails and leaves stock alone.
        #[test]
        fn increase_rejects_negative_quantities(
            stock in 0i64..1_000_000i64,
            n in i64::MIN..0i64,
        ) {
            let mut item = item_with_stock(stock);
            prop_assert!(item.increase_quantity_in_stock(n).is_err());
            prop_assert_eq!(item.quantity_in_stock(), stock);
        }

        /// Property: decreasing succeeds exactly when 0 <= n <= stock.
        #[test]
        fn decrease_succeeds_only_within_stock(
            stock in 0i64..10_000i64,
            n in -10_000i64..20_000i64,
        ) {
            let mut item = item_with_stock(stock);
            let result = item.decrease_quantity_in_stock(n);

            if (0..=stock).contains(&n) {
                prop_assert_eq!(result, Ok(()));
                prop_assert_eq!(item.quantity_in_stock(), stock - n);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(item.quantity_in_stock(), stock);
            }
        }

        /// Property: no sequence of adjustments drives stock below zero.
        #[test]
        fn stock_never_goes_negative(
            ops in prop::collection::vec((any::<bool>(), -500i64..500i64), 1..64)
        ) {
            let mut item = item_with_stock(0);
            for (increase, n) in ops {
                let _ = if increase {
                    item.increase_quantity_in_stock(n)
                } else {
                    item.decrease_quantity_in_stock(n)
                };
                let _ = item.set_quantity_in_stock(n);
                prop_assert!(item.quantity_in_stock() >= 0);
            }
        }
    }
}
