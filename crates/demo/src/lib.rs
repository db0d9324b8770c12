//! Sample data for a small supplements shop, booked end to end.
//!
//! Five suppliers, five items and three deliveries. Only the suppliers touched by
//! a delivery are reported.

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use stockroom_inventory::{Item, ItemIdRegistry, NewItem};
use stockroom_parties::Supplier;
use stockroom_purchasing::{Delivery, DeliveryReconciled, reconcile};

const CREDIT_LIMIT: Decimal = dec!(3000);

/// Balance of one supplier around the delivery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierBalance {
    pub supplier: String,
    pub owed_before: Decimal,
    pub owed_after: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub balances: Vec<SupplierBalance>,
    /// Cost of the first delivery at a quoted price of 56.20.
    pub first_delivery_cost: Decimal,
    pub reconciled: Vec<DeliveryReconciled>,
}

fn supplier(name: &str, address: &str, owed: Decimal) -> anyhow::Result<Supplier> {
    Supplier::new(name, address, owed, CREDIT_LIMIT)
        .with_context(|| format!("building supplier {name}"))
}

fn item(
    registry: &mut ItemIdRegistry,
    name: &str,
    stock: i64,
    price: Decimal,
    supplier: &Supplier,
) -> anyhow::Result<Item> {
    Item::create(
        registry,
        NewItem {
            name: name.to_string(),
            quantity_in_stock: stock,
            reorder_level: 50,
            reorder_quantity: 100,
            unit_cost_price: price,
            supplier_ref: Some(supplier.id_typed()),
            on_order: false,
        },
    )
    .with_context(|| format!("building item {name}"))
}

pub fn run(registry: &mut ItemIdRegistry, date: NaiveDate) -> anyhow::Result<Report> {
    let mut s1 = supplier("SUPP111", "A91N4V8", dec!(850))?;
    let mut s2 = supplier("SUPP893", "A87E7Z9", dec!(500))?;
    let mut s3 = supplier("SUPP150", "A93Q7S1", dec!(725))?;
    let s4 = supplier("SUPP999", "A97I8U9", dec!(999))?;
    let s5 = supplier("SUPP001", "A91A1S1", dec!(1078))?;

    let mut creatine = item(registry, "Creatine", 100, dec!(32.5), &s3)?;
    let _protein = item(registry, "Protein", 214, dec!(27.85), &s4)?;
    let mut pre_workout = item(registry, "Pre-workout", 40, dec!(56.20), &s2)?;
    let mut vitamin_d = item(registry, "Vitamin D", 400, dec!(11.75), &s1)?;
    let _vitamin_e = item(registry, "Vitamin E", 415, dec!(19.90), &s5)?;

    let d1 = Delivery::new(pre_workout.id_typed(), date, 71);
    let d2 = Delivery::new(vitamin_d.id_typed(), date, 150);
    let d3 = Delivery::new(creatine.id_typed(), date, 600);

    let before = [s1.amount_owed(), s2.amount_owed(), s3.amount_owed()];

    let reconciled = vec![
        reconcile(&d1, &mut pre_workout, &mut s2).context("booking pre-workout delivery")?,
        reconcile(&d2, &mut vitamin_d, &mut s1).context("booking vitamin D delivery")?,
        reconcile(&d3, &mut creatine, &mut s3).context("booking creatine delivery")?,
    ];

    let balances = [&s1, &s2, &s3]
        .into_iter()
        .zip(before)
        .map(|(s, owed_before)| SupplierBalance {
            supplier: s.name().to_string(),
            owed_before,
            owed_after: s.amount_owed(),
        })
        .collect();

    Ok(Report {
        balances,
        first_delivery_cost: d1.calculate_delivery_cost(dec!(56.20)),
        reconciled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_reports_balances_before_and_after() {
        let mut registry = ItemIdRegistry::seeded(1);
        let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();

        let report = run(&mut registry, date).unwrap();

        assert_eq!(
            report.balances,
            vec![
                SupplierBalance {
                    supplier: "SUPP111".to_string(),
                    owed_before: dec!(850),
                    owed_after: dec!(2612.50),
                },
                SupplierBalance {
                    supplier: "SUPP893".to_string(),
                    owed_before: dec!(500),
                    owed_after: dec!(4490.20),
                },
                SupplierBalance {
                    supplier: "SUPP150".to_string(),
                    owed_before: dec!(725),
                    owed_after: dec!(20225),
                },
            ]
        );
        assert_eq!(report.first_delivery_cost, dec!(3990.20));
        assert_eq!(report.reconciled.len(), 3);
        assert_eq!(registry.issued_count(), 5);
    }
}
