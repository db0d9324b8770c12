use anyhow::Context;
use chrono::Local;

use stockroom_inventory::ItemIdRegistry;

const SEED_ENV: &str = "STOCKROOM_ID_SEED";

fn registry_from_env() -> anyhow::Result<ItemIdRegistry> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SEED_ENV} must be an unsigned integer"))?;
            tracing::info!(seed, "using seeded item id registry");
            Ok(ItemIdRegistry::seeded(seed))
        }
        Err(_) => Ok(ItemIdRegistry::new()),
    }
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init()?;

    let mut registry = registry_from_env()?;
    let report = stockroom_demo::run(&mut registry, Local::now().date_naive())?;

    let line = |pick: fn(&stockroom_demo::SupplierBalance) -> String| {
        report
            .balances
            .iter()
            .map(|b| format!("{} {}", b.supplier, pick(b)))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!(
        "Amount owed before delivery to {} suppliers: {} .",
        report.balances.len(),
        line(|b| b.owed_before.to_string())
    );
    println!(
        "Amount owed after delivery to {} suppliers: {} .",
        report.balances.len(),
        line(|b| b.owed_after.to_string())
    );
    println!("{}", report.first_delivery_cost);

    tracing::debug!(
        reconciled = %serde_json::to_string(&report.reconciled)?,
        "delivery run complete"
    );
    Ok(())
}
