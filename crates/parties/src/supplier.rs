use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{
    AggregateId, DomainError, DomainResult, Entity, Outcome, Rejection, eq_ignore_case,
    replace_if_changed,
};

/// Supplier identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub AggregateId);

impl SupplierId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

const UNKNOWN: &str = "Unknown";

/// Entity: Supplier.
///
/// Holds the running balance owed to one vendor. The credit limit is advisory:
/// nothing in this crate refuses a balance change because of it.
///
/// Serialize-only: suppliers are built through [`Supplier::new`] so the balance
/// checks always run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    address: String,
    amount_owed: Decimal,
    credit_limit: Decimal,
}

impl Supplier {
    /// Supplier with name and address "Unknown" and zero balances.
    pub fn unknown() -> Self {
        Self {
            id: SupplierId::new(AggregateId::new()),
            name: UNKNOWN.to_string(),
            address: UNKNOWN.to_string(),
            amount_owed: Decimal::ZERO,
            credit_limit: Decimal::ZERO,
        }
    }

    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        amount_owed: Decimal,
        credit_limit: Decimal,
    ) -> DomainResult<Self> {
        Self::with_id(
            SupplierId::new(AggregateId::new()),
            name,
            address,
            amount_owed,
            credit_limit,
        )
    }

    /// Like [`Supplier::new`] with a caller-chosen identifier.
    pub fn with_id(
        id: SupplierId,
        name: impl Into<String>,
        address: impl Into<String>,
        amount_owed: Decimal,
        credit_limit: Decimal,
    ) -> DomainResult<Self> {
        if amount_owed < Decimal::ZERO {
            return Err(DomainError::validation("amount owed cannot be negative"));
        }
        if credit_limit < Decimal::ZERO {
            return Err(DomainError::validation("credit limit cannot be negative"));
        }
        Ok(Self {
            id,
            name: name.into(),
            address: address.into(),
            amount_owed,
            credit_limit,
        })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn amount_owed(&self) -> Decimal {
        self.amount_owed
    }

    pub fn credit_limit(&self) -> Decimal {
        self.credit_limit
    }

    /// Credit left before the advisory limit is reached (negative once exceeded,
    /// saturating at the decimal range).
    pub fn available_credit(&self) -> Decimal {
        self.credit_limit.saturating_sub(self.amount_owed)
    }

    pub fn is_over_credit_limit(&self) -> bool {
        self.amount_owed > self.credit_limit
    }

    /// Reports whether `name` differs from the current name, ignoring case.
    ///
    /// Compatibility behavior: the name is never stored. Use
    /// [`Supplier::rename_to`] to actually change it.
    pub fn set_name(&self, name: &str) -> Outcome {
        if eq_ignore_case(name, &self.name) {
            Err(Rejection::Unchanged)
        } else {
            Ok(())
        }
    }

    /// Reports whether `address` differs from the current address, ignoring case.
    ///
    /// Compatibility behavior: the address is never stored. Use
    /// [`Supplier::relocate_to`] to actually change it.
    pub fn set_address(&self, address: &str) -> Outcome {
        if eq_ignore_case(address, &self.address) {
            Err(Rejection::Unchanged)
        } else {
            Ok(())
        }
    }

    /// Store `name` when it differs from the current name, ignoring case.
    pub fn rename_to(&mut self, name: impl Into<String>) -> Outcome {
        let name = name.into();
        self.set_name(&name)?;
        tracing::debug!(supplier_id = %self.id, from = %self.name, to = %name, "supplier renamed");
        self.name = name;
        Ok(())
    }

    /// Store `address` when it differs from the current address, ignoring case.
    pub fn relocate_to(&mut self, address: impl Into<String>) -> Outcome {
        let address = address.into();
        self.set_address(&address)?;
        tracing::debug!(supplier_id = %self.id, "supplier address changed");
        self.address = address;
        Ok(())
    }

    pub fn set_amount_owed(&mut self, amount_owed: Decimal) -> Outcome {
        if amount_owed < Decimal::ZERO {
            return Err(Rejection::Invalid("amount owed cannot be negative"));
        }
        replace_if_changed(&mut self.amount_owed, amount_owed)
    }

    pub fn set_credit_limit(&mut self, credit_limit: Decimal) -> Outcome {
        if credit_limit < Decimal::ZERO {
            return Err(Rejection::Invalid("credit limit cannot be negative"));
        }
        replace_if_changed(&mut self.credit_limit, credit_limit)
    }

    /// Add `delta` to the balance. No bound checks beyond the decimal range.
    pub fn increase_amount_owed(&mut self, delta: Decimal) -> Outcome {
        self.amount_owed = self
            .amount_owed
            .checked_add(delta)
            .ok_or(Rejection::Overflow)?;
        tracing::debug!(
            supplier_id = %self.id,
            %delta,
            amount_owed = %self.amount_owed,
            "amount owed increased"
        );
        Ok(())
    }

    /// Subtract `delta` from the balance. No bound checks beyond the decimal range.
    pub fn decrease_amount_owed(&mut self, delta: Decimal) -> Outcome {
        self.amount_owed = self
            .amount_owed
            .checked_sub(delta)
            .ok_or(Rejection::Overflow)?;
        if self.amount_owed < Decimal::ZERO {
            // TODO: decide whether a payment larger than the balance should be refused.
            tracing::warn!(
                supplier_id = %self.id,
                amount_owed = %self.amount_owed,
                "amount owed went negative"
            );
        } else {
            tracing::debug!(
                supplier_id = %self.id,
                %delta,
                amount_owed = %self.amount_owed,
                "amount owed decreased"
            );
        }
        Ok(())
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
