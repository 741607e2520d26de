use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;

use super::OrderDraft;

/// An order that passed validation.
///
/// Built once by [`crate::submission::submit`] and never modified afterwards,
/// so the fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedOrder {
    customer_name: String,
    customer_address: String,
    items: OrderDraft,
    total: BigDecimal,
    created_at: NaiveDateTime,
}

impl ConfirmedOrder {
    pub(crate) fn new(
        customer_name: impl Into<String>,
        customer_address: impl Into<String>,
        items: OrderDraft,
        total: BigDecimal,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_address: customer_address.into(),
            items,
            total,
            created_at,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_address(&self) -> &str {
        &self.customer_address
    }

    pub fn items(&self) -> &OrderDraft {
        &self.items
    }

    pub fn total(&self) -> &BigDecimal {
        &self.total
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
