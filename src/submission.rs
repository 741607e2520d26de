use chrono::NaiveDateTime;
use tracing::{info, instrument, warn};

use crate::catalog::Catalog;
use crate::domain::{ConfirmedOrder, OrderDraft};
use crate::error::{SubmitError, ValidationError};
use crate::pricing;

/// Validates the draft and customer fields and freezes them into a [`ConfirmedOrder`].
///
/// Checks run in order and the first failure wins:
/// 1. the draft has at least one item, else [`ValidationError::EmptyOrder`]
/// 2. name and address are non-blank, else [`ValidationError::MissingCustomerInfo`]
///
/// The returned order owns its own copy of the draft. Names are stored trimmed.
#[instrument(fields(items = draft.len()), skip_all)]
pub fn submit(
    draft: &OrderDraft,
    customer_name: &str,
    customer_address: &str,
    catalog: &Catalog,
    now: NaiveDateTime,
) -> Result<ConfirmedOrder, SubmitError> {
    if draft.is_empty() {
        warn!("Validation failed: empty order");
        return Err(ValidationError::EmptyOrder.into());
    }

    let name = customer_name.trim();
    let address = customer_address.trim();
    if name.is_empty() || address.is_empty() {
        warn!("Validation failed: missing customer info");
        return Err(ValidationError::MissingCustomerInfo.into());
    }

    let total = pricing::total(draft, catalog)?;
    info!(total = %total, "Order confirmed");
    Ok(ConfirmedOrder::new(name, address, draft.clone(), total, now))
}
