//! The order-modal lifecycle: `Closed → Editing → Confirmed → Closed`.
//!
//! [`OrderSession`] owns everything one open order needs (draft, customer
//! fields, confirmed order) and enforces which events are legal in which
//! phase. It is synchronous and single-owner; the session actor wraps it to
//! serialise events coming from the UI.

use std::fmt;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::domain::{ConfirmedOrder, OrderDraft};
use crate::error::{LookupError, SessionError};
use crate::hours::{BusinessHours, Clock};
use crate::pricing;
use crate::submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Closed,
    Editing,
    Confirmed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Closed => write!(f, "closed"),
            SessionPhase::Editing => write!(f, "editing"),
            SessionPhase::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// What the user has typed and picked so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub draft: OrderDraft,
    pub customer_name: String,
    pub customer_address: String,
}

/// Point-in-time copy of a session, handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub form: OrderForm,
    pub total: BigDecimal,
    pub confirmed: Option<ConfirmedOrder>,
}

#[derive(Debug)]
enum SessionState {
    Closed,
    Editing(OrderForm),
    Confirmed {
        form: OrderForm,
        order: ConfirmedOrder,
    },
}

impl SessionState {
    fn phase(&self) -> SessionPhase {
        match self {
            SessionState::Closed => SessionPhase::Closed,
            SessionState::Editing(_) => SessionPhase::Editing,
            SessionState::Confirmed { .. } => SessionPhase::Confirmed,
        }
    }
}

fn editing_form<'a>(state: &'a mut SessionState, action: &'static str) -> Result<&'a mut OrderForm, SessionError> {
    match state {
        SessionState::Editing(form) => Ok(form),
        other => Err(SessionError::InvalidTransition {
            action,
            phase: other.phase(),
        }),
    }
}

pub struct OrderSession {
    catalog: Arc<Catalog>,
    hours: BusinessHours,
    clock: Arc<dyn Clock>,
    state: SessionState,
}

impl OrderSession {
    pub fn new(catalog: Arc<Catalog>, hours: BusinessHours, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            hours,
            clock,
            state: SessionState::Closed,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// `Closed → Editing` with an empty draft and blank customer fields.
    ///
    /// Only possible during business hours and when no order is open.
    pub fn open(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, SessionState::Closed) {
            warn!(phase = %self.phase(), "Order already open");
            return Err(SessionError::AlreadyOpen);
        }
        let current_hour = self.clock.current_hour();
        if !self.hours.is_open_at(current_hour) {
            warn!(current_hour, "Order requested outside business hours");
            return Err(SessionError::StoreClosed {
                open_hour: self.hours.open_hour,
                close_hour: self.hours.close_hour,
                current_hour,
            });
        }
        self.state = SessionState::Editing(OrderForm::default());
        info!("Order opened");
        Ok(())
    }

    /// Adds one unit of `item_name`; sold-out items are left untouched.
    pub fn increment(&mut self, item_name: &str) -> Result<u32, SessionError> {
        let Self { catalog, state, .. } = self;
        let form = editing_form(state, "change quantities")?;
        let item = catalog.get(item_name)?;
        if !item.available {
            warn!(item = %item_name, "Ignoring sold-out item");
        }
        let quantity = form.draft.increment(item);
        debug!(item = %item_name, quantity, "Quantity increased");
        Ok(quantity)
    }

    pub fn decrement(&mut self, item_name: &str) -> Result<u32, SessionError> {
        let Self { catalog, state, .. } = self;
        let form = editing_form(state, "change quantities")?;
        catalog.get(item_name)?;
        let quantity = form.draft.decrement(item_name);
        debug!(item = %item_name, quantity, "Quantity decreased");
        Ok(quantity)
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) -> Result<(), SessionError> {
        editing_form(&mut self.state, "edit customer name")?.customer_name = name.into();
        Ok(())
    }

    pub fn set_customer_address(&mut self, address: impl Into<String>) -> Result<(), SessionError> {
        editing_form(&mut self.state, "edit customer address")?.customer_address = address.into();
        Ok(())
    }

    /// The form while editing or confirmed, `None` when closed.
    pub fn form(&self) -> Option<&OrderForm> {
        match &self.state {
            SessionState::Closed => None,
            SessionState::Editing(form) => Some(form),
            SessionState::Confirmed { form, .. } => Some(form),
        }
    }

    pub fn draft(&self) -> Option<&OrderDraft> {
        self.form().map(|form| &form.draft)
    }

    pub fn confirmed(&self) -> Option<&ConfirmedOrder> {
        match &self.state {
            SessionState::Confirmed { order, .. } => Some(order),
            _ => None,
        }
    }

    /// Total of the current draft; zero when no order is open.
    pub fn running_total(&self) -> Result<BigDecimal, LookupError> {
        match self.draft() {
            Some(draft) => pricing::total(draft, &self.catalog),
            None => Ok(BigDecimal::from(0)),
        }
    }

    /// `Editing → Confirmed` when validation passes.
    ///
    /// On failure the session stays in `Editing` with the draft untouched.
    pub fn submit(&mut self) -> Result<ConfirmedOrder, SessionError> {
        let form = match &self.state {
            SessionState::Editing(form) => form,
            other => {
                return Err(SessionError::InvalidTransition {
                    action: "submit",
                    phase: other.phase(),
                })
            }
        };
        let order = submission::submit(
            &form.draft,
            &form.customer_name,
            &form.customer_address,
            &self.catalog,
            self.clock.now(),
        )?;

        if let SessionState::Editing(form) = std::mem::replace(&mut self.state, SessionState::Closed) {
            self.state = SessionState::Confirmed {
                form,
                order: order.clone(),
            };
        }
        info!(total = %order.total(), "Order submitted");
        Ok(order)
    }

    /// Discards draft, customer fields and confirmed order.
    ///
    /// Returns `false` when there was nothing open.
    pub fn close(&mut self) -> bool {
        let previous = self.phase();
        self.state = SessionState::Closed;
        if previous == SessionPhase::Closed {
            debug!("Close requested with no open order");
            return false;
        }
        info!(from = %previous, "Order closed");
        true
    }

    pub fn view(&self) -> Result<SessionView, LookupError> {
        Ok(SessionView {
            phase: self.phase(),
            form: self.form().cloned().unwrap_or_default(),
            total: self.running_total()?,
            confirmed: self.confirmed().cloned(),
        })
    }
}
