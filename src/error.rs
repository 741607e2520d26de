use thiserror::Error;

use crate::session::SessionPhase;

/// Reasons a draft cannot be turned into a confirmed order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add at least one item to your order!")]
    EmptyOrder,
    #[error("Please fill in your name and address!")]
    MissingCustomerInfo,
}

/// A draft referenced an item the catalog does not know.
///
/// Drafts are only ever filled from catalog items, so this signals a broken
/// invariant rather than bad user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown catalog item: {0}")]
    UnknownItem(String),
}

/// Errors returned by [`crate::submission::submit`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Errors surfaced by the order session and its actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("We're closed: open between {open_hour}:00 and {close_hour}:00, current hour is {current_hour}")]
    StoreClosed {
        open_hour: u32,
        close_hour: u32,
        current_hour: u32,
    },
    #[error("An order is already open")]
    AlreadyOpen,
    #[error("Cannot {action} while the session is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: SessionPhase,
    },
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Catalog lookup error: {0}")]
    Lookup(#[from] LookupError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<SubmitError> for SessionError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Validation(e) => SessionError::Validation(e),
            SubmitError::Lookup(e) => SessionError::Lookup(e),
        }
    }
}

/// Errors building a [`crate::catalog::Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate catalog item: {0}")]
    DuplicateItem(String),
    #[error("Negative price for catalog item: {0}")]
    NegativePrice(String),
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors reading [`crate::app_system::AppConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Hour out of range for {key}: {hour} (expected 0-23)")]
    HourOutOfRange { key: &'static str, hour: u32 },
    #[error("Opening hour {open_hour} is after closing hour {close_hour}")]
    OpenAfterClose { open_hour: u32, close_hour: u32 },
}
