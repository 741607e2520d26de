//! Actor that owns the single order session and applies UI events to it one at a time.

pub mod service;

pub use service::*;
