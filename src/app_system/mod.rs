//! System orchestration, configuration, startup and shutdown.

pub mod config;
pub mod order_system;
pub mod tracing_setup;

pub use config::*;
pub use order_system::*;
pub use tracing_setup::*;
