#[macro_use]
mod macros;
pub mod session_client;

pub use session_client::*;
