pub mod catalog_item;
pub mod draft;
pub mod order;

pub use catalog_item::*;
pub use draft::*;
pub use order::*;
