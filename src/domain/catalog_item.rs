use bigdecimal::BigDecimal;
use serde::Deserialize;

/// Represents a dish on the menu.
///
/// `name` is the unique key used by drafts and confirmed orders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
    pub image_ref: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl CatalogItem {
    /// Creates an item that can be ordered.
    ///
    /// # Arguments
    /// * `name` - Unique display name
    /// * `description` - Ingredients line shown under the name
    /// * `unit_price` - Price of a single unit
    /// * `image_ref` - Path of the photo shown next to the item
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price: impl Into<BigDecimal>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            unit_price: unit_price.into(),
            image_ref: image_ref.into(),
            available: true,
        }
    }

    /// Marks the item as sold out.
    pub fn sold_out(mut self) -> Self {
        self.available = false;
        self
    }
}
