//! The read-only menu: an ordered list of [`CatalogItem`]s keyed by name.

use std::collections::HashSet;
use std::path::Path;

use bigdecimal::BigDecimal;
use tracing::{debug, error, info, instrument};

use crate::domain::CatalogItem;
use crate::error::{CatalogError, LookupError};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names and negative prices.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let zero = BigDecimal::from(0);
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateItem(item.name.clone()));
            }
            if item.unit_price < zero {
                return Err(CatalogError::NegativePrice(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parses a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    #[instrument(fields(path = %path.as_ref().display()), skip(path))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(item_count = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The house menu.
    pub fn pizza_menu() -> Self {
        Self {
            items: vec![
                CatalogItem::new(
                    "Focaccia",
                    "Bread with italian olive oil and rosemary",
                    6,
                    "pizzas/focaccia.jpg",
                ),
                CatalogItem::new(
                    "Pizza Margherita",
                    "Tomato and mozarella",
                    10,
                    "pizzas/margherita.jpg",
                ),
                CatalogItem::new(
                    "Pizza Spinaci",
                    "Tomato, mozarella, spinach, and ricotta cheese",
                    12,
                    "pizzas/spinaci.jpg",
                ),
                CatalogItem::new(
                    "Pizza Funghi",
                    "Tomato, mozarella, mushrooms, and onion",
                    12,
                    "pizzas/funghi.jpg",
                ),
                CatalogItem::new(
                    "Pizza Salamino",
                    "Tomato, mozarella, and pepperoni",
                    15,
                    "pizzas/salamino.jpg",
                )
                .sold_out(),
                CatalogItem::new(
                    "Pizza Prosciutto",
                    "Tomato, mozarella, ham, aragula, and burrata cheese",
                    18,
                    "pizzas/prosciutto.jpg",
                ),
            ],
        }
    }

    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Like [`Catalog::find`], but a missing item is reported as a broken invariant.
    pub fn get(&self, name: &str) -> Result<&CatalogItem, LookupError> {
        match self.find(name) {
            Some(item) => {
                debug!(item = %name, "Catalog item found");
                Ok(item)
            }
            None => {
                error!(item = %name, "Item missing from catalog");
                Err(LookupError::UnknownItem(name.to_string()))
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_menu_has_one_sold_out_item() {
        let catalog = Catalog::pizza_menu();
        assert_eq!(catalog.len(), 6);
        let sold_out: Vec<_> = catalog.iter().filter(|i| !i.available).map(|i| i.name.as_str()).collect();
        assert_eq!(sold_out, vec!["Pizza Salamino"]);
    }

    #[test]
    fn test_pizza_menu_passes_validation() {
        let items: Vec<_> = Catalog::pizza_menu().iter().cloned().collect();
        assert!(Catalog::new(items).is_ok());
    }

    #[test]
    fn test_get_unknown_item() {
        let catalog = Catalog::pizza_menu();
        assert_eq!(
            catalog.get("Pizza Hawaii"),
            Err(LookupError::UnknownItem("Pizza Hawaii".to_string()))
        );
        assert_eq!(catalog.get("Focaccia").map(|i| i.unit_price.clone()), Ok(BigDecimal::from(6)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let items = vec![
            CatalogItem::new("Focaccia", "a", 6, "a.jpg"),
            CatalogItem::new("Focaccia", "b", 7, "b.jpg"),
        ];
        assert!(matches!(Catalog::new(items), Err(CatalogError::DuplicateItem(name)) if name == "Focaccia"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let items = vec![CatalogItem::new("Refund", "", -1, "none.jpg")];
        assert!(matches!(Catalog::new(items), Err(CatalogError::NegativePrice(_))));
    }

    #[test]
    fn test_from_json_defaults_availability() {
        let json = r#"[
            {"name": "Focaccia", "description": "Bread", "unit_price": "6", "image_ref": "pizzas/focaccia.jpg"},
            {"name": "Pizza Salamino", "description": "Pepperoni", "unit_price": "15.50", "image_ref": "pizzas/salamino.jpg", "available": false}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("Focaccia").unwrap().available);
        let salamino = catalog.find("Pizza Salamino").unwrap();
        assert!(!salamino.available);
        assert_eq!(salamino.unit_price, "15.5".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Catalog::from_json("{not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/definitely/not/here/menu.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
