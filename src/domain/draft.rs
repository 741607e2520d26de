use std::collections::BTreeMap;

use super::CatalogItem;

/// The editable set of quantities chosen before submission.
///
/// Every stored quantity is at least 1: a decrement that reaches zero
/// removes the entry. Entries can only be added through [`OrderDraft::increment`],
/// which takes a catalog item, so every key names a real catalog item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    items: BTreeMap<String, u32>,
}

impl OrderDraft {
    /// Adds one unit of `item` and returns the new quantity.
    ///
    /// Sold-out items are ignored and keep their current quantity (0).
    pub fn increment(&mut self, item: &CatalogItem) -> u32 {
        if !item.available {
            return self.quantity(&item.name);
        }
        let quantity = self.items.entry(item.name.clone()).or_insert(0);
        *quantity += 1;
        *quantity
    }

    /// Removes one unit of `item_name` and returns the new quantity.
    ///
    /// Never goes below zero; the entry is dropped once it reaches zero.
    pub fn decrement(&mut self, item_name: &str) -> u32 {
        match self.items.get_mut(item_name) {
            Some(quantity) if *quantity > 1 => {
                *quantity -= 1;
                *quantity
            }
            Some(_) => {
                self.items.remove(item_name);
                0
            }
            None => 0,
        }
    }

    /// Quantity currently requested for `item_name`, 0 when absent.
    pub fn quantity(&self, item_name: &str) -> u32 {
        self.items.get(item_name).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct items in the draft.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all items.
    pub fn item_count(&self) -> u32 {
        self.items.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focaccia() -> CatalogItem {
        CatalogItem::new("Focaccia", "Bread", 6, "pizzas/focaccia.jpg")
    }

    #[test]
    fn test_increment_starts_from_zero() {
        let mut draft = OrderDraft::default();
        assert_eq!(draft.increment(&focaccia()), 1);
        assert_eq!(draft.increment(&focaccia()), 2);
        assert_eq!(draft.quantity("Focaccia"), 2);
    }

    #[test]
    fn test_increment_then_decrement_leaves_empty_draft() {
        let mut draft = OrderDraft::default();
        draft.increment(&focaccia());
        assert_eq!(draft.decrement("Focaccia"), 0);
        assert!(draft.is_empty());
        assert_eq!(draft, OrderDraft::default());
    }

    #[test]
    fn test_decrement_absent_item_is_noop() {
        let mut draft = OrderDraft::default();
        assert_eq!(draft.decrement("Pizza Funghi"), 0);
        assert!(draft.is_empty());
    }

    #[test]
    fn test_sold_out_item_is_ignored() {
        let salamino = CatalogItem::new("Pizza Salamino", "Pepperoni", 15, "pizzas/salamino.jpg").sold_out();
        let mut draft = OrderDraft::default();
        assert_eq!(draft.increment(&salamino), 0);
        assert!(draft.is_empty());
    }

    #[test]
    fn test_no_zero_quantities_after_mixed_sequence() {
        let margherita = CatalogItem::new("Pizza Margherita", "Tomato", 10, "pizzas/margherita.jpg");
        let mut draft = OrderDraft::default();
        // +F +M -F -F +M -M -M -M +F
        draft.increment(&focaccia());
        draft.increment(&margherita);
        draft.decrement("Focaccia");
        draft.decrement("Focaccia");
        draft.increment(&margherita);
        draft.decrement("Pizza Margherita");
        draft.decrement("Pizza Margherita");
        draft.decrement("Pizza Margherita");
        draft.increment(&focaccia());

        assert!(draft.iter().all(|(_, qty)| qty >= 1));
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.quantity("Focaccia"), 1);
        assert_eq!(draft.quantity("Pizza Margherita"), 0);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let margherita = CatalogItem::new("Pizza Margherita", "Tomato", 10, "pizzas/margherita.jpg");
        let mut draft = OrderDraft::default();
        draft.increment(&focaccia());
        draft.increment(&focaccia());
        draft.increment(&margherita);
        assert_eq!(draft.item_count(), 3);
        assert_eq!(draft.len(), 2);
    }
}
