use bigdecimal::BigDecimal;

use crate::catalog::Catalog;
use crate::domain::{CatalogItem, OrderDraft};
use crate::error::LookupError;

/// Price of `quantity` units of `item`.
pub fn line_subtotal(item: &CatalogItem, quantity: u32) -> BigDecimal {
    &item.unit_price * &BigDecimal::from(quantity)
}

/// Sum of quantity × unit price over the draft.
pub fn total(draft: &OrderDraft, catalog: &Catalog) -> Result<BigDecimal, LookupError> {
    let mut total = BigDecimal::from(0);
    for (name, quantity) in draft.iter() {
        let item = catalog.get(name)?;
        total += line_subtotal(item, quantity);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_of_focaccia_and_margherita() {
        let catalog = Catalog::pizza_menu();
        let mut draft = OrderDraft::default();
        let focaccia = catalog.find("Focaccia").unwrap();
        draft.increment(focaccia);
        draft.increment(focaccia);
        draft.increment(catalog.find("Pizza Margherita").unwrap());

        assert_eq!(total(&draft, &catalog), Ok(BigDecimal::from(22)));
    }

    #[test]
    fn test_empty_draft_totals_zero() {
        assert_eq!(total(&OrderDraft::default(), &Catalog::pizza_menu()), Ok(BigDecimal::from(0)));
    }

    #[test]
    fn test_unknown_item_is_lookup_error() {
        let foreign = CatalogItem::new("Calzone", "Folded", 14, "pizzas/calzone.jpg");
        let mut draft = OrderDraft::default();
        draft.increment(&foreign);

        assert_eq!(
            total(&draft, &Catalog::pizza_menu()),
            Err(LookupError::UnknownItem("Calzone".to_string()))
        );
    }

    #[test]
    fn test_line_subtotal_keeps_cents() {
        let item = CatalogItem::new("Slice", "", "2.25".parse::<BigDecimal>().unwrap(), "slice.jpg");
        assert_eq!(line_subtotal(&item, 3), "6.75".parse::<BigDecimal>().unwrap());
    }
}
