//! Plain-text rendering of the menu, footer, order form and confirmation.

use bigdecimal::BigDecimal;

use crate::catalog::Catalog;
use crate::domain::ConfirmedOrder;
use crate::hours::BusinessHours;
use crate::pricing::line_subtotal;
use crate::session::SessionView;

const SHOP_NAME: &str = "Fast React Pizza Co.";

/// `$12.00`, rounded half up to cents.
pub fn money(amount: &BigDecimal) -> String {
    format!("${}", amount.round(2).with_scale(2))
}

pub fn menu(catalog: &Catalog) -> String {
    let mut lines = vec![SHOP_NAME.to_string(), String::new(), "Our menu".to_string()];

    if catalog.is_empty() {
        lines.push("There are no pizzas in the menu.".to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "Authentic Italian cuisine. {} creative dishes to choose from. All from our stone oven, all organic, all delicious.",
        catalog.len()
    ));
    for item in catalog.iter() {
        let price = if item.available {
            item.unit_price.to_string()
        } else {
            "Sold out".to_string()
        };
        lines.push(format!("  {} ({})", item.name, price));
        lines.push(format!("    {}", item.description));
    }
    lines.join("\n")
}

pub fn footer(hours: &BusinessHours, current_hour: u32) -> String {
    if hours.is_open_at(current_hour) {
        format!("We're open until {}.", hours.close_hour)
    } else {
        format!(
            "We're happy to welcome you between {}:00 to {}:00.",
            hours.open_hour, hours.close_hour
        )
    }
}

/// The "Place Your Order" form for the current session view.
pub fn order_form(catalog: &Catalog, view: &SessionView) -> String {
    let mut lines = vec![
        "Place Your Order".to_string(),
        format!("Name: {}", view.form.customer_name),
        format!("Delivery Address: {}", view.form.customer_address),
        "Select Your Pizzas:".to_string(),
    ];
    lines.extend(catalog.iter().map(|item| {
        if item.available {
            format!(
                "  {} {}  [- {} +]",
                item.name,
                money(&item.unit_price),
                view.form.draft.quantity(&item.name)
            )
        } else {
            format!("  {} {}  Sold Out", item.name, money(&item.unit_price))
        }
    }));
    lines.push(format!("Total: {}", money(&view.total)));
    lines.join("\n")
}

pub fn confirmation(catalog: &Catalog, order: &ConfirmedOrder) -> String {
    let mut lines = vec![
        "Order Confirmation".to_string(),
        format!("Thank you, {}!", order.customer_name()),
        "Your order has been confirmed.".to_string(),
        format!("Delivery Address: {}", order.customer_address()),
        format!("Order Time: {}", order.created_at().format("%-m/%-d/%Y, %-I:%M:%S %p")),
        "Items:".to_string(),
    ];
    for item in catalog.iter() {
        let quantity = order.items().quantity(&item.name);
        if quantity == 0 {
            continue;
        }
        lines.push(format!(
            "  {}x {}  {}",
            quantity,
            item.name,
            money(&line_subtotal(item, quantity))
        ));
    }
    lines.push(format!("Total: {}", money(order.total())));
    lines.join("\n")
}
