use std::io;

use clap::Args;
use maison::{cart::Cart, menu::Menu};
use tracing::info;

use super::{CliError, Locale};

/// One `ID` or `ID:QUANTITY` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderItem {
    id: String,
    quantity: u32,
}

fn parse_order_item(value: &str) -> Result<OrderItem, CliError> {
    let invalid = || CliError::InvalidOrderItem(value.to_string());

    let (id, quantity) = match value.split_once(':') {
        Some((id, quantity)) => (id, quantity.parse().ok().ok_or_else(invalid)?),
        None => (value, 1),
    };

    if id.is_empty() || quantity == 0 {
        return Err(invalid());
    }

    Ok(OrderItem {
        id: id.to_string(),
        quantity,
    })
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Dishes to order, as `ID` or `ID:QUANTITY`
    #[arg(required = true, value_parser = parse_order_item)]
    items: Vec<OrderItem>,

    /// Free-text note for the kitchen
    #[arg(long)]
    comment: Option<String>,
}

pub(crate) fn run(
    args: OrderArgs,
    menu: &Menu,
    locale: Locale<'_>,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let mut cart = Cart::new();

    for item in args.items {
        let dish = menu.get(&item.id).ok_or(CliError::UnknownDish(item.id))?;

        cart.add_items(dish.to_cart_line(locale.language), item.quantity);
    }

    if let Some(comment) = args.comment {
        cart.set_comment(comment);
    }

    let summary = cart.checkout()?;

    info!(
        lines = summary.lines().len(),
        total = summary.totals().total(),
        "order placed"
    );

    let strings = &locale.catalog.order;

    writeln!(out, "{}", strings.confirmed)?;
    writeln!(out, "{}", strings.waiter_notified)?;
    writeln!(out)?;

    summary.write_to(&mut out, locale.catalog)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use maison::i18n::{Catalogs, Language};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_items_with_and_without_quantity() -> TestResult {
        assert_eq!(
            parse_order_item("zeama")?,
            OrderItem {
                id: "zeama".to_string(),
                quantity: 1
            }
        );
        assert_eq!(
            parse_order_item("compot:3")?,
            OrderItem {
                id: "compot".to_string(),
                quantity: 3
            }
        );

        Ok(())
    }

    #[test]
    fn rejects_malformed_items() {
        for value in ["", ":2", "zeama:0", "zeama:-1", "zeama:many"] {
            assert!(
                matches!(parse_order_item(value), Err(CliError::InvalidOrderItem(_))),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn prints_confirmation_and_totals() -> TestResult {
        let catalogs = Catalogs::bundled()?;
        let menu = Menu::bundled()?;
        let locale = Locale {
            language: Language::En,
            catalog: catalogs.get(Language::En),
        };
        let zeama = menu.get("zeama").ok_or("missing dish")?;
        let compot = menu.get("compot").ok_or("missing dish")?;
        let subtotal = u64::from(zeama.price) * 2 + u64::from(compot.price);
        let mut out = Vec::new();

        run(
            OrderArgs {
                items: vec![parse_order_item("zeama:2")?, parse_order_item("compot")?],
                comment: Some("no sour cream".to_string()),
            },
            &menu,
            locale,
            &mut out,
        )?;

        let printed = String::from_utf8(out)?;

        assert!(printed.starts_with("Order confirmed!"));
        assert!(printed.contains("no sour cream"));
        assert!(printed.contains(&format!("Subtotal: {subtotal} MDL")));

        Ok(())
    }

    #[test]
    fn unknown_dish_aborts_the_order() -> TestResult {
        let catalogs = Catalogs::bundled()?;
        let locale = Locale {
            language: Language::Ru,
            catalog: catalogs.get(Language::Ru),
        };

        let result = run(
            OrderArgs {
                items: vec![parse_order_item("pizza")?],
                comment: None,
            },
            &Menu::bundled()?,
            locale,
            Vec::new(),
        );

        assert!(matches!(result, Err(CliError::UnknownDish(id)) if id == "pizza"));

        Ok(())
    }
}
