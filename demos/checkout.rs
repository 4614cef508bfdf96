//! Checkout Example
//!
//! Fills a cart from the bundled menu the way the menu screen does, adjusts it the way the cart
//! screen does, then checks out and prints the order summary in every language.
//!
//! Run with: `cargo run --example checkout`

use std::io::Write;

use anyhow::{Result, anyhow};

use maison::prelude::*;

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let menu = Menu::bundled()?;
    let catalogs = Catalogs::bundled()?;

    let mut cart = Cart::new();

    for id in ["zeama", "mamaliga", "mititei", "mamaliga", "compot"] {
        let dish = menu.get(id).ok_or(anyhow!("{id} is not on the menu"))?;

        cart.add_item(dish.to_cart_line(Language::Ro));
    }

    cart.update_quantity("compot", 3);
    cart.remove_item("mititei");
    cart.set_comment("Fără ceapă, vă rog");

    let before = cart.totals()?;
    let summary = cart.checkout()?;

    println!("Cart before checkout: {} lei", before.total());
    println!("Cart after checkout: {} lines\n", cart.len());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for language in Language::ALL {
        writeln!(handle, "[{language}]")?;
        summary.write_to(&mut handle, catalogs.get(language))?;
        writeln!(handle)?;
    }

    Ok(())
}
