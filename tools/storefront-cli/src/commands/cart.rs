//! Add-to-cart command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::cart::{Cart, CartUpdate};
use storefront_commerce::ProductId;

use super::CartArgs;
use crate::context::Context;
use crate::output::format_price;

/// Outcome of one add-to-cart press.
#[derive(Serialize)]
struct Press {
    product_id: ProductId,
    accepted: bool,
    message: String,
}

#[derive(Serialize)]
struct CartReport<'a> {
    email: &'a str,
    presses: Vec<Press>,
    cart: &'a Cart,
    item_count: u32,
    subtotal: f64,
}

/// Run the cart command.
///
/// Rejected presses are reported and skipped; they do not fail the command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut state = ctx.load_state()?;

    if let Some(email) = args.email.as_deref() {
        state.sign_in(email)?;
        ctx.output.debug(&format!("Signed in as {}", state.user.email));
    }

    let mut presses = Vec::with_capacity(args.add.len());
    for product_id in args.add {
        let press = match state.add_to_cart(product_id) {
            Ok(CartUpdate::Added) => {
                let message = format!("Added product {} to cart", product_id);
                ctx.output.success(&message);
                Press { product_id, accepted: true, message }
            }
            Ok(CartUpdate::Incremented { quantity }) => {
                let message = format!("Product {} quantity is now {}", product_id, quantity);
                ctx.output.success(&message);
                Press { product_id, accepted: true, message }
            }
            Err(notice) => {
                let message = notice.to_string();
                ctx.output.warn(&message);
                Press { product_id, accepted: false, message }
            }
        };
        presses.push(press);
    }

    let cart = &state.user.cart;
    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            email: &state.user.email,
            presses,
            cart,
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
        });
        return Ok(());
    }

    ctx.output.header("Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let widths = [5, 32, 10, 5, 12];
    ctx.output.table_row(&["ID", "TITLE", "PRICE", "QTY", "TOTAL"], &widths);
    for line in cart.lines() {
        let id = line.product.id.to_string();
        let price = format_price(line.product.price);
        let quantity = line.quantity.to_string();
        let total = format_price(line.total());
        ctx.output.table_row(
            &[&id, &line.product.title, &price, &quantity, &total],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Subtotal", &format_price(cart.subtotal()));

    Ok(())
}
