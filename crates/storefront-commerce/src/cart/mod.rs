//! Shopping cart module.
//!
//! Contains the cart, its lines, and the add-to-cart decision.

mod cart;

pub use cart::{Cart, CartLine, CartUpdate, MAX_QUANTITY_PER_LINE};
