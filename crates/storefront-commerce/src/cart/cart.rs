//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CartNotice;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 10;

/// What an accepted add-to-cart did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartUpdate {
    /// A new line was created with quantity 1.
    Added,
    /// An existing line was incremented to `quantity`.
    Incremented { quantity: u32 },
}

/// A shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing line is incremented only while its quantity is below both
    /// the stock copied onto the line and `max_per_line`. Stock is checked
    /// first. A new line copies the product as it is now, and is refused
    /// when `max_per_line` is zero.
    pub fn add_product(
        &mut self,
        product: &Product,
        max_per_line: u32,
    ) -> Result<CartUpdate, CartNotice> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            if line.quantity >= line.product.stock {
                return Err(CartNotice::StockExceeded {
                    stock: line.product.stock,
                });
            }
            if line.quantity >= max_per_line {
                return Err(CartNotice::QuantityLimit { max: max_per_line });
            }
            line.quantity += 1;
            return Ok(CartUpdate::Incremented {
                quantity: line.quantity,
            });
        }

        if product.stock == 0 {
            return Err(CartNotice::StockExceeded { stock: 0 });
        }
        if max_per_line == 0 {
            return Err(CartNotice::QuantityLimit { max: 0 });
        }
        self.lines.push(CartLine::new(product.clone()));
        Ok(CartUpdate::Added)
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Get number of lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price times quantity over all lines.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::total).sum()
    }
}

/// One product in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product fields as they were when first added.
    #[serde(flatten)]
    pub product: Product,
    /// Units ordered.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price times quantity.
    pub fn total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
