//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Filter name is not one of the filterable attributes.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Filter exists but has no option with this label.
    #[error("Filter {filter} has no option {label:?}")]
    UnknownFilterOption { filter: &'static str, label: String },

    /// A string value was given for a numeric filter, or a range for a string filter.
    #[error("Filter {filter} expects a {expected} value")]
    FilterValueMismatch {
        filter: &'static str,
        expected: &'static str,
    },

    /// Sort key does not name a sortable field.
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    /// Sign-in attempted without an email address.
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    /// Catalog file could not be read.
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A rejected add-to-cart request.
///
/// These are shown to the shopper as-is; the `Display` text is the notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartNotice {
    /// No user is signed in.
    #[error("Sign In to add products to cart")]
    SignInRequired,

    /// The line already holds every unit in stock.
    #[error("Current stock of this product is {stock}")]
    StockExceeded { stock: u32 },

    /// The line is at the per-order quantity cap.
    #[error("Maximum quantity per order for a product is {max}")]
    QuantityLimit { max: u32 },

    /// The product is not in the loaded catalog.
    #[error("Product {0} is not available")]
    ProductUnavailable(ProductId),
}

impl CartNotice {
    /// Check if the shopper can fix this by signing in.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, CartNotice::SignInRequired)
    }

    /// Check if this is one of the quantity caps.
    pub fn is_quantity_cap(&self) -> bool {
        matches!(
            self,
            CartNotice::StockExceeded { .. } | CartNotice::QuantityLimit { .. }
        )
    }
}
