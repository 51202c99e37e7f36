//! Product listing and cart logic for the storefront view.
//!
//! This crate provides the data side of a single-page storefront:
//!
//! - **Catalog**: Products and catalog feed loading
//! - **Search**: Filter selections, text search, sort options
//! - **Cart**: Cart lines with stock and per-line quantity caps
//! - **State**: The application state the view renders from, and its event handlers
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut state = StorefrontState::default();
//! state.load_products(vec![
//!     Product::new(1u64, "Air Max 90", "Nike", "mens-shoes")
//!         .with_price(120.0)
//!         .with_stock(4),
//! ]);
//!
//! state.toggle_filter(FilterKey::Brand, "Nike".into(), true).unwrap();
//! state.sort("price-ascending").unwrap();
//!
//! state.sign_in("shopper@example.com").unwrap();
//! assert_eq!(state.add_to_cart(ProductId::new(1)), Ok(CartUpdate::Added));
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod state;
pub mod user;

pub mod cart;
pub mod catalog;
pub mod search;

pub use config::StorefrontConfig;
pub use error::{CartNotice, StorefrontError};
pub use ids::ProductId;
pub use state::StorefrontState;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CartConfig, ListingConfig, ResultScope, StorefrontConfig};
    pub use crate::error::{CartNotice, StorefrontError};
    pub use crate::ids::ProductId;
    pub use crate::state::StorefrontState;
    pub use crate::user::User;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartUpdate, MAX_QUANTITY_PER_LINE};

    // Search
    pub use crate::search::{
        FilterDefinition, FilterKey, FilterOptions, FilterSelection, FilterValue, NumericOption,
        NumericRange, SortDirection, SortField, SortOption,
    };
}
