//! Product catalog module.
//!
//! Contains the product type and catalog feed loading.

mod feed;
mod product;

pub use feed::Catalog;
pub use product::Product;
