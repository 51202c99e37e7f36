//! Catalog loading from the product feed JSON.

use std::path::Path;

use serde::Deserialize;

use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::ids::ProductId;

/// Accepted feed shapes: a bare array, or an envelope with a `products` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum Feed {
    List(Vec<Product>),
    Envelope { products: Vec<Product> },
}

/// A loaded product catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products already in memory.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from feed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, StorefrontError> {
        let products = match serde_json::from_str::<Feed>(json)? {
            Feed::List(products) => products,
            Feed::Envelope { products } => products,
        };
        tracing::debug!(count = products.len(), "parsed product feed");
        Ok(Self { products })
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Look up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get the products in feed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Consume and return the products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
