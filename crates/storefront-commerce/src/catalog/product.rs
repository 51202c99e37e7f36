//! Product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are read-only once the catalog is loaded; cart lines keep their
/// own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Brand name.
    pub brand: String,
    /// Category name.
    pub category: String,
    /// Selling price.
    pub price: f64,
    /// Discount off the list price, in percent.
    pub discount_percentage: f64,
    /// Average rating.
    pub rating: f64,
    /// Units in stock.
    pub stock: u32,
    /// URL of the listing image.
    #[serde(default)]
    pub thumbnail: String,
}

impl Product {
    /// Create a product with zero price, rating and stock.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            brand: brand.into(),
            category: category.into(),
            price: 0.0,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            thumbnail: String::new(),
        }
    }

    /// Set the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, discount_percentage: f64) -> Self {
        self.discount_percentage = discount_percentage;
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set the thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// List price before the discount, as shown struck through on the card.
    ///
    /// `None` when the discount is 100% or more.
    pub fn original_price(&self) -> Option<f64> {
        if self.discount_percentage >= 100.0 {
            return None;
        }
        Some(self.price * 100.0 / (100.0 - self.discount_percentage))
    }
}
