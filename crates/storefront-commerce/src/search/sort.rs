//! Sort options for the product listing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};

/// A numeric product field the listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Price,
    Rating,
    DiscountPercentage,
}

impl SortField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Rating => "rating",
            SortField::DiscountPercentage => "discountPercentage",
        }
    }

    /// Read the field from a product.
    pub fn value(&self, product: &Product) -> f64 {
        match self {
            SortField::Price => product.price,
            SortField::Rating => product.rating,
            SortField::DiscountPercentage => product.discount_percentage,
        }
    }
}

impl FromStr for SortField {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortField::Price),
            "rating" => Ok(SortField::Rating),
            "discountPercentage" => Ok(SortField::DiscountPercentage),
            other => Err(StorefrontError::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    /// Unrecognized direction; the listing keeps its order.
    #[default]
    Unchanged,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
            SortDirection::Unchanged => "unchanged",
        }
    }

    /// Parse a direction. Anything unrecognized is `Unchanged`.
    pub fn parse(s: &str) -> Self {
        match s {
            "ascending" => SortDirection::Ascending,
            "descending" => SortDirection::Descending,
            _ => SortDirection::Unchanged,
        }
    }
}

/// A sort key such as `price-ascending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    /// The options offered in the sort dropdown.
    pub const ALL: [SortOption; 6] = [
        SortOption::new(SortField::Price, SortDirection::Descending),
        SortOption::new(SortField::Price, SortDirection::Ascending),
        SortOption::new(SortField::Rating, SortDirection::Descending),
        SortOption::new(SortField::Rating, SortDirection::Ascending),
        SortOption::new(SortField::DiscountPercentage, SortDirection::Descending),
        SortOption::new(SortField::DiscountPercentage, SortDirection::Ascending),
    ];

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse `<field>-<direction>`, split at the first `-`.
    ///
    /// The field must be sortable; an unknown direction parses as
    /// [`SortDirection::Unchanged`].
    pub fn parse(key: &str) -> Result<Self, StorefrontError> {
        let (field, direction) = key
            .split_once('-')
            .ok_or_else(|| StorefrontError::UnknownSortField(key.to_string()))?;
        Ok(Self {
            field: field.parse()?,
            direction: SortDirection::parse(direction),
        })
    }

    /// The key this option parses from.
    pub fn key(&self) -> String {
        format!("{}-{}", self.field.as_str(), self.direction.as_str())
    }

    pub fn display_name(&self) -> &'static str {
        match (self.field, self.direction) {
            (SortField::Price, SortDirection::Descending) => "Price: High to Low",
            (SortField::Price, SortDirection::Ascending) => "Price: Low to High",
            (SortField::Rating, SortDirection::Descending) => "Rating: High to Low",
            (SortField::Rating, SortDirection::Ascending) => "Rating: Low to High",
            (SortField::DiscountPercentage, SortDirection::Descending) => "Discount: High to Low",
            (SortField::DiscountPercentage, SortDirection::Ascending) => "Discount: Low to High",
            (_, SortDirection::Unchanged) => "Sort By",
        }
    }

    /// Compare two products under this option.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let (x, y) = (self.field.value(a), self.field.value(b));
        match self.direction {
            SortDirection::Ascending => x.total_cmp(&y),
            SortDirection::Descending => y.total_cmp(&x),
            SortDirection::Unchanged => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for SortOption {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Return a sorted copy of the products. Ties keep their input order.
pub fn sort(option: SortOption, products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    if option.direction != SortDirection::Unchanged {
        sorted.sort_by(|a, b| option.compare(a, b));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(prices: &[f64]) -> Vec<Product> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| Product::new(i as u64 + 1, "p", "b", "c").with_price(*price))
            .collect()
    }

    fn prices(products: &[Product]) -> Vec<f64> {
        products.iter().map(|p| p.price).collect()
    }

    #[test]
    fn test_price_ascending() {
        let option = SortOption::parse("price-ascending").unwrap();
        assert_eq!(prices(&sort(option, &priced(&[50.0, 10.0, 30.0]))), vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_price_descending() {
        let option = SortOption::parse("price-descending").unwrap();
        assert_eq!(prices(&sort(option, &priced(&[50.0, 10.0, 30.0]))), vec![50.0, 30.0, 10.0]);
    }

    #[test]
    fn test_unknown_direction_keeps_order() {
        let option = SortOption::parse("price-sideways").unwrap();
        assert_eq!(option.direction, SortDirection::Unchanged);
        assert_eq!(prices(&sort(option, &priced(&[50.0, 10.0, 30.0]))), vec![50.0, 10.0, 30.0]);
    }

    #[test]
    fn test_unknown_field_is_error() {
        assert!(matches!(
            SortOption::parse("title-ascending"),
            Err(StorefrontError::UnknownSortField(f)) if f == "title"
        ));
        assert!(matches!(
            SortOption::parse("price"),
            Err(StorefrontError::UnknownSortField(_))
        ));
    }

    #[test]
    fn test_split_at_first_dash() {
        let option = SortOption::parse("discountPercentage-descending").unwrap();
        assert_eq!(option.field, SortField::DiscountPercentage);
        assert_eq!(option.direction, SortDirection::Descending);
    }

    #[test]
    fn test_stable_on_ties() {
        let products = vec![
            Product::new(1u64, "a", "b", "c").with_rating(4.5),
            Product::new(2u64, "a", "b", "c").with_rating(3.0),
            Product::new(3u64, "a", "b", "c").with_rating(4.5),
        ];
        let sorted = sort(SortOption::parse("rating-descending").unwrap(), &products);
        let ids: Vec<u64> = sorted.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_all_keys_round_trip() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::parse(&option.key()).unwrap(), option);
            assert_ne!(option.display_name(), "Sort By");
        }
    }
}
