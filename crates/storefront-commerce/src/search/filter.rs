//! Filter selection and the combined product predicate.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};

/// A filterable product attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    /// Brand name (string options).
    Brand,
    /// Category name (string options).
    Category,
    /// Price (numeric ranges).
    Price,
    /// Discount percentage (numeric ranges).
    DiscountPercentage,
}

impl FilterKey {
    /// All filterable attributes, in sidebar order.
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Brand,
        FilterKey::Category,
        FilterKey::Price,
        FilterKey::DiscountPercentage,
    ];

    /// Wire name of the attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Brand => "brand",
            FilterKey::Category => "category",
            FilterKey::Price => "price",
            FilterKey::DiscountPercentage => "discountPercentage",
        }
    }

    /// Check if this attribute is filtered by numeric ranges.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FilterKey::Price | FilterKey::DiscountPercentage)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand" => Ok(FilterKey::Brand),
            "category" => Ok(FilterKey::Category),
            "price" => Ok(FilterKey::Price),
            "discountPercentage" => Ok(FilterKey::DiscountPercentage),
            other => Err(StorefrontError::UnknownFilter(other.to_string())),
        }
    }
}

/// An open numeric interval `(minimum, maximum)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    /// Exclusive lower bound.
    pub minimum: f64,
    /// Exclusive upper bound.
    pub maximum: f64,
}

impl NumericRange {
    /// Create a range.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    /// Strict containment: a value equal to either bound is outside.
    pub fn contains(&self, value: f64) -> bool {
        self.minimum < value && value < self.maximum
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.minimum, self.maximum)
    }
}

impl FromStr for NumericRange {
    type Err = String;

    /// Parse `MIN:MAX`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once(':')
            .ok_or_else(|| format!("expected MIN:MAX, got {:?}", s))?;
        let minimum = min
            .trim()
            .parse()
            .map_err(|_| format!("invalid minimum {:?}", min))?;
        let maximum = max
            .trim()
            .parse()
            .map_err(|_| format!("invalid maximum {:?}", max))?;
        Ok(Self { minimum, maximum })
    }
}

/// The value carried by one filter checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A brand or category name.
    Text(String),
    /// A price or discount band.
    Range(NumericRange),
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<NumericRange> for FilterValue {
    fn from(range: NumericRange) -> Self {
        FilterValue::Range(range)
    }
}

/// The currently active filter values, per attribute.
///
/// An empty list places no constraint on its attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    /// Accepted brands.
    pub brand: Vec<String>,
    /// Accepted categories.
    pub category: Vec<String>,
    /// Accepted price bands.
    pub price: Vec<NumericRange>,
    /// Accepted discount bands.
    pub discount_percentage: Vec<NumericRange>,
}

impl FilterSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no attribute is constrained.
    pub fn is_empty(&self) -> bool {
        self.brand.is_empty()
            && self.category.is_empty()
            && self.price.is_empty()
            && self.discount_percentage.is_empty()
    }

    /// Apply a checkbox change.
    ///
    /// Checking appends the value. Unchecking removes the first exact match and
    /// is a no-op when there is none.
    pub fn toggle(
        &mut self,
        key: FilterKey,
        value: FilterValue,
        checked: bool,
    ) -> Result<(), StorefrontError> {
        match (key, value) {
            (FilterKey::Brand | FilterKey::Category, FilterValue::Text(text)) => {
                let values = self.text_values_mut(key);
                if checked {
                    values.push(text);
                } else if let Some(pos) = values.iter().position(|v| *v == text) {
                    values.remove(pos);
                }
                Ok(())
            }
            (FilterKey::Price | FilterKey::DiscountPercentage, FilterValue::Range(range)) => {
                let ranges = self.ranges_mut(key);
                if checked {
                    ranges.push(range);
                } else if let Some(pos) = ranges.iter().position(|r| *r == range) {
                    ranges.remove(pos);
                }
                Ok(())
            }
            (key, _) => Err(StorefrontError::FilterValueMismatch {
                filter: key.as_str(),
                expected: if key.is_numeric() { "range" } else { "text" },
            }),
        }
    }

    /// Check a product against every attribute.
    pub fn matches(&self, product: &Product) -> bool {
        accepts_text(&self.brand, &product.brand)
            && accepts_text(&self.category, &product.category)
            && accepts_number(&self.price, product.price)
            && accepts_number(&self.discount_percentage, product.discount_percentage)
    }

    /// Filter products, preserving their order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }

    fn text_values_mut(&mut self, key: FilterKey) -> &mut Vec<String> {
        match key {
            FilterKey::Category => &mut self.category,
            _ => &mut self.brand,
        }
    }

    fn ranges_mut(&mut self, key: FilterKey) -> &mut Vec<NumericRange> {
        match key {
            FilterKey::DiscountPercentage => &mut self.discount_percentage,
            _ => &mut self.price,
        }
    }
}

fn accepts_text(accepted: &[String], value: &str) -> bool {
    accepted.is_empty() || accepted.iter().any(|a| a == value)
}

fn accepts_number(ranges: &[NumericRange], value: f64) -> bool {
    ranges.is_empty() || ranges.iter().any(|r| r.contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, brand: &str, category: &str, price: f64, discount: f64) -> Product {
        Product::new(id, format!("Item {}", id), brand, category)
            .with_price(price)
            .with_discount(discount)
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Apple", "smartphones", 549.0, 12.0),
            product(2, "Samsung", "smartphones", 1249.0, 15.0),
            product(3, "Apple", "laptops", 1749.0, 4.0),
            product(4, "Huawei", "laptops", 1099.0, 10.0),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        let selection = FilterSelection::new();
        assert!(selection.is_empty());
        assert_eq!(ids(&selection.apply(&catalog())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_brand_filter() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterKey::Brand, "Apple".into(), true).unwrap();
        assert_eq!(ids(&selection.apply(&catalog())), vec![1, 3]);

        selection.toggle(FilterKey::Brand, "Huawei".into(), true).unwrap();
        assert_eq!(ids(&selection.apply(&catalog())), vec![1, 3, 4]);
    }

    #[test]
    fn test_attributes_are_anded() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterKey::Brand, "Apple".into(), true).unwrap();
        selection
            .toggle(FilterKey::Category, "laptops".into(), true)
            .unwrap();
        assert_eq!(ids(&selection.apply(&catalog())), vec![3]);
    }

    #[test]
    fn test_range_bounds_are_exclusive() {
        let mut selection = FilterSelection::new();
        selection
            .toggle(FilterKey::Price, NumericRange::new(549.0, 1249.0).into(), true)
            .unwrap();
        assert_eq!(ids(&selection.apply(&catalog())), vec![4]);
    }

    #[test]
    fn test_any_range_matches() {
        let mut selection = FilterSelection::new();
        selection
            .toggle(
                FilterKey::DiscountPercentage,
                NumericRange::new(0.0, 5.0).into(),
                true,
            )
            .unwrap();
        selection
            .toggle(
                FilterKey::DiscountPercentage,
                NumericRange::new(14.0, 20.0).into(),
                true,
            )
            .unwrap();
        assert_eq!(ids(&selection.apply(&catalog())), vec![2, 3]);
    }

    #[test]
    fn test_uncheck_removes_first_match_only() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterKey::Brand, "Apple".into(), true).unwrap();
        selection.toggle(FilterKey::Brand, "Apple".into(), true).unwrap();
        selection.toggle(FilterKey::Brand, "Apple".into(), false).unwrap();
        assert_eq!(selection.brand, vec!["Apple".to_string()]);
    }

    #[test]
    fn test_uncheck_missing_is_noop() {
        let mut selection = FilterSelection::new();
        selection
            .toggle(FilterKey::Price, NumericRange::new(0.0, 10.0).into(), true)
            .unwrap();
        let before = selection.clone();
        selection
            .toggle(FilterKey::Price, NumericRange::new(0.0, 11.0).into(), false)
            .unwrap();
        assert_eq!(selection, before);
    }

    #[test]
    fn test_value_kind_mismatch() {
        let mut selection = FilterSelection::new();
        let err = selection
            .toggle(FilterKey::Price, "cheap".into(), true)
            .unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::FilterValueMismatch {
                filter: "price",
                expected: "range"
            }
        ));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_filter_key_parse() {
        assert_eq!(
            "discountPercentage".parse::<FilterKey>().unwrap(),
            FilterKey::DiscountPercentage
        );
        assert!(matches!(
            "colour".parse::<FilterKey>(),
            Err(StorefrontError::UnknownFilter(_))
        ));
    }

    #[test]
    fn test_range_parse() {
        let range: NumericRange = "10:50.5".parse().unwrap();
        assert_eq!(range, NumericRange::new(10.0, 50.5));
        assert!("10".parse::<NumericRange>().is_err());
        assert!("a:b".parse::<NumericRange>().is_err());
    }
}
