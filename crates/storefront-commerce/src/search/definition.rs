//! Filter definitions shown in the sidebar.

use crate::catalog::Product;
use crate::search::{FilterKey, FilterValue, NumericRange};
use serde::{Deserialize, Serialize};

/// One sidebar filter: an attribute and its checkbox options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefinition {
    /// Attribute being filtered.
    pub name: FilterKey,
    /// Checkbox options.
    #[serde(flatten)]
    pub options: FilterOptions,
}

/// Checkbox options of a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilterOptions {
    /// Exact string values (brand, category).
    #[serde(rename = "string")]
    Text {
        #[serde(rename = "stringValue")]
        values: Vec<String>,
    },
    /// Numeric bands (price, discount).
    #[serde(rename = "numeric")]
    Numeric {
        #[serde(rename = "numericValue")]
        values: Vec<NumericOption>,
    },
}

/// A labelled numeric band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericOption {
    /// Checkbox label.
    #[serde(rename = "value")]
    pub label: String,
    /// Exclusive lower bound.
    pub greater_than: f64,
    /// Exclusive upper bound.
    pub less_than: f64,
}

impl NumericOption {
    /// Create a band.
    pub fn new(label: impl Into<String>, greater_than: f64, less_than: f64) -> Self {
        Self {
            label: label.into(),
            greater_than,
            less_than,
        }
    }

    /// The range selected when this box is checked.
    pub fn range(&self) -> NumericRange {
        NumericRange::new(self.greater_than, self.less_than)
    }
}

impl FilterDefinition {
    /// A string filter with the given values.
    pub fn text(name: FilterKey, values: Vec<String>) -> Self {
        Self {
            name,
            options: FilterOptions::Text { values },
        }
    }

    /// A numeric filter with the given bands.
    pub fn numeric(name: FilterKey, values: Vec<NumericOption>) -> Self {
        Self {
            name,
            options: FilterOptions::Numeric { values },
        }
    }

    /// Checkbox labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        match &self.options {
            FilterOptions::Text { values } => values.iter().map(String::as_str).collect(),
            FilterOptions::Numeric { values } => values.iter().map(|o| o.label.as_str()).collect(),
        }
    }

    /// Resolve a checkbox label to the value it toggles.
    pub fn checkbox(&self, label: &str) -> Option<FilterValue> {
        match &self.options {
            FilterOptions::Text { values } => values
                .iter()
                .find(|v| *v == label)
                .map(|v| FilterValue::Text(v.clone())),
            FilterOptions::Numeric { values } => values
                .iter()
                .find(|o| o.label == label)
                .map(|o| FilterValue::Range(o.range())),
        }
    }
}

/// Build the sidebar filters for a catalog.
///
/// Brands and categories are listed in first-seen order; empty brand names
/// are skipped.
pub fn derive_definitions(
    products: &[Product],
    price_bands: &[NumericOption],
    discount_bands: &[NumericOption],
) -> Vec<FilterDefinition> {
    vec![
        FilterDefinition::text(FilterKey::Brand, distinct(products, |p| &p.brand)),
        FilterDefinition::text(FilterKey::Category, distinct(products, |p| &p.category)),
        FilterDefinition::numeric(FilterKey::Price, price_bands.to_vec()),
        FilterDefinition::numeric(FilterKey::DiscountPercentage, discount_bands.to_vec()),
    ]
}

fn distinct<'a>(products: &'a [Product], field: impl Fn(&'a Product) -> &'a String) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        let value = field(product);
        if !value.is_empty() && !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}
