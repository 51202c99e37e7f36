//! Storefront configuration.

use crate::cart::MAX_QUANTITY_PER_LINE;
use crate::search::NumericOption;
use serde::{Deserialize, Deserializer, Serialize};

/// Storefront configuration. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Cart limits.
    #[serde(default)]
    pub cart: CartConfig,

    /// Listing behavior.
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Cart limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Per-line quantity cap, between 1 and [`MAX_QUANTITY_PER_LINE`].
    #[serde(
        default = "default_max_quantity",
        deserialize_with = "deserialize_max_quantity"
    )]
    pub max_quantity_per_line: u32,
}

fn default_max_quantity() -> u32 {
    MAX_QUANTITY_PER_LINE
}

fn deserialize_max_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u32::deserialize(deserializer)?;
    if !(1..=MAX_QUANTITY_PER_LINE).contains(&value) {
        return Err(serde::de::Error::custom(format!(
            "max_quantity_per_line must be between 1 and {}, got {}",
            MAX_QUANTITY_PER_LINE, value
        )));
    }
    Ok(value)
}

impl CartConfig {
    /// The cap actually enforced; the hard limit wins over larger settings.
    pub fn effective_max_quantity(&self) -> u32 {
        self.max_quantity_per_line.min(MAX_QUANTITY_PER_LINE)
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            max_quantity_per_line: default_max_quantity(),
        }
    }
}

/// What search and sort start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResultScope {
    /// Start from the full catalog; active filters are dropped.
    #[default]
    Catalog,
    /// Start from the products passing the active filters.
    Selection,
}

/// Listing behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Input set for search and sort.
    #[serde(default)]
    pub scope: ResultScope,

    /// Price bands offered when filters are derived from the catalog.
    #[serde(default = "default_price_bands")]
    pub price_bands: Vec<NumericOption>,

    /// Discount bands offered when filters are derived from the catalog.
    #[serde(default = "default_discount_bands")]
    pub discount_bands: Vec<NumericOption>,
}

fn default_price_bands() -> Vec<NumericOption> {
    vec![
        NumericOption::new("Below 500", 0.0, 500.0),
        NumericOption::new("500 - 1000", 500.0, 1000.0),
        NumericOption::new("1000 - 2000", 1000.0, 2000.0),
        NumericOption::new("Above 2000", 2000.0, f64::MAX),
    ]
}

fn default_discount_bands() -> Vec<NumericOption> {
    vec![
        NumericOption::new("Below 5%", 0.0, 5.0),
        NumericOption::new("5% - 10%", 5.0, 10.0),
        NumericOption::new("10% - 15%", 10.0, 15.0),
        NumericOption::new("Above 15%", 15.0, 100.0),
    ]
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            scope: ResultScope::default(),
            price_bands: default_price_bands(),
            discount_bands: default_discount_bands(),
        }
    }
}
