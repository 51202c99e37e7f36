//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::StorefrontConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog sources.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Storefront behavior (`[cart]`, `[listing]`).
    #[serde(flatten)]
    pub storefront: StorefrontConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Product feed JSON file.
    #[serde(default)]
    pub path: Option<String>,

    /// Filter definitions JSON file. Derived from the catalog when absent.
    #[serde(default)]
    pub filters: Option<String>,
}
