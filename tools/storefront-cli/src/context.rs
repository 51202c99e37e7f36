//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use storefront_commerce::catalog::Catalog;
use storefront_commerce::search::FilterDefinition;
use storefront_commerce::StorefrontState;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    ///
    /// A `--catalog` flag takes precedence over `catalog.path`.
    pub fn load(config_path: Option<&str>, catalog: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let mut config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        if catalog.is_some() {
            config.catalog.path = catalog;
        }

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["storefront.toml", ".storefront.toml", "storefront.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Build the storefront state from the configured catalog.
    pub fn load_state(&self) -> Result<StorefrontState> {
        let Some(path) = self.config.catalog.path.as_deref() else {
            bail!("No catalog configured; pass --catalog <FILE> or set catalog.path");
        };
        let path = self.resolve_path(path);
        let catalog = Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        self.output
            .debug(&format!("Loaded {} products from {}", catalog.len(), path.display()));

        let mut state = StorefrontState::new(self.config.storefront.clone());
        if let Some(filters) = self.config.catalog.filters.as_deref() {
            state = state.with_filters(self.load_filters(filters)?);
        }
        state.load_products(catalog.into_products());
        Ok(state)
    }

    fn load_filters(&self, path: &str) -> Result<Vec<FilterDefinition>> {
        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read filters file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse filters file: {}", path.display()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
