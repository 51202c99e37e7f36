//! Application state for the storefront view and its event handlers.
//!
//! Each handler runs one view event to completion and replaces the derived
//! `filtered_products` list; nothing is patched incrementally.

use crate::cart::CartUpdate;
use crate::catalog::Product;
use crate::config::{ResultScope, StorefrontConfig};
use crate::error::{CartNotice, StorefrontError};
use crate::ids::ProductId;
use crate::search::{
    self, derive_definitions, FilterDefinition, FilterKey, FilterSelection, FilterValue,
    SortOption,
};
use crate::user::User;

/// Everything the storefront view renders from.
#[derive(Debug, Clone)]
pub struct StorefrontState {
    /// Full catalog, read-only once loaded.
    pub products: Vec<Product>,
    /// Sidebar filter definitions.
    pub filters: Vec<FilterDefinition>,
    /// Active filter selection.
    pub filters_used: FilterSelection,
    /// Products currently shown.
    pub filtered_products: Vec<Product>,
    /// Current shopper.
    pub user: User,
    /// True until the catalog is loaded.
    pub loading: bool,
    /// Behavior settings.
    pub config: StorefrontConfig,
    /// Filters were supplied by the caller and survive catalog reloads.
    explicit_filters: bool,
}

impl StorefrontState {
    /// Create an empty state waiting for its catalog.
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            products: Vec::new(),
            filters: Vec::new(),
            filters_used: FilterSelection::default(),
            filtered_products: Vec::new(),
            user: User::anonymous(),
            loading: true,
            config,
            explicit_filters: false,
        }
    }

    /// Use explicit filter definitions instead of deriving them from the catalog.
    pub fn with_filters(mut self, filters: Vec<FilterDefinition>) -> Self {
        self.filters = filters;
        self.explicit_filters = true;
        self
    }

    /// Install the catalog and show all of it.
    ///
    /// Derived filter definitions are rebuilt from each new catalog.
    pub fn load_products(&mut self, products: Vec<Product>) {
        if !self.explicit_filters {
            self.filters = derive_definitions(
                &products,
                &self.config.listing.price_bands,
                &self.config.listing.discount_bands,
            );
        }
        self.filtered_products = products.clone();
        self.products = products;
        self.filters_used = FilterSelection::default();
        self.loading = false;
        tracing::debug!(count = self.products.len(), "catalog loaded");
    }

    /// Handle a filter checkbox change.
    pub fn toggle_filter(
        &mut self,
        key: FilterKey,
        value: FilterValue,
        checked: bool,
    ) -> Result<&[Product], StorefrontError> {
        let mut selection = self.filters_used.clone();
        selection.toggle(key, value, checked)?;
        self.filtered_products = selection.apply(&self.products);
        self.filters_used = selection;
        tracing::debug!(
            filter = key.as_str(),
            checked,
            matched = self.filtered_products.len(),
            "filters applied"
        );
        Ok(self.filtered_products.as_slice())
    }

    /// Toggle a checkbox by its label in the filter definitions.
    pub fn toggle_filter_label(
        &mut self,
        key: FilterKey,
        label: &str,
        checked: bool,
    ) -> Result<&[Product], StorefrontError> {
        let value = self
            .filters
            .iter()
            .filter(|d| d.name == key)
            .find_map(|d| d.checkbox(label))
            .ok_or_else(|| StorefrontError::UnknownFilterOption {
                filter: key.as_str(),
                label: label.to_string(),
            })?;
        self.toggle_filter(key, value, checked)
    }

    /// Handle a change in the search box.
    pub fn search(&mut self, query: &str) -> &[Product] {
        let results = match self.config.listing.scope {
            ResultScope::Catalog => search::search(query, &self.products),
            ResultScope::Selection => {
                search::search(query, &self.filters_used.apply(&self.products))
            }
        };
        self.filtered_products = results;
        tracing::debug!(query, matched = self.filtered_products.len(), "search applied");
        &self.filtered_products
    }

    /// Handle a sort dropdown change.
    pub fn sort(&mut self, key: &str) -> Result<&[Product], StorefrontError> {
        let option = SortOption::parse(key)?;
        self.filtered_products = match self.config.listing.scope {
            ResultScope::Catalog => search::sort(option, &self.products),
            ResultScope::Selection => search::sort(option, &self.filtered_products),
        };
        tracing::debug!(sort = %option, "sort applied");
        Ok(self.filtered_products.as_slice())
    }

    /// Handle an add-to-cart button press.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<CartUpdate, CartNotice> {
        let result = self.try_add_to_cart(product_id);
        match &result {
            Ok(update) => tracing::info!(%product_id, ?update, "cart updated"),
            Err(notice) => tracing::warn!(%product_id, %notice, "add to cart rejected"),
        }
        result
    }

    fn try_add_to_cart(&mut self, product_id: ProductId) -> Result<CartUpdate, CartNotice> {
        if !self.user.is_signed_in() {
            return Err(CartNotice::SignInRequired);
        }
        let max = self.config.cart.effective_max_quantity();
        if let Some(line) = self.user.cart.line(product_id) {
            let product = line.product.clone();
            return self.user.cart.add_product(&product, max);
        }
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(CartNotice::ProductUnavailable(product_id))?;
        self.user.cart.add_product(product, max)
    }

    /// Sign the shopper in.
    pub fn sign_in(&mut self, email: &str) -> Result<(), StorefrontError> {
        self.user.sign_in(email)
    }

    /// Sign the shopper out, dropping their cart.
    pub fn sign_out(&mut self) {
        self.user.sign_out();
    }
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::NumericRange;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1u64, "iPhone 9", "Apple", "smartphones")
                .with_price(549.0)
                .with_stock(3),
            Product::new(2u64, "Galaxy S", "Samsung", "smartphones")
                .with_price(1249.0)
                .with_stock(36),
            Product::new(3u64, "MacBook Pro", "Apple", "laptops")
                .with_price(1749.0)
                .with_stock(83),
        ]
    }

    fn loaded() -> StorefrontState {
        let mut state = StorefrontState::default();
        state.load_products(catalog());
        state
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_load_products() {
        let mut state = StorefrontState::default();
        assert!(state.loading);
        state.load_products(catalog());
        assert!(!state.loading);
        assert_eq!(ids(&state.filtered_products), vec![1, 2, 3]);
        assert_eq!(state.filters.len(), 4);
    }

    #[test]
    fn test_explicit_filters_kept() {
        let defs = vec![FilterDefinition::text(
            FilterKey::Brand,
            vec!["Apple".to_string()],
        )];
        let mut state = StorefrontState::default().with_filters(defs.clone());
        state.load_products(catalog());
        assert_eq!(state.filters, defs);
    }

    #[test]
    fn test_toggle_filter_updates_state() {
        let mut state = loaded();
        state
            .toggle_filter(FilterKey::Brand, "Apple".into(), true)
            .unwrap();
        assert_eq!(state.filters_used.brand, vec!["Apple".to_string()]);
        assert_eq!(ids(&state.filtered_products), vec![1, 3]);
    }

    #[test]
    fn test_toggle_error_leaves_state() {
        let mut state = loaded();
        let result = state.toggle_filter(
            FilterKey::Brand,
            NumericRange::new(0.0, 1.0).into(),
            true,
        );
        assert!(result.is_err());
        assert!(state.filters_used.is_empty());
        assert_eq!(state.filtered_products.len(), 3);
    }

    #[test]
    fn test_toggle_by_label() {
        let mut state = loaded();
        state
            .toggle_filter_label(FilterKey::Price, "500 - 1000", true)
            .unwrap();
        assert_eq!(ids(&state.filtered_products), vec![1]);
    }

    #[test]
    fn test_toggle_unknown_label() {
        let mut state = loaded();
        let err = state
            .toggle_filter_label(FilterKey::Price, "free", true)
            .unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::UnknownFilterOption { filter: "price", ref label } if label == "free"
        ));
        assert!(state.filters_used.is_empty());
    }

    #[test]
    fn test_reload_rebuilds_derived_filters() {
        let mut state = StorefrontState::default();
        state.load_products(vec![Product::new(1u64, "iPhone 9", "Apple", "smartphones")]);
        state.load_products(vec![Product::new(2u64, "Galaxy S", "Samsung", "smartphones")]);

        let brands = state
            .filters
            .iter()
            .find(|d| d.name == FilterKey::Brand)
            .map(|d| d.labels())
            .unwrap();
        assert_eq!(brands, vec!["Samsung"]);
        state
            .toggle_filter_label(FilterKey::Brand, "Samsung", true)
            .unwrap();
        assert_eq!(ids(&state.filtered_products), vec![2]);
    }

    #[test]
    fn test_reload_keeps_explicit_filters() {
        let defs = vec![FilterDefinition::text(
            FilterKey::Brand,
            vec!["Apple".to_string()],
        )];
        let mut state = StorefrontState::default().with_filters(defs.clone());
        state.load_products(catalog());
        state.load_products(vec![Product::new(9u64, "Galaxy S", "Samsung", "smartphones")]);
        assert_eq!(state.filters, defs);
    }

    #[test]
    fn test_search_drops_filters_by_default() {
        let mut state = loaded();
        state
            .toggle_filter(FilterKey::Category, "laptops".into(), true)
            .unwrap();
        state.search("apple");
        assert_eq!(ids(&state.filtered_products), vec![1, 3]);
    }

    #[test]
    fn test_search_within_selection_scope() {
        let mut config = StorefrontConfig::default();
        config.listing.scope = ResultScope::Selection;
        let mut state = StorefrontState::new(config);
        state.load_products(catalog());
        state
            .toggle_filter(FilterKey::Category, "laptops".into(), true)
            .unwrap();
        state.search("apple");
        assert_eq!(ids(&state.filtered_products), vec![3]);
    }

    #[test]
    fn test_sort_uses_catalog_by_default() {
        let mut state = loaded();
        state
            .toggle_filter(FilterKey::Brand, "Samsung".into(), true)
            .unwrap();
        state.sort("price-descending").unwrap();
        assert_eq!(ids(&state.filtered_products), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_unknown_field_keeps_listing() {
        let mut state = loaded();
        state.search("galaxy");
        assert!(state.sort("title-ascending").is_err());
        assert_eq!(ids(&state.filtered_products), vec![2]);
    }

    #[test]
    fn test_add_requires_sign_in() {
        let mut state = loaded();
        assert_eq!(
            state.add_to_cart(ProductId::new(1)),
            Err(CartNotice::SignInRequired)
        );
        assert!(state.user.cart.is_empty());
    }

    #[test]
    fn test_add_unknown_product() {
        let mut state = loaded();
        state.sign_in("shopper@example.com").unwrap();
        assert_eq!(
            state.add_to_cart(ProductId::new(99)),
            Err(CartNotice::ProductUnavailable(ProductId::new(99)))
        );
        assert!(state.user.cart.is_empty());
    }

    #[test]
    fn test_add_until_stock() {
        let mut state = loaded();
        state.sign_in("shopper@example.com").unwrap();
        assert_eq!(state.add_to_cart(ProductId::new(1)), Ok(CartUpdate::Added));
        state.add_to_cart(ProductId::new(1)).unwrap();
        state.add_to_cart(ProductId::new(1)).unwrap();
        assert_eq!(
            state.add_to_cart(ProductId::new(1)),
            Err(CartNotice::StockExceeded { stock: 3 })
        );
        assert_eq!(state.user.cart.item_count(), 3);
    }

    #[test]
    fn test_configured_cap() {
        let mut config = StorefrontConfig::default();
        config.cart.max_quantity_per_line = 2;
        let mut state = StorefrontState::new(config);
        state.load_products(catalog());
        state.sign_in("shopper@example.com").unwrap();
        state.add_to_cart(ProductId::new(2)).unwrap();
        state.add_to_cart(ProductId::new(2)).unwrap();
        assert_eq!(
            state.add_to_cart(ProductId::new(2)),
            Err(CartNotice::QuantityLimit { max: 2 })
        );
    }

    #[test]
    fn test_cap_above_limit_is_clamped() {
        let mut config = StorefrontConfig::default();
        config.cart.max_quantity_per_line = 20;
        let mut state = StorefrontState::new(config);
        state.load_products(vec![Product::new(5u64, "Watch", "Fossil", "watches")
            .with_price(100.0)
            .with_stock(50)]);
        state.sign_in("shopper@example.com").unwrap();
        for _ in 0..10 {
            state.add_to_cart(ProductId::new(5)).unwrap();
        }
        assert_eq!(
            state.add_to_cart(ProductId::new(5)),
            Err(CartNotice::QuantityLimit { max: 10 })
        );
        assert_eq!(state.user.cart.item_count(), 10);
    }

    #[test]
    fn test_zero_cap_adds_nothing() {
        let mut config = StorefrontConfig::default();
        config.cart.max_quantity_per_line = 0;
        let mut state = StorefrontState::new(config);
        state.load_products(catalog());
        state.sign_in("shopper@example.com").unwrap();
        assert_eq!(
            state.add_to_cart(ProductId::new(2)),
            Err(CartNotice::QuantityLimit { max: 0 })
        );
        assert!(state.user.cart.is_empty());
    }

    #[test]
    fn test_sign_out_clears_cart() {
        let mut state = loaded();
        state.sign_in("shopper@example.com").unwrap();
        state.add_to_cart(ProductId::new(2)).unwrap();
        state.sign_out();
        assert!(!state.user.is_signed_in());
        assert!(state.user.cart.is_empty());
    }
}
