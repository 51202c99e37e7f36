//! Free-text search over title, brand and category.

use crate::catalog::Product;

/// Check if a product matches a search query.
///
/// Case-insensitive substring match on title, brand or category. The empty
/// query matches every product.
pub fn matches_query(product: &Product, query: &str) -> bool {
    matches_lowered(product, &query.to_lowercase())
}

/// Products matching the query, in input order.
pub fn search(query: &str, products: &[Product]) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| matches_lowered(p, &needle))
        .cloned()
        .collect()
}

fn matches_lowered(product: &Product, needle: &str) -> bool {
    contains(&product.title, needle)
        || contains(&product.brand, needle)
        || contains(&product.category, needle)
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
