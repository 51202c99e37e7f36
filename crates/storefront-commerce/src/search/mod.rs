//! Listing module.
//!
//! Contains the filter predicate builder, the search matcher and the sort
//! comparator selector.

mod definition;
mod filter;
mod query;
mod sort;

pub use definition::{derive_definitions, FilterDefinition, FilterOptions, NumericOption};
pub use filter::{FilterKey, FilterSelection, FilterValue, NumericRange};
pub use query::{matches_query, search};
pub use sort::{sort, SortDirection, SortField, SortOption};
