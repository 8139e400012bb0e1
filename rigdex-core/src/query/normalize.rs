//! Shared helpers for normalizing client filter state before execution.
//!
//! The UI sends whatever the pickers currently hold: untrimmed search text,
//! repeated selections, facets whose accepted set has been emptied again.
//! Normalizing once here keeps the engine predicates simple and makes the
//! query hash stable across equivalent requests.

use super::types::{CatalogQuery, SortOrder};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Produce the canonical form of a query: trimmed search (empty becomes
/// absent), sorted deduplicated selection sets, empty sets removed.
pub fn normalize_query(query: &CatalogQuery) -> CatalogQuery {
    let mut normalized = query.clone();

    normalized.search = normalized.search.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    });

    for accepted in normalized.selections.values_mut() {
        // Deduplicate to keep the predicate loops small
        accepted.sort_unstable();
        accepted.dedup();
    }
    normalized.selections.retain(|_, accepted| !accepted.is_empty());

    normalized
}

/// Compute a stable hash for a query, suitable as a response-cache key.
pub fn hash_query(query: &CatalogQuery) -> u64 {
    let normalized = normalize_query(query);
    let mut hasher = DefaultHasher::new();

    match normalized.search.as_ref() {
        Some(search) => search.to_lowercase().hash(&mut hasher),
        None => ().hash(&mut hasher),
    }

    normalized.selections.hash(&mut hasher);
    normalized.min_magnitudes.hash(&mut hasher);
    normalized.min_price.map(f64::to_bits).hash(&mut hasher);
    normalized.max_price.map(f64::to_bits).hash(&mut hasher);
    normalized.sort.hash(&mut hasher);
    (normalized.order == SortOrder::Descending).hash(&mut hasher);
    normalized.page.hash(&mut hasher);

    hasher.finish()
}
