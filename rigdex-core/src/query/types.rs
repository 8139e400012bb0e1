use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main query structure that works for every catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search against the name and the profile's searchable facets.
    pub search: Option<String>,
    /// Accepted values per categorical facet. OR within a facet, AND across
    /// facets; matching is case-insensitive substring containment.
    #[serde(default)]
    pub selections: BTreeMap<String, Vec<String>>,
    /// Inclusive lower bound per numeric facet, in normalized units
    /// (GB for capacities).
    #[serde(default)]
    pub min_magnitudes: BTreeMap<String, u64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub order: SortOrder,
    /// 1-indexed result page.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: None,
            selections: BTreeMap::new(),
            min_magnitudes: BTreeMap::new(),
            min_price: None,
            max_price: None,
            sort: SortKey::default(),
            order: SortOrder::default(),
            page: 1,
        }
    }
}

/// Sort key for catalog queries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    Price,
    Name,
    /// Sort by one of the profile's own facets (e.g. `ram`, `refresh_rate`).
    Facet(String),
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Price
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        match s.as_str() {
            "price" => SortKey::Price,
            "name" => SortKey::Name,
            _ => SortKey::Facet(s),
        }
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Price => "price".to_string(),
            SortKey::Name => "name".to_string(),
            SortKey::Facet(facet) => facet,
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Price => "price",
            SortKey::Name => "name",
            SortKey::Facet(facet) => facet.as_str(),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

/// One page of catalog results plus the full facet option space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPage<T> {
    /// Filtered, sorted, paginated listings.
    pub items: Vec<T>,
    /// Count after filtering, before pagination.
    pub total_results: usize,
    /// Whether pages beyond this one exist.
    pub has_more: bool,
    /// Facet options derived from the deduplicated, unfiltered set, so the
    /// pickers never shrink while the user narrows another facet.
    pub filter_options: FilterOptions,
}

/// Distinct facet values observed across a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Exact string values per categorical facet, sorted lexicographically.
    pub categorical: BTreeMap<String, Vec<String>>,
    /// Parsed magnitudes per numeric facet, sorted ascending.
    pub magnitudes: BTreeMap<String, Vec<u64>>,
}
