use super::types::*;

/// Fluent API for building catalog queries
#[derive(Debug, Clone, Default)]
pub struct CatalogQueryBuilder {
    query: CatalogQuery,
}

impl CatalogQueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self {
            query: CatalogQuery::default(),
        }
    }

    // === Filter methods ===

    /// Accept a value for a categorical facet
    pub fn select(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .selections
            .entry(facet.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Replace the accepted-value set for a categorical facet
    pub fn select_many(mut self, facet: impl Into<String>, values: Vec<String>) -> Self {
        self.query.selections.insert(facet.into(), values);
        self
    }

    /// Require a numeric facet to be at least `min` (normalized units)
    pub fn min_magnitude(mut self, facet: impl Into<String>, min: u64) -> Self {
        self.query.min_magnitudes.insert(facet.into(), min);
        self
    }

    /// Lower price bound
    pub fn min_price(mut self, min: f64) -> Self {
        self.query.min_price = Some(min);
        self
    }

    /// Upper price bound
    pub fn max_price(mut self, max: f64) -> Self {
        self.query.max_price = Some(max);
        self
    }

    // === Search methods ===

    /// Add text search
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.search = Some(text.into());
        self
    }

    // === Sort methods ===

    /// Set sort key and order
    pub fn sort_by(mut self, key: SortKey, order: SortOrder) -> Self {
        self.query.sort = key;
        self.query.order = order;
        self
    }

    // === Pagination methods ===

    /// Set the 1-indexed result page
    pub fn page(mut self, page: u32) -> Self {
        self.query.page = page;
        self
    }

    // === Build method ===

    /// Build the final query
    pub fn build(self) -> CatalogQuery {
        self.query
    }
}

// === Convenience constructors ===

impl CatalogQuery {
    /// Create a simple search query
    pub fn search(text: impl Into<String>) -> Self {
        CatalogQueryBuilder::new().search(text).build()
    }

    /// Create a browse query for one page, cheapest first
    pub fn browse(page: u32) -> Self {
        CatalogQueryBuilder::new().page(page).build()
    }
}
