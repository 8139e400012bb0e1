//! The read seam between storage and the pure query pipeline.

use crate::catalog::{self, CatalogKind, CatalogProfile};
use crate::error::Result;
use crate::query::{CatalogQuery, ResultPage};
use rigdex_model::{BuildRecord, ListingRecord};
use std::collections::BTreeMap;

/// Read port over whatever holds the build containers.
///
/// The engine only ever needs the container list as materialized data; keeping
/// the fetch behind a trait lets the pipeline run against fixtures in tests
/// and against the real store in production.
#[cfg_attr(test, mockall::automock)]
pub trait ContainerStore {
    /// All build containers, in store order.
    fn fetch_containers(&self) -> Result<Vec<BuildRecord>>;
}

/// Trivial [`ContainerStore`] over an in-memory container list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    containers: Vec<BuildRecord>,
}

impl InMemoryStore {
    pub fn new(containers: Vec<BuildRecord>) -> Self {
        Self { containers }
    }
}

impl ContainerStore for InMemoryStore {
    fn fetch_containers(&self) -> Result<Vec<BuildRecord>> {
        Ok(self.containers.clone())
    }
}

/// Per-request catalog querying over a container store.
///
/// Holds no cross-request state: every call re-fetches the containers and
/// recomputes the page, so results always reflect the store's current data.
#[derive(Debug, Clone)]
pub struct CatalogEngine<S> {
    store: S,
    overrides: BTreeMap<CatalogKind, CatalogProfile>,
}

impl<S: ContainerStore> CatalogEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            overrides: BTreeMap::new(),
        }
    }

    /// Replace the built-in profile for the override's catalog kind
    /// (page-size or pricing-policy tweaks from settings).
    pub fn with_profile(mut self, profile: CatalogProfile) -> Self {
        self.overrides.insert(profile.kind, profile);
        self
    }

    /// Effective profile for a catalog, overrides applied.
    pub fn profile(&self, kind: CatalogKind) -> &CatalogProfile {
        self.overrides.get(&kind).unwrap_or_else(|| kind.profile())
    }

    /// Fetch the containers and run one catalog query.
    pub fn browse(
        &self,
        kind: CatalogKind,
        query: &CatalogQuery,
    ) -> Result<ResultPage<ListingRecord>> {
        let containers = self.store.fetch_containers()?;
        catalog::execute(self.profile(kind), &containers, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn engine_surfaces_store_failures() {
        let mut store = MockContainerStore::new();
        store
            .expect_fetch_containers()
            .returning(|| Err(CatalogError::Fetch("connection refused".into())));

        let engine = CatalogEngine::new(store);
        let result = engine.browse(CatalogKind::Laptops, &CatalogQuery::default());
        assert!(matches!(result, Err(CatalogError::Fetch(_))));
    }

    #[test]
    fn profile_override_changes_page_size() {
        let mut profile = *CatalogKind::Laptops.profile();
        profile.page_size = 2;

        let containers = vec![BuildRecord::new("b").with_section(
            "laptops",
            (0..5)
                .map(|i| ListingRecord::new(format!("L{i}"), f64::from(i)))
                .collect(),
        )];
        let engine = CatalogEngine::new(InMemoryStore::new(containers)).with_profile(profile);

        let page = engine
            .browse(CatalogKind::Laptops, &CatalogQuery::default())
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_results, 5);
        assert!(page.has_more);
    }
}
