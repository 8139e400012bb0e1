use rigdex_core::catalog::{CatalogKind, CatalogProfile};
use rigdex_core::query::{CatalogQuery, SortKey};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Deploy-time overrides for the catalog engine.
///
/// Everything here is optional: an absent setting means the built-in profile
/// value stands. Keys of `catalogs` are the catalog kind names
/// (`laptops`, `monitors`, `headsets`, `mini_pcs`, `products`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EngineSettings {
    #[serde(default)]
    pub catalogs: BTreeMap<String, CatalogSettings>,
}

/// Per-catalog overrides.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogSettings {
    pub page_size: Option<usize>,
    pub require_positive_price: Option<bool>,
    /// Sort key applied when the client sends no explicit sort
    /// (`price`, `name`, or a facet name).
    pub default_sort: Option<String>,
}

impl EngineSettings {
    pub fn catalog(&self, kind: CatalogKind) -> Option<&CatalogSettings> {
        self.catalogs.get(kind.as_str())
    }

    /// The built-in profile for a catalog with this deployment's overrides
    /// applied.
    pub fn effective_profile(&self, kind: CatalogKind) -> CatalogProfile {
        let mut profile = *kind.profile();
        if let Some(settings) = self.catalog(kind) {
            if let Some(page_size) = settings.page_size {
                profile.page_size = page_size;
            }
            if let Some(require_positive_price) = settings.require_positive_price {
                profile.require_positive_price = require_positive_price;
            }
        }
        profile
    }

    /// A fresh query carrying this deployment's default sort for the catalog.
    pub fn default_query(&self, kind: CatalogKind) -> CatalogQuery {
        let mut query = CatalogQuery::default();
        if let Some(sort) = self
            .catalog(kind)
            .and_then(|settings| settings.default_sort.clone())
        {
            query.sort = SortKey::from(sort);
        }
        query
    }
}
