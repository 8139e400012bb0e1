//! # Rigdex Core
//!
//! Core library for the Rigdex catalog platform, providing the faceted
//! catalog query engine and banner rotation logic behind the storefront.
//!
//! ## Overview
//!
//! `rigdex-core` is the business-logic layer of the Rigdex ecosystem,
//! offering:
//!
//! - **Catalog Queries**: one generic flatten/dedup/facet/filter/sort/paginate
//!   pipeline serving every storefront catalog
//! - **Catalog Profiles**: declarative facet-descriptor tables configuring the
//!   laptops, monitors, headsets, mini-PC, and parts catalogs
//! - **Store Seam**: a trait-based read port so queries run against fixtures
//!   in tests and real storage in production
//! - **Banner Rotation**: priority-weighted random placement selection
//!
//! ## Architecture
//!
//! The crate is organized into a few key modules:
//!
//! - [`catalog`]: the query pipeline and per-catalog profiles
//! - [`query`]: query/result types, the fluent builder, normalization
//! - [`store`]: the container read port and per-request engine
//! - [`promo`]: weighted banner rotation
//!
//! ## Examples
//!
//! ```
//! use rigdex_core::catalog::{self, CatalogKind};
//! use rigdex_core::query::{CatalogQueryBuilder, SortKey, SortOrder};
//! use rigdex_model::{BuildRecord, ListingRecord};
//!
//! let containers = vec![BuildRecord::new("office build").with_section(
//!     "laptops",
//!     vec![ListingRecord::new("Aspire 5", 30000.0).with_attr("ram", "8GB")],
//! )];
//!
//! let query = CatalogQueryBuilder::new()
//!     .min_magnitude("ram", 8)
//!     .sort_by(SortKey::Price, SortOrder::Ascending)
//!     .build();
//!
//! let page = catalog::execute(CatalogKind::Laptops.profile(), &containers, &query)?;
//! assert_eq!(page.total_results, 1);
//! # Ok::<(), rigdex_core::error::CatalogError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod promo;
pub mod query;
pub mod store;

pub use catalog::{CatalogKind, CatalogProfile, FacetDef, FacetKind, UnitRule};
pub use error::{CatalogError, Result};
pub use promo::select_placement;
pub use query::{
    CatalogQuery, CatalogQueryBuilder, FilterOptions, ResultPage, SortKey, SortOrder,
};
pub use store::{CatalogEngine, ContainerStore, InMemoryStore};
