//! Declarative facet descriptors and the per-catalog profiles.
//!
//! Each storefront catalog is a thin configuration over the same engine: a
//! section field naming where builds embed its listings, a facet table, the
//! searchable fields, and pagination/pricing policy. Adding a catalog means
//! adding a row here, not another query procedure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a facet's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    /// Free-text value matched by case-insensitive substring.
    Categorical,
    /// Embedded magnitude ("16GB", "27\"") compared numerically.
    Magnitude(UnitRule),
}

/// Unit handling for magnitude facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRule {
    /// Capacity in GB/TB; TB values normalize to GB (x1024).
    Storage,
    /// Take the leading integer verbatim (inches, Hz).
    Verbatim,
}

/// One filterable dimension of a catalog.
#[derive(Debug, Clone, Copy)]
pub struct FacetDef {
    pub name: &'static str,
    pub kind: FacetKind,
}

/// Complete engine configuration for one catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogProfile {
    pub kind: CatalogKind,
    /// Field under which build containers embed this catalog's listings.
    pub section_field: &'static str,
    pub facets: &'static [FacetDef],
    /// Facet fields included in free-text search alongside the name.
    pub searchable: &'static [&'static str],
    pub page_size: usize,
    /// Drop listings priced at or below zero. Only the parts feed ingests
    /// placeholder rows, so only that catalog enables this.
    pub require_positive_price: bool,
}

impl CatalogProfile {
    pub fn facet(&self, name: &str) -> Option<&'static FacetDef> {
        self.facets.iter().find(|f| f.name == name)
    }

    pub fn is_searchable(&self, field: &str) -> bool {
        self.searchable.contains(&field)
    }
}

/// The storefront catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Laptops,
    Monitors,
    Headsets,
    MiniPcs,
    Products,
}

impl CatalogKind {
    pub fn all() -> &'static [CatalogKind] {
        use CatalogKind::*;
        &[Laptops, Monitors, Headsets, MiniPcs, Products]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Laptops => "laptops",
            CatalogKind::Monitors => "monitors",
            CatalogKind::Headsets => "headsets",
            CatalogKind::MiniPcs => "mini_pcs",
            CatalogKind::Products => "products",
        }
    }

    pub fn profile(&self) -> &'static CatalogProfile {
        match self {
            CatalogKind::Laptops => &LAPTOPS,
            CatalogKind::Monitors => &MONITORS,
            CatalogKind::Headsets => &HEADSETS,
            CatalogKind::MiniPcs => &MINI_PCS,
            CatalogKind::Products => &PRODUCTS,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static LAPTOP_FACETS: &[FacetDef] = &[
    FacetDef {
        name: "brand",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "processor",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "ram",
        kind: FacetKind::Magnitude(UnitRule::Storage),
    },
    FacetDef {
        name: "storage",
        kind: FacetKind::Magnitude(UnitRule::Storage),
    },
    FacetDef {
        name: "size",
        kind: FacetKind::Magnitude(UnitRule::Verbatim),
    },
];

static MONITOR_FACETS: &[FacetDef] = &[
    FacetDef {
        name: "brand",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "resolution",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "panel_type",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "size",
        kind: FacetKind::Magnitude(UnitRule::Verbatim),
    },
    FacetDef {
        name: "refresh_rate",
        kind: FacetKind::Magnitude(UnitRule::Verbatim),
    },
];

static HEADSET_FACETS: &[FacetDef] = &[
    FacetDef {
        name: "brand",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "connectivity",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "type",
        kind: FacetKind::Categorical,
    },
];

static MINI_PC_FACETS: &[FacetDef] = &[
    FacetDef {
        name: "brand",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "processor",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "ram",
        kind: FacetKind::Magnitude(UnitRule::Storage),
    },
    FacetDef {
        name: "storage",
        kind: FacetKind::Magnitude(UnitRule::Storage),
    },
];

static PRODUCT_FACETS: &[FacetDef] = &[
    FacetDef {
        name: "brand",
        kind: FacetKind::Categorical,
    },
    FacetDef {
        name: "category",
        kind: FacetKind::Categorical,
    },
];

/// Laptop catalog configuration.
pub static LAPTOPS: CatalogProfile = CatalogProfile {
    kind: CatalogKind::Laptops,
    section_field: "laptops",
    facets: LAPTOP_FACETS,
    searchable: &["brand", "processor"],
    page_size: 12,
    require_positive_price: false,
};

/// Monitor catalog configuration.
pub static MONITORS: CatalogProfile = CatalogProfile {
    kind: CatalogKind::Monitors,
    section_field: "monitors",
    facets: MONITOR_FACETS,
    searchable: &["brand", "resolution"],
    page_size: 12,
    require_positive_price: false,
};

/// Headset catalog configuration.
pub static HEADSETS: CatalogProfile = CatalogProfile {
    kind: CatalogKind::Headsets,
    section_field: "headsets",
    facets: HEADSET_FACETS,
    searchable: &["brand", "type"],
    page_size: 12,
    require_positive_price: false,
};

/// Mini-PC catalog configuration.
pub static MINI_PCS: CatalogProfile = CatalogProfile {
    kind: CatalogKind::MiniPcs,
    section_field: "mini_pcs",
    facets: MINI_PC_FACETS,
    searchable: &["brand", "processor"],
    page_size: 12,
    require_positive_price: false,
};

/// Parts/products catalog configuration. The parts feed ingests rows before
/// pricing lands, so zero-priced listings are suppressed here.
pub static PRODUCTS: CatalogProfile = CatalogProfile {
    kind: CatalogKind::Products,
    section_field: "parts",
    facets: PRODUCT_FACETS,
    searchable: &["brand", "category"],
    page_size: 10,
    require_positive_price: true,
};
