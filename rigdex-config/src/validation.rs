//! Non-fatal settings checks.
//!
//! Overrides that are merely suspicious (an unknown catalog key, a sort key
//! no profile exposes) should not stop a deployment from booting; they are
//! collected as warnings for the operator log instead.

use crate::models::EngineSettings;
use rigdex_core::catalog::CatalogKind;
use std::fmt;
use tracing::warn;

/// One suspicious settings entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownCatalog { key: String },
    ZeroPageSize { catalog: String },
    UnknownSortKey { catalog: String, sort: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownCatalog { key } => {
                write!(f, "settings name an unknown catalog {key:?}")
            }
            ConfigWarning::ZeroPageSize { catalog } => {
                write!(f, "catalog {catalog:?} has a page size of 0")
            }
            ConfigWarning::UnknownSortKey { catalog, sort } => {
                write!(
                    f,
                    "catalog {catalog:?} defaults to sort {sort:?}, which is not one of its facets"
                )
            }
        }
    }
}

/// Warnings collected over a settings load.
#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    /// Emit every warning through tracing at warn level.
    pub fn log(&self) {
        for warning in &self.0 {
            warn!("{warning}");
        }
    }
}

/// Check the settings against the built-in catalog profiles.
pub fn validate(settings: &EngineSettings) -> ConfigWarnings {
    let mut warnings = Vec::new();

    for (key, catalog_settings) in &settings.catalogs {
        let Some(kind) = CatalogKind::all().iter().find(|k| k.as_str() == key) else {
            warnings.push(ConfigWarning::UnknownCatalog { key: key.clone() });
            continue;
        };

        if catalog_settings.page_size == Some(0) {
            warnings.push(ConfigWarning::ZeroPageSize {
                catalog: key.clone(),
            });
        }

        if let Some(sort) = &catalog_settings.default_sort {
            let known = sort == "price"
                || sort == "name"
                || kind.profile().facet(sort).is_some();
            if !known {
                warnings.push(ConfigWarning::UnknownSortKey {
                    catalog: key.clone(),
                    sort: sort.clone(),
                });
            }
        }
    }

    ConfigWarnings(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogSettings;

    #[test]
    fn clean_settings_produce_no_warnings() {
        let mut settings = EngineSettings::default();
        settings.catalogs.insert(
            "laptops".to_string(),
            CatalogSettings {
                page_size: Some(24),
                require_positive_price: None,
                default_sort: Some("ram".to_string()),
            },
        );
        assert!(validate(&settings).is_empty());
    }

    #[test]
    fn suspicious_settings_are_flagged() {
        let mut settings = EngineSettings::default();
        settings
            .catalogs
            .insert("tablets".to_string(), CatalogSettings::default());
        settings.catalogs.insert(
            "monitors".to_string(),
            CatalogSettings {
                page_size: Some(0),
                require_positive_price: None,
                default_sort: Some("ram".to_string()),
            },
        );

        let warnings = validate(&settings);
        let rendered: Vec<String> = warnings.iter().map(ToString::to_string).collect();
        assert_eq!(warnings.iter().count(), 3);
        assert!(rendered.iter().any(|w| w.contains("tablets")));
        assert!(rendered.iter().any(|w| w.contains("page size of 0")));
        assert!(rendered.iter().any(|w| w.contains("\"ram\"")));
    }
}
