//! Settings loading: TOML file, then environment overrides.

use crate::error::{Result, SettingsError};
use crate::models::{CatalogSettings, EngineSettings};
use crate::validation::{validate, ConfigWarnings};
use rigdex_core::catalog::CatalogKind;
use std::path::Path;
use tracing::debug;

/// Environment override prefix: `RIGDEX_PAGE_SIZE__LAPTOPS=24` tunes one
/// catalog without touching the settings file.
const PAGE_SIZE_ENV_PREFIX: &str = "RIGDEX_PAGE_SIZE__";

/// A loaded settings set plus the non-fatal issues found on the way.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    pub settings: EngineSettings,
    pub warnings: ConfigWarnings,
}

/// Load settings from an optional TOML file and the environment.
///
/// A missing file is not an error — deployments without overrides simply run
/// the built-in profiles. Unreadable or unparseable files are.
pub fn load(path: Option<&Path>) -> Result<SettingsLoad> {
    // Pick up a local .env before reading overrides; absence is fine.
    dotenvy::dotenv().ok();

    let mut settings = match path {
        Some(path) if path.exists() => load_from_path(path)?,
        Some(path) => {
            debug!(path = %path.display(), "settings file absent, using built-in profiles");
            EngineSettings::default()
        }
        None => EngineSettings::default(),
    };

    apply_env_overrides(&mut settings)?;
    let warnings = validate(&settings);

    Ok(SettingsLoad { settings, warnings })
}

/// Parse a settings file that must exist.
pub fn load_from_path(path: &Path) -> Result<EngineSettings> {
    let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Fold `RIGDEX_PAGE_SIZE__<CATALOG>` variables into the settings.
fn apply_env_overrides(settings: &mut EngineSettings) -> Result<()> {
    for (key, value) in std::env::vars() {
        let Some(catalog) = key.strip_prefix(PAGE_SIZE_ENV_PREFIX) else {
            continue;
        };
        let catalog = catalog.to_lowercase();
        let page_size: usize = value
            .parse()
            .map_err(|_| SettingsError::EnvOverride {
                variable: key.clone(),
                message: format!("page size must be an integer, got {value:?}"),
            })?;

        debug!(catalog = %catalog, page_size, "applying page-size override from environment");
        settings
            .catalogs
            .entry(catalog)
            .or_insert_with(CatalogSettings::default)
            .page_size = Some(page_size);
    }
    Ok(())
}

/// Effective profiles for every catalog under these settings.
pub fn effective_profiles(
    settings: &EngineSettings,
) -> impl Iterator<Item = rigdex_core::catalog::CatalogProfile> + '_ {
    CatalogKind::all()
        .iter()
        .map(|kind| settings.effective_profile(*kind))
}
