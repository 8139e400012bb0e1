//! Shared settings library for Rigdex.
//!
//! This crate centralizes engine-settings loading and validation: per-catalog
//! page sizes, the positive-price policy, and default sorts are read from a
//! TOML file plus environment overrides, validated against the built-in
//! catalog profiles, and handed to the engine as effective profiles. There is
//! a single source of truth for defaults and validation rules.
#![allow(missing_docs)]

pub mod error;
pub mod loader;
pub mod models;
pub mod validation;

pub use error::{Result, SettingsError};
pub use loader::{effective_profiles, load, load_from_path, SettingsLoad};
pub use models::{CatalogSettings, EngineSettings};
pub use validation::{validate, ConfigWarning, ConfigWarnings};
