//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SPAZA_CATALOG` - Path to a catalog YAML file
//! - `SPAZA_SAMPLE` - Built-in sample to use when no file is given
//!   (`laureta-scents` or `moonl-braids`; default: `moonl-braids`)
//! - `SPAZA_WHATSAPP_NUMBER` - Recipient handle override (digits only)

use std::path::PathBuf;

use thiserror::Error;

use spaza_core::{Catalog, RecipientHandle};

use crate::catalog::{CatalogLoadError, load_catalog, samples};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// The built-in sample catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleCatalog {
    /// The fragrance shop (retail profile).
    LauretaScents,
    /// The braiding salon (booking profile).
    #[default]
    MoonlBraids,
}

impl SampleCatalog {
    /// Build the sample catalog.
    #[must_use]
    pub fn catalog(self) -> Catalog {
        match self {
            Self::LauretaScents => samples::laureta_scents(),
            Self::MoonlBraids => samples::moonl_braids(),
        }
    }
}

impl std::str::FromStr for SampleCatalog {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "laureta-scents" => Ok(Self::LauretaScents),
            "moonl-braids" => Ok(Self::MoonlBraids),
            _ => Err(format!(
                "unknown sample catalog: {s} (expected laureta-scents or moonl-braids)"
            )),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path to a catalog YAML file, if one was configured.
    pub catalog_path: Option<PathBuf>,
    /// Sample catalog used when no file is configured.
    pub sample: SampleCatalog,
    /// Recipient handle override applied to whichever catalog is used.
    pub recipient_override: Option<RecipientHandle>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_path = get_optional_env("SPAZA_CATALOG").map(PathBuf::from);

        let sample = match get_optional_env("SPAZA_SAMPLE") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SPAZA_SAMPLE".to_owned(), e))?,
            None => SampleCatalog::default(),
        };

        let recipient_override = get_optional_env("SPAZA_WHATSAPP_NUMBER")
            .map(|value| {
                RecipientHandle::parse(&value).map_err(|e| {
                    ConfigError::InvalidEnvVar("SPAZA_WHATSAPP_NUMBER".to_owned(), e.to_string())
                })
            })
            .transpose()?;

        Ok(Self {
            catalog_path,
            sample,
            recipient_override,
        })
    }

    /// Resolve the catalog this configuration points at, with the
    /// recipient override applied.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError`] when a configured catalog file cannot
    /// be loaded or fails validation.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogLoadError> {
        let mut catalog = match &self.catalog_path {
            Some(path) => load_catalog(path)?,
            None => self.sample.catalog(),
        };
        if let Some(recipient) = &self.recipient_override {
            catalog.recipient = recipient.clone();
        }
        Ok(catalog)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
