//! Fixtures
//!
//! Catalogs described as YAML files under `<base>/catalogs/<name>.yml`.

use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogError},
    offers::OfferError,
};

pub mod catalogs;

use catalogs::CatalogFixture;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Invalid offer on an item (item name, reason)
    #[error("Invalid offer on item {0}: {1}")]
    InvalidOffer(String, #[source] OfferError),

    /// No currency given and no items to take one from
    #[error("Catalog has no items and no currency")]
    NoCurrency,

    /// Catalog construction error
    #[error("Failed to create catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a new fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a catalog from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the catalog is invalid.
    pub fn load_catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        let file_path = self.base_path.join("catalogs").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let catalog = Catalog::try_from(CatalogFixture::from_yaml_str(&contents)?)?;

        debug!(
            path = %file_path.display(),
            items = catalog.len(),
            currency = catalog.currency().iso_alpha_code,
            "loaded catalog fixture"
        );

        Ok(catalog)
    }

    /// Load a catalog by name from the default fixtures directory
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fixture cannot be loaded.
    pub fn from_set(name: &str) -> Result<Catalog, FixtureError> {
        Self::new().load_catalog(name)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
