//! Command-line and environment configuration.

use std::path::PathBuf;
use thiserror::Error;
use wonders_core::{Catalog, CatalogError, Wonder};

const BUNDLED_CATALOG: &str = include_str!("../data/demo_catalog.json");

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Catalog has no wonders")]
    NoWonders,
}

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog: CatalogSource,
    /// Wonder to play; the catalog's first wonder if unset
    pub wonder: Option<String>,
}

impl Config {
    /// Read the first argument, then `WONDERS_CATALOG` and `WONDERS_WONDER`
    pub fn from_env() -> Self {
        Self::from_sources(
            std::env::args().nth(1),
            std::env::var("WONDERS_CATALOG").ok(),
            std::env::var("WONDERS_WONDER").ok(),
        )
    }

    /// A command-line path wins over the environment
    pub fn from_sources(
        arg: Option<String>,
        env_catalog: Option<String>,
        env_wonder: Option<String>,
    ) -> Self {
        let catalog = arg
            .or(env_catalog)
            .filter(|p| !p.is_empty())
            .map(|p| CatalogSource::File(PathBuf::from(p)))
            .unwrap_or(CatalogSource::Bundled);

        Self {
            catalog,
            wonder: env_wonder.filter(|w| !w.is_empty()),
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog, CliError> {
        let json = match &self.catalog {
            CatalogSource::Bundled => BUNDLED_CATALOG.to_string(),
            CatalogSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?
            }
        };
        Ok(Catalog::from_json(&json)?)
    }

    pub fn select_wonder(&self, catalog: &Catalog) -> Result<Wonder, CliError> {
        match &self.wonder {
            Some(name) => Ok(catalog.wonder(name)?.clone()),
            None => catalog.wonders.first().cloned().ok_or(CliError::NoWonders),
        }
    }
}
