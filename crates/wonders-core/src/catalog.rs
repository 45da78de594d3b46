//! Card and wonder catalogs loaded from JSON.
//!
//! Catalog data is external: the engine only validates it. Unknown resource,
//! science or color tags are reported as errors rather than skipped, since a
//! dropped cost entry would make an unaffordable card look affordable.

use crate::card::Card;
use crate::rules::Rules;
use crate::wonder::Wonder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown {kind} tag: {tag}")]
    UnknownTag { kind: &'static str, tag: String },

    #[error("Exotic resource must provide at least one resource")]
    EmptyExotic,

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No card named {0}")]
    UnknownCard(String),

    #[error("No wonder named {0}")]
    UnknownWonder(String),
}

/// Every card and wonder available in a game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub wonders: Vec<Wonder>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Catalog {
    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn card(&self, name: &str) -> Result<&Card, CatalogError> {
        self.cards
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::UnknownCard(name.to_string()))
    }

    pub fn wonder(&self, name: &str) -> Result<&Wonder, CatalogError> {
        self.wonders
            .iter()
            .find(|w| w.name == name)
            .ok_or_else(|| CatalogError::UnknownWonder(name.to_string()))
    }
}
