//! Wildcard resources that substitute for one of several resource types.

use crate::catalog::CatalogError;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A wildcard unit that can stand in for any one of a fixed set of resources.
///
/// Exotics are permanent production: checking or paying a cost never
/// consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Resource>", into = "Vec<Resource>")]
pub struct ExoticResource {
    can_provide: BTreeSet<Resource>,
}

impl ExoticResource {
    /// Create an exotic resource; the substitution set must not be empty
    pub fn new<I>(can_provide: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Resource>,
    {
        let can_provide: BTreeSet<Resource> = can_provide.into_iter().collect();
        if can_provide.is_empty() {
            return Err(CatalogError::EmptyExotic);
        }
        Ok(Self { can_provide })
    }

    /// Create an exotic resource from catalog tags
    pub fn from_tags<'a, I>(tags: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let resources = tags
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Resource>, _>>()?;
        Self::new(resources)
    }

    /// The resource types this exotic may substitute for
    pub fn can_provide(&self) -> &BTreeSet<Resource> {
        &self.can_provide
    }

    /// Whether this exotic can stand in for `resource`
    pub fn provides(&self, resource: Resource) -> bool {
        self.can_provide.contains(&resource)
    }

    pub fn iter(&self) -> impl Iterator<Item = Resource> + '_ {
        self.can_provide.iter().copied()
    }
}

impl TryFrom<Vec<Resource>> for ExoticResource {
    type Error = CatalogError;

    fn try_from(resources: Vec<Resource>) -> Result<Self, Self::Error> {
        Self::new(resources)
    }
}

impl From<ExoticResource> for Vec<Resource> {
    fn from(exotic: ExoticResource) -> Self {
        exotic.can_provide.into_iter().collect()
    }
}
