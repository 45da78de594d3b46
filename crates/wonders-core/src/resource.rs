//! Resource types and the fixed resource pool.
//!
//! This module contains:
//! - The closed set of resource, science and card color tags
//! - `ResourcePool` for a player's fixed per-type counts
//! - `Requirement` for a purchase cost or any other resource query

use crate::catalog::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Resource types produced by cards and wonders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Raw material
    Wood,
    /// Raw material
    Stone,
    /// Raw material
    Ore,
    /// Raw material
    Brick,
    /// Manufactured good
    Glass,
    /// Manufactured good
    Papyrus,
    /// Manufactured good
    Cloth,
    /// Coins, also spent when a card is played
    Gold,
}

impl Resource {
    /// Number of resource types
    pub const COUNT: usize = 8;

    /// All resource types
    pub const ALL: [Resource; Resource::COUNT] = [
        Resource::Wood,
        Resource::Stone,
        Resource::Ore,
        Resource::Brick,
        Resource::Glass,
        Resource::Papyrus,
        Resource::Cloth,
        Resource::Gold,
    ];

    /// Dense index of this resource, matching its position in [`Resource::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Resource::Wood => 0,
            Resource::Stone => 1,
            Resource::Ore => 2,
            Resource::Brick => 3,
            Resource::Glass => 4,
            Resource::Papyrus => 5,
            Resource::Cloth => 6,
            Resource::Gold => 7,
        }
    }

    /// Lowercase tag used in catalog data
    pub fn tag(&self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Stone => "stone",
            Resource::Ore => "ore",
            Resource::Brick => "brick",
            Resource::Glass => "glass",
            Resource::Papyrus => "papyrus",
            Resource::Cloth => "cloth",
            Resource::Gold => "gold",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Resource {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.tag() == s)
            .ok_or_else(|| CatalogError::UnknownTag {
                kind: "resource",
                tag: s.to_string(),
            })
    }
}

/// Science symbols granted by green cards
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Science {
    Gear,
    Compass,
    Tablet,
}

impl Science {
    /// All science symbols
    pub const ALL: [Science; 3] = [Science::Gear, Science::Compass, Science::Tablet];

    pub fn tag(&self) -> &'static str {
        match self {
            Science::Gear => "gear",
            Science::Compass => "compass",
            Science::Tablet => "tablet",
        }
    }
}

impl FromStr for Science {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Science::ALL
            .into_iter()
            .find(|sc| sc.tag() == s)
            .ok_or_else(|| CatalogError::UnknownTag {
                kind: "science",
                tag: s.to_string(),
            })
    }
}

/// Card color category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    /// Raw materials
    Brown,
    /// Manufactured goods
    Gray,
    /// Civic buildings
    Blue,
    /// Commercial buildings
    Yellow,
    /// Military buildings
    Red,
    /// Scientific buildings
    Green,
    /// Guilds
    Purple,
}

impl CardColor {
    /// All card colors
    pub const ALL: [CardColor; 7] = [
        CardColor::Brown,
        CardColor::Gray,
        CardColor::Blue,
        CardColor::Yellow,
        CardColor::Red,
        CardColor::Green,
        CardColor::Purple,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            CardColor::Brown => "brown",
            CardColor::Gray => "gray",
            CardColor::Blue => "blue",
            CardColor::Yellow => "yellow",
            CardColor::Red => "red",
            CardColor::Green => "green",
            CardColor::Purple => "purple",
        }
    }
}

impl FromStr for CardColor {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardColor::ALL
            .into_iter()
            .find(|c| c.tag() == s)
            .ok_or_else(|| CatalogError::UnknownTag {
                kind: "color",
                tag: s.to_string(),
            })
    }
}

/// Fixed per-type resource counts.
///
/// Counts are signed: a gold debit is applied unconditionally when a card is
/// played, and keeping the balance non-negative is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourcePool {
    #[serde(default)]
    pub wood: i32,
    #[serde(default)]
    pub stone: i32,
    #[serde(default)]
    pub ore: i32,
    #[serde(default)]
    pub brick: i32,
    #[serde(default)]
    pub glass: i32,
    #[serde(default)]
    pub papyrus: i32,
    #[serde(default)]
    pub cloth: i32,
    #[serde(default)]
    pub gold: i32,
}

impl ResourcePool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool with a single resource
    pub fn single(resource: Resource, amount: i32) -> Self {
        let mut pool = Self::new();
        pool.add(resource, amount);
        pool
    }

    /// Get count of a specific resource
    pub fn get(&self, resource: Resource) -> i32 {
        match resource {
            Resource::Wood => self.wood,
            Resource::Stone => self.stone,
            Resource::Ore => self.ore,
            Resource::Brick => self.brick,
            Resource::Glass => self.glass,
            Resource::Papyrus => self.papyrus,
            Resource::Cloth => self.cloth,
            Resource::Gold => self.gold,
        }
    }

    /// Set count of a specific resource
    pub fn set(&mut self, resource: Resource, count: i32) {
        *self.slot(resource) = count;
    }

    /// Add to a specific resource (negative amounts debit), saturating at the
    /// `i32` bounds
    pub fn add(&mut self, resource: Resource, amount: i32) {
        let slot = self.slot(resource);
        *slot = slot.saturating_add(amount);
    }

    /// Add another pool to this one
    pub fn add_pool(&mut self, other: &ResourcePool) {
        for (resource, count) in other.iter() {
            self.add(resource, count);
        }
    }

    /// Total number of resource units held
    pub fn total(&self) -> i32 {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Iterate over every resource type and its count
    pub fn iter(&self) -> impl Iterator<Item = (Resource, i32)> + '_ {
        Resource::ALL.into_iter().map(move |r| (r, self.get(r)))
    }

    fn slot(&mut self, resource: Resource) -> &mut i32 {
        match resource {
            Resource::Wood => &mut self.wood,
            Resource::Stone => &mut self.stone,
            Resource::Ore => &mut self.ore,
            Resource::Brick => &mut self.brick,
            Resource::Glass => &mut self.glass,
            Resource::Papyrus => &mut self.papyrus,
            Resource::Cloth => &mut self.cloth,
            Resource::Gold => &mut self.gold,
        }
    }
}

/// Quantities of each resource type needed for a purchase.
///
/// Entries of zero or below count as already satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirement {
    entries: BTreeMap<Resource, i32>,
}

impl Requirement {
    /// Create an empty requirement
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add `amount` of `resource` to the requirement
    pub fn with(mut self, resource: Resource, amount: i32) -> Self {
        let entry = self.entries.entry(resource).or_insert(0);
        *entry = entry.saturating_add(amount);
        self
    }

    /// Build a requirement from catalog tags, rejecting unknown resource names
    pub fn from_tags<'a, I>(tags: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        tags.into_iter()
            .try_fold(Self::new(), |req, (tag, amount)| {
                Ok(req.with(tag.parse()?, amount))
            })
    }

    /// Quantity needed of `resource` (zero if absent)
    pub fn get(&self, resource: Resource) -> i32 {
        self.entries.get(&resource).copied().unwrap_or(0)
    }

    /// The gold component of this requirement
    pub fn gold(&self) -> i32 {
        self.get(Resource::Gold)
    }

    /// True when no resource is listed at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the listed entries in resource order
    pub fn iter(&self) -> impl Iterator<Item = (Resource, i32)> + '_ {
        self.entries.iter().map(|(r, n)| (*r, *n))
    }
}

impl FromIterator<(Resource, i32)> for Requirement {
    fn from_iter<T: IntoIterator<Item = (Resource, i32)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |req, (resource, amount)| req.with(resource, amount))
    }
}
