//! Catalog entries: cards, what they cost and what they grant.

use crate::exotic::ExoticResource;
use crate::ledger::Ledger;
use crate::resource::{CardColor, Requirement, Resource, ResourcePool, Science};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An opaque per-card callback that may mutate the ledger playing the card
#[derive(Clone)]
pub struct EffectFn(Arc<dyn Fn(&mut Ledger) + Send + Sync>);

impl EffectFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Ledger) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, ledger: &mut Ledger) {
        (self.0)(ledger)
    }
}

impl fmt::Debug for EffectFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EffectFn(..)")
    }
}

/// Serializes as a bare marker, so an `Effect::Custom` snapshots as
/// `{"type": "custom"}`
impl Serialize for EffectFn {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

/// Closures compare by identity
impl PartialEq for EffectFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Effect run when a card is played, after its color is tallied and before
/// its static grants are credited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    #[default]
    None,
    /// Take gold from the bank
    Gold { amount: i32 },
    /// Take gold for each card of a color in the tableau (this card included)
    GoldPerColor { color: CardColor, amount: i32 },
    /// Score victory points
    VictoryPoints { amount: u32 },
    /// Score victory points for each card of a color (this card included)
    VictoryPointsPerColor { color: CardColor, amount: u32 },
    /// Arbitrary behavior supplied in code; written out but never read back
    #[serde(skip_deserializing)]
    Custom(EffectFn),
}

impl Effect {
    /// Wrap a closure as a custom effect
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut Ledger) + Send + Sync + 'static,
    {
        Effect::Custom(EffectFn::new(f))
    }

    /// Run this effect against a ledger
    pub fn apply(&self, ledger: &mut Ledger) {
        match self {
            Effect::None => {}
            Effect::Gold { amount } => ledger.resources.add(Resource::Gold, *amount),
            Effect::GoldPerColor { color, amount } => {
                let count = i32::try_from(ledger.color_count(*color)).unwrap_or(i32::MAX);
                ledger
                    .resources
                    .add(Resource::Gold, count.saturating_mul(*amount));
            }
            Effect::VictoryPoints { amount } => ledger.add_victory_points(*amount),
            Effect::VictoryPointsPerColor { color, amount } => {
                let count = ledger.color_count(*color);
                ledger.add_victory_points(count.saturating_mul(*amount));
            }
            Effect::Custom(f) => f.call(ledger),
        }
    }
}

/// What a card adds to the ledger once played
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grants {
    #[serde(default)]
    pub resources: ResourcePool,
    #[serde(default)]
    pub exotic: Option<ExoticResource>,
    #[serde(default)]
    pub science: BTreeMap<Science, u32>,
    #[serde(default)]
    pub military: u32,
    /// Names of cards that may later be played without paying
    #[serde(default)]
    pub coupons: Vec<String>,
}

/// A card from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    /// Card name, also matched against coupons
    pub name: String,
    pub color: CardColor,
    /// Full cost, gold included
    #[serde(default)]
    pub cost: Requirement,
    #[serde(default)]
    pub effect: Effect,
    #[serde(default)]
    pub grants: Grants,
}

impl Card {
    /// Create a free card with no effect and no grants
    pub fn new(name: impl Into<String>, color: CardColor) -> Self {
        Self {
            name: name.into(),
            color,
            cost: Requirement::new(),
            effect: Effect::None,
            grants: Grants::default(),
        }
    }

    pub fn with_cost(mut self, cost: Requirement) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    pub fn granting_resource(mut self, resource: Resource, amount: i32) -> Self {
        self.grants.resources.add(resource, amount);
        self
    }

    pub fn granting_exotic(mut self, exotic: ExoticResource) -> Self {
        self.grants.exotic = Some(exotic);
        self
    }

    pub fn granting_science(mut self, science: Science, amount: u32) -> Self {
        let count = self.grants.science.entry(science).or_insert(0);
        *count = count.saturating_add(amount);
        self
    }

    pub fn granting_military(mut self, amount: u32) -> Self {
        self.grants.military = self.grants.military.saturating_add(amount);
        self
    }

    pub fn granting_coupon(mut self, card_name: impl Into<String>) -> Self {
        self.grants.coupons.push(card_name.into());
        self
    }

    /// Gold component of the cost
    pub fn gold_cost(&self) -> i32 {
        self.cost.gold()
    }
}
