//! Wonder boards.

use crate::card::Card;
use crate::resource::{Resource, ResourcePool};
use serde::{Deserialize, Serialize};

/// A player's wonder: a starting resource plus an ordered list of stages.
///
/// Stages are card-like entries; building one runs through the same cost
/// check and grant logic as playing a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Wonder {
    pub name: String,
    /// Resource granted once when the ledger is created
    pub resource: Resource,
    #[serde(default)]
    pub stages: Vec<Card>,
    /// Number of stages built so far
    #[serde(default)]
    pub stage: usize,
}

impl Wonder {
    pub fn new(name: impl Into<String>, resource: Resource) -> Self {
        Self {
            name: name.into(),
            resource,
            stages: Vec::new(),
            stage: 0,
        }
    }

    /// Builder: append a stage
    pub fn with_stage(mut self, stage: Card) -> Self {
        self.stages.push(stage);
        self
    }

    /// Grant the starting resource
    pub fn setup(&self, pool: &mut ResourcePool) {
        pool.add(self.resource, 1);
    }

    /// The next stage to build, if any remain
    pub fn next_stage(&self) -> Option<&Card> {
        self.stages.get(self.stage)
    }

    pub fn is_complete(&self) -> bool {
        self.stage >= self.stages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::CardColor;

    #[test]
    fn test_setup_grants_start_resource() {
        let wonder = Wonder::new("Colossus", Resource::Ore);
        let mut pool = ResourcePool::new();
        wonder.setup(&mut pool);
        assert_eq!(pool.ore, 1);
        assert_eq!(pool.total(), 1);
    }

    #[test]
    fn test_stage_progression() {
        let mut wonder = Wonder::new("Pyramids", Resource::Stone)
            .with_stage(Card::new("Pyramids I", CardColor::Blue))
            .with_stage(Card::new("Pyramids II", CardColor::Blue));

        assert_eq!(wonder.next_stage().map(|c| c.name.as_str()), Some("Pyramids I"));
        wonder.stage = 2;
        assert!(wonder.is_complete());
        assert!(wonder.next_stage().is_none());
    }

    #[test]
    fn test_wonder_without_stages_is_complete() {
        assert!(Wonder::new("Lighthouse", Resource::Glass).is_complete());
    }
}
