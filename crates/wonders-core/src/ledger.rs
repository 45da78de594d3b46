//! Player ledger: holdings, counters and the purchase entry points.
//!
//! This module contains:
//! - `Ledger`, one per player, owning its resource pool and exotic resources
//! - Affordability checks, which defer to the satisfaction search
//! - Applying a played card, a discard, or a wonder stage

use crate::card::Card;
use crate::exotic::ExoticResource;
use crate::resource::{CardColor, Requirement, Resource, ResourcePool, Science};
use crate::rules::{Rules, TradeCosts};
use crate::satisfy;
use crate::wonder::Wonder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Cannot afford {card}")]
    CannotAfford { card: String },

    #[error("All wonder stages already built")]
    WonderComplete,
}

/// A single player's state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// Display name
    pub name: String,
    pub wonder: Wonder,
    pub rules: Rules,
    /// Fixed resources, gold included
    pub resources: ResourcePool,
    /// Wildcard resources, never consumed
    pub exotics: Vec<ExoticResource>,
    pub science: BTreeMap<Science, u32>,
    /// Number of played cards per color
    pub colors: BTreeMap<CardColor, u32>,
    pub military: u32,
    /// Names of cards this player may play for free
    pub coupons: Vec<String>,
    pub trade_costs: TradeCosts,
    pub victory_points: u32,
    pub defeats: u32,
    /// Played cards, oldest first
    pub tableau: Vec<Card>,
}

impl Ledger {
    /// Create a ledger with default rules
    pub fn new(name: impl Into<String>, wonder: Wonder) -> Self {
        Self::with_rules(name, wonder, Rules::default())
    }

    /// Create a ledger; the wonder grants its starting resource
    pub fn with_rules(name: impl Into<String>, wonder: Wonder, rules: Rules) -> Self {
        let mut resources = ResourcePool::new();
        wonder.setup(&mut resources);

        Self {
            name: name.into(),
            wonder,
            rules,
            resources,
            exotics: Vec::new(),
            science: Science::ALL.into_iter().map(|s| (s, 0)).collect(),
            colors: CardColor::ALL.into_iter().map(|c| (c, 0)).collect(),
            military: 0,
            coupons: Vec::new(),
            trade_costs: TradeCosts::new(rules.base_trade_cost),
            victory_points: 0,
            defeats: 0,
            tableau: Vec::new(),
        }
    }

    /// Can the fixed resources and exotics cover `requirement`?
    pub fn has_resources(&self, requirement: &Requirement) -> bool {
        satisfy::is_satisfiable(requirement, &self.resources, &self.exotics)
    }

    /// Can this player play `card`? A coupon for the card waives the cost.
    pub fn can_afford(&self, card: &Card) -> bool {
        self.has_coupon(&card.name) || self.has_resources(&card.cost)
    }

    pub fn has_coupon(&self, card_name: &str) -> bool {
        self.coupons.iter().any(|c| c == card_name)
    }

    /// Number of played cards of `color`
    pub fn color_count(&self, color: CardColor) -> u32 {
        self.colors.get(&color).copied().unwrap_or(0)
    }

    pub fn science_count(&self, science: Science) -> u32 {
        self.science.get(&science).copied().unwrap_or(0)
    }

    /// Play a card.
    ///
    /// Only the gold part of the cost is paid; other resources are needed but
    /// not spent. The card's effect runs after its color is counted and before
    /// its grants are credited.
    pub fn play(&mut self, card: Card) -> Result<(), LedgerError> {
        if !self.can_afford(&card) {
            return Err(LedgerError::CannotAfford { card: card.name });
        }

        debug!(player = %self.name, card = %card.name, color = ?card.color, "playing card");

        let tally = self.colors.entry(card.color).or_insert(0);
        *tally = tally.saturating_add(1);
        self.resolve(&card);
        self.tableau.push(card);
        Ok(())
    }

    /// Discard a card for gold
    pub fn discard(&mut self, card: &Card) {
        debug!(player = %self.name, card = %card.name, "discarding card");
        self.resources.add(Resource::Gold, self.rules.discard_gold);
    }

    /// Build the next wonder stage. Coupons never apply to stages.
    pub fn build_wonder_stage(&mut self) -> Result<(), LedgerError> {
        let stage = self
            .wonder
            .next_stage()
            .cloned()
            .ok_or(LedgerError::WonderComplete)?;

        if !self.has_resources(&stage.cost) {
            return Err(LedgerError::CannotAfford { card: stage.name });
        }

        debug!(player = %self.name, stage = self.wonder.stage, "building wonder stage");

        self.wonder.stage += 1;
        self.resolve(&stage);
        Ok(())
    }

    pub fn add_victory_points(&mut self, amount: u32) {
        self.victory_points = self.victory_points.saturating_add(amount);
    }

    /// Record a lost military conflict
    pub fn record_defeat(&mut self) {
        self.defeats = self.defeats.saturating_add(1);
    }

    /// Pay gold, run the effect, then credit the static grants
    fn resolve(&mut self, card: &Card) {
        self.resources.add(Resource::Gold, -card.gold_cost());

        card.effect.apply(self);

        let grants = &card.grants;
        self.resources.add_pool(&grants.resources);
        if let Some(exotic) = &grants.exotic {
            self.exotics.push(exotic.clone());
        }
        for (science, amount) in &grants.science {
            let count = self.science.entry(*science).or_insert(0);
            *count = count.saturating_add(*amount);
        }
        self.military = self.military.saturating_add(grants.military);
        self.coupons.extend(grants.coupons.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Effect;
    use pretty_assertions::assert_eq;

    fn ledger() -> Ledger {
        Ledger::new("Test", Wonder::new("Colossus", Resource::Ore))
    }

    #[test]
    fn test_new_ledger() {
        let ledger = ledger();
        assert_eq!(ledger.resources, ResourcePool::single(Resource::Ore, 1));
        assert_eq!(ledger.colors.len(), CardColor::ALL.len());
        assert_eq!(ledger.science.len(), Science::ALL.len());
        assert!(ledger.colors.values().all(|n| *n == 0));
        assert!(ledger.tableau.is_empty());
    }

    #[test]
    fn test_can_afford_with_start_resource() {
        let ledger = ledger();
        let barracks = Card::new("Barracks", CardColor::Red)
            .with_cost(Requirement::new().with(Resource::Ore, 1));
        let stockade = Card::new("Stockade", CardColor::Red)
            .with_cost(Requirement::new().with(Resource::Wood, 1));

        assert!(ledger.can_afford(&barracks));
        assert!(!ledger.can_afford(&stockade));
    }

    #[test]
    fn test_play_unaffordable_leaves_ledger_untouched() {
        let mut ledger = ledger();
        let before = ledger.clone();
        let card = Card::new("Baths", CardColor::Blue)
            .with_cost(Requirement::new().with(Resource::Stone, 1));

        assert_eq!(
            ledger.play(card),
            Err(LedgerError::CannotAfford {
                card: "Baths".to_string()
            })
        );
        assert_eq!(ledger.resources, before.resources);
        assert_eq!(ledger.colors, before.colors);
        assert!(ledger.tableau.is_empty());
    }

    #[test]
    fn test_play_debits_only_gold() {
        let mut ledger = ledger();
        ledger.resources.gold = 3;
        ledger.resources.wood = 1;
        let card = Card::new("Timber Yard", CardColor::Brown)
            .with_cost(Requirement::new().with(Resource::Gold, 1).with(Resource::Wood, 1))
            .granting_exotic(ExoticResource::new([Resource::Stone, Resource::Wood]).unwrap());

        ledger.play(card).unwrap();

        assert_eq!(ledger.resources.gold, 2);
        assert_eq!(ledger.resources.wood, 1);
        assert_eq!(ledger.exotics.len(), 1);
        assert_eq!(ledger.color_count(CardColor::Brown), 1);
        assert_eq!(ledger.tableau.len(), 1);
    }

    #[test]
    fn test_play_credits_grants() {
        let mut ledger = ledger();
        let card = Card::new("Scriptorium", CardColor::Green)
            .granting_science(Science::Tablet, 1)
            .granting_military(2)
            .granting_resource(Resource::Papyrus, 1)
            .granting_coupon("Courthouse");

        ledger.play(card).unwrap();

        assert_eq!(ledger.science_count(Science::Tablet), 1);
        assert_eq!(ledger.military, 2);
        assert_eq!(ledger.resources.papyrus, 1);
        assert!(ledger.has_coupon("Courthouse"));
    }

    #[test]
    fn test_coupon_waives_cost() {
        let mut ledger = ledger();
        let courthouse = Card::new("Courthouse", CardColor::Blue)
            .with_cost(Requirement::new().with(Resource::Brick, 2).with(Resource::Cloth, 1));
        assert!(!ledger.can_afford(&courthouse));

        ledger.coupons.push("Courthouse".to_string());
        assert!(ledger.can_afford(&courthouse));
        ledger.play(courthouse).unwrap();
        assert_eq!(ledger.color_count(CardColor::Blue), 1);
    }

    #[test]
    fn test_coupon_play_still_debits_gold() {
        let mut ledger = ledger();
        let caravansery = Card::new("Caravansery", CardColor::Yellow)
            .with_cost(Requirement::new().with(Resource::Gold, 2).with(Resource::Wood, 2));
        assert_eq!(ledger.resources.gold, 0);
        assert!(!ledger.can_afford(&caravansery));

        ledger.coupons.push("Caravansery".to_string());
        assert!(ledger.can_afford(&caravansery));
        ledger.play(caravansery).unwrap();

        assert_eq!(ledger.resources.gold, -2);
        assert_eq!(ledger.resources.wood, 0);
        assert_eq!(ledger.color_count(CardColor::Yellow), 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut ledger = ledger();
        let monument = || {
            Card::new("Monument", CardColor::Blue)
                .with_effect(Effect::VictoryPoints { amount: u32::MAX })
                .granting_military(u32::MAX)
        };

        ledger.play(monument()).unwrap();
        ledger.play(monument()).unwrap();
        assert_eq!(ledger.victory_points, u32::MAX);
        assert_eq!(ledger.military, u32::MAX);

        ledger.defeats = u32::MAX;
        ledger.record_defeat();
        assert_eq!(ledger.defeats, u32::MAX);

        ledger.resources.gold = i32::MAX;
        ledger.discard(&monument());
        assert_eq!(ledger.resources.gold, i32::MAX);
    }

    #[test]
    fn test_snapshot_with_custom_effect() {
        let mut ledger = ledger();
        ledger
            .play(Card::new("Guild", CardColor::Purple).with_effect(Effect::custom(|_| {})))
            .unwrap();

        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(json["tableau"][0]["name"], "Guild");
        assert_eq!(json["tableau"][0]["effect"], serde_json::json!({"type": "custom"}));
    }

    #[test]
    fn test_effect_sees_own_color_but_not_own_grants() {
        let mut ledger = ledger();
        let card = Card::new("Vineyard", CardColor::Yellow)
            .granting_resource(Resource::Gold, 5)
            .with_effect(Effect::custom(|l: &mut Ledger| {
                assert_eq!(l.color_count(CardColor::Yellow), 1);
                assert_eq!(l.resources.gold, 0);
                assert!(l.tableau.is_empty());
                l.military += 10;
            }));

        ledger.play(card).unwrap();
        assert_eq!(ledger.military, 10);
        assert_eq!(ledger.resources.gold, 5);
    }

    #[test]
    fn test_gold_per_color_effect() {
        let mut ledger = ledger();
        ledger
            .play(Card::new("Lumber Yard", CardColor::Brown))
            .unwrap();
        ledger.play(Card::new("Ore Vein", CardColor::Brown)).unwrap();
        ledger
            .play(
                Card::new("Vineyard", CardColor::Yellow).with_effect(Effect::GoldPerColor {
                    color: CardColor::Brown,
                    amount: 1,
                }),
            )
            .unwrap();
        assert_eq!(ledger.resources.gold, 2);

        ledger
            .play(
                Card::new("Chamber of Commerce", CardColor::Yellow).with_effect(
                    Effect::VictoryPointsPerColor {
                        color: CardColor::Yellow,
                        amount: 2,
                    },
                ),
            )
            .unwrap();
        assert_eq!(ledger.victory_points, 4);
    }

    #[test]
    fn test_discard_credits_gold_only() {
        let mut ledger = ledger();
        let before = ledger.clone();
        let card = Card::new("Altar", CardColor::Blue);

        ledger.discard(&card);

        let mut expected = before.resources.clone();
        expected.gold += 3;
        assert_eq!(ledger.resources, expected);
        assert!(ledger.tableau.is_empty());
        assert_eq!(ledger.colors, before.colors);
    }

    #[test]
    fn test_build_wonder_stage() {
        let wonder = Wonder::new("Colossus", Resource::Ore)
            .with_stage(
                Card::new("Colossus I", CardColor::Blue)
                    .with_cost(Requirement::new().with(Resource::Ore, 1))
                    .with_effect(Effect::VictoryPoints { amount: 3 }),
            )
            .with_stage(
                Card::new("Colossus II", CardColor::Red)
                    .with_cost(Requirement::new().with(Resource::Wood, 3))
                    .granting_military(2),
            );
        let mut ledger = Ledger::new("Test", wonder);

        ledger.build_wonder_stage().unwrap();
        assert_eq!(ledger.wonder.stage, 1);
        assert_eq!(ledger.victory_points, 3);
        assert!(ledger.tableau.is_empty());
        assert_eq!(ledger.color_count(CardColor::Blue), 0);

        assert_eq!(
            ledger.build_wonder_stage(),
            Err(LedgerError::CannotAfford {
                card: "Colossus II".to_string()
            })
        );
        assert_eq!(ledger.wonder.stage, 1);

        ledger.resources.wood = 3;
        ledger.build_wonder_stage().unwrap();
        assert_eq!(ledger.military, 2);
        assert_eq!(ledger.build_wonder_stage(), Err(LedgerError::WonderComplete));
    }

    #[test]
    fn test_coupon_does_not_apply_to_wonder_stage() {
        let wonder = Wonder::new("Pyramids", Resource::Stone).with_stage(
            Card::new("Pyramids I", CardColor::Blue)
                .with_cost(Requirement::new().with(Resource::Stone, 3)),
        );
        let mut ledger = Ledger::new("Test", wonder);
        ledger.coupons.push("Pyramids I".to_string());

        assert!(ledger.build_wonder_stage().is_err());
    }

    #[test]
    fn test_record_defeat() {
        let mut ledger = ledger();
        ledger.record_defeat();
        ledger.record_defeat();
        assert_eq!(ledger.defeats, 2);
    }
}
