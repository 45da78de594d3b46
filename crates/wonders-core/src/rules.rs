//! Tunable game constants and neighbour trade prices.

use crate::resource::CardColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Game constants that catalogs may override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Gold credited when a card is discarded
    pub discard_gold: i32,
    /// Starting price of a resource bought from a neighbour
    pub base_trade_cost: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            discard_gold: 3,
            base_trade_cost: 2,
        }
    }
}

/// Which neighbour a resource is bought from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Per-neighbour price of one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighbourPrices {
    pub left: u32,
    pub right: u32,
}

/// What a player pays neighbours for resources produced by brown and gray
/// cards. Trading itself is driven by the game loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeCosts(BTreeMap<CardColor, NeighbourPrices>);

impl TradeCosts {
    /// Brown and gray resources at `price` from both neighbours
    pub fn new(price: u32) -> Self {
        let prices = NeighbourPrices {
            left: price,
            right: price,
        };
        Self(BTreeMap::from([
            (CardColor::Brown, prices),
            (CardColor::Gray, prices),
        ]))
    }

    /// Price for a color bought from one side; `None` if that color can't be bought
    pub fn cost(&self, color: CardColor, side: Side) -> Option<u32> {
        self.0.get(&color).map(|p| match side {
            Side::Left => p.left,
            Side::Right => p.right,
        })
    }

    /// Change a price, e.g. from a trading post effect
    pub fn set(&mut self, color: CardColor, side: Side, price: u32) {
        let prices = self.0.entry(color).or_insert(NeighbourPrices {
            left: price,
            right: price,
        });
        match side {
            Side::Left => prices.left = price,
            Side::Right => prices.right = price,
        }
    }
}

impl Default for TradeCosts {
    fn default() -> Self {
        Self::new(Rules::default().base_trade_cost)
    }
}
