//! Wonders - resource ledger for a card-drafting board game
//!
//! This crate provides the resource accounting for each player:
//! - Fixed resource pools and wildcard (exotic) resources
//! - A backtracking search deciding whether holdings cover a cost
//! - The player ledger that applies played cards, discards and wonder stages
//! - JSON catalogs of cards and wonders
//!
//! Turn order, card choice and scoring belong to the surrounding game loop.
//!
//! # Modules
//!
//! - [`resource`]: Resource tags, `ResourcePool` and `Requirement`
//! - [`exotic`]: Wildcard resources
//! - [`satisfy`]: The satisfaction search
//! - [`card`]: Cards, grants and effects
//! - [`wonder`]: Wonder boards
//! - [`ledger`]: Player state and purchases
//! - [`rules`]: Game constants and trade prices
//! - [`catalog`]: Loading catalog data

pub mod card;
pub mod catalog;
pub mod exotic;
pub mod ledger;
pub mod resource;
pub mod rules;
pub mod satisfy;
#[cfg(feature = "wasm")]
pub mod wasm;
pub mod wonder;

// Re-export commonly used types
pub use card::{Card, Effect, EffectFn, Grants};
pub use catalog::{Catalog, CatalogError};
pub use exotic::ExoticResource;
pub use ledger::{Ledger, LedgerError};
pub use resource::{CardColor, Requirement, Resource, ResourcePool, Science};
pub use rules::{Rules, Side, TradeCosts};
pub use satisfy::{find_assignment, is_satisfiable, Assignment, Substitution};
pub use wonder::Wonder;
