//! Dice engine for storyteller-style d10 pools.
//!
//! Rolls a pool of ten-sided dice against a difficulty, optionally
//! exploding 10s, and scores the result into successes, failures and
//! botches. A formula layer turns expressions like `strength+athletics+1!`
//! into a pool size by looking up a character's traits.

pub mod config;
pub mod dice;
pub mod error;
pub mod formula;
pub mod sheet;

pub use config::RollerConfig;
pub use dice::{DiceConfig, DieSource, RollResult, calculate_results, roll_dice};
pub use error::{EngineError, EngineResult};
pub use formula::{Formula, resolve_pool};
pub use sheet::{Character, TraitSource};
