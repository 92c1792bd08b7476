//! Dice configuration and notation parsing.
//!
//! A roll is a pool of d10s checked against a difficulty. The compact
//! notation `<count>d<difficulty>` describes one, with a `!` anywhere in
//! the string to explode 10s: `5d6` rolls five dice at difficulty 6 and
//! `10d7!` rolls ten at difficulty 7 with explosions.

pub mod roll;
pub mod score;

pub use roll::{DieSource, roll_dice};
pub use score::{RollResult, calculate_results};

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Highest face of the dice this engine rolls.
pub const D10_SIDES: u8 = 10;

/// The marker that turns on exploding 10s, in both notation and formulas.
pub const EXPLODE_MARKER: char = '!';

/// A validated roll request: how many dice, against what difficulty, and
/// whether 10s explode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiceConfig {
    count: u8,
    difficulty: u8,
    explode: bool,
}

impl DiceConfig {
    /// Build a configuration, rejecting a difficulty outside `1..=10` and
    /// then an empty pool.
    pub fn new(count: u8, difficulty: u8, explode: bool) -> EngineResult<Self> {
        check_difficulty(u32::from(difficulty))?;
        if count == 0 {
            return Err(EngineError::NoDice);
        }
        Ok(Self {
            count,
            difficulty,
            explode,
        })
    }

    /// Parse compact dice notation such as `3d6` or `10d7!`.
    ///
    /// Surrounding whitespace is ignored and the `d` may be upper case.
    /// Shape errors are reported first, then the difficulty, then the
    /// count. A count too large for the pool type is a shape error.
    pub fn parse(s: &str) -> EngineResult<Self> {
        let explode = s.contains(EXPLODE_MARKER);
        let body: String = s
            .chars()
            .filter(|&c| c != EXPLODE_MARKER)
            .collect::<String>()
            .trim()
            .to_ascii_lowercase();

        let parse_err = || EngineError::Parse(s.to_string());
        let (count, difficulty) = body.split_once('d').ok_or_else(parse_err)?;
        let count = parse_digits(count).ok_or_else(parse_err)?;
        let difficulty = parse_digits(difficulty).ok_or_else(parse_err)?;

        check_difficulty(difficulty)?;
        let difficulty = u8::try_from(difficulty).map_err(|_| EngineError::Difficulty(difficulty))?;
        if count == 0 {
            return Err(EngineError::NoDice);
        }
        let count = u8::try_from(count).map_err(|_| parse_err())?;

        let config = Self {
            count,
            difficulty,
            explode,
        };
        debug!(notation = s, %config, "parsed dice notation");
        Ok(config)
    }

    /// Number of dice rolled before any explosions.
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Minimum face value that counts as a success.
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Whether a 10 adds another die to the roll.
    pub fn explode(&self) -> bool {
        self.explode
    }

    /// Roll this pool using the given die source.
    pub fn roll<S: DieSource + ?Sized>(&self, source: &mut S) -> Vec<u8> {
        roll_dice(self, source)
    }

    /// Score a finished roll against this configuration.
    pub fn score(&self, rolls: &[u8]) -> RollResult {
        calculate_results(self, rolls)
    }
}

impl FromStr for DiceConfig {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.difficulty)?;
        if self.explode {
            write!(f, "{EXPLODE_MARKER}")?;
        }
        Ok(())
    }
}

fn check_difficulty(difficulty: u32) -> EngineResult<()> {
    if difficulty == 0 || difficulty > u32::from(D10_SIDES) {
        return Err(EngineError::Difficulty(difficulty));
    }
    Ok(())
}

/// Parse a run of ASCII digits. Signs, blanks and overflow all fail.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
