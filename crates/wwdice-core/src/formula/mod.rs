//! Trait formulas such as `strength+athletics+1!`.
//!
//! A formula is a flat `+`-separated list of trait names and literal
//! bonuses, with a `!` marking exploding 10s. Resolving it against a
//! character sums the named traits and the bonuses into a pool size.
//!
//! Resolution is permissive: a trait the character lacks counts as 0, so a
//! misspelled name shrinks the pool instead of failing the roll.

use serde::Serialize;
use tracing::debug;

use crate::dice::{DiceConfig, EXPLODE_MARKER};
use crate::error::EngineResult;
use crate::sheet::TraitSource;

/// Separator between formula terms.
pub const TERM_SEPARATOR: char = '+';

/// A parsed formula.
///
/// Every term lands in `tags` verbatim, numeric ones included, so
/// `str+1` has tags `["str", "1"]` and bonuses `[1]`. Callers rely on that
/// shape. A numeric tag only adds to the pool if the character happens to
/// have a trait of that name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Formula {
    /// Terms in the order written, duplicates kept.
    pub tags: Vec<String>,
    /// Positive integer terms, saturated to the pool type.
    pub bonuses: Vec<u8>,
    /// Whether 10s explode.
    pub explode: bool,
}

impl Formula {
    /// Parse a formula. Never fails; empty input gives an empty formula.
    ///
    /// Only the first `!` is removed. Any further `!` stays inside its
    /// term.
    pub fn parse(formula: &str) -> Self {
        let explode = formula.contains(EXPLODE_MARKER);
        let body = if explode {
            formula.replacen(EXPLODE_MARKER, "", 1)
        } else {
            formula.to_string()
        };

        let mut parsed = Self {
            explode,
            ..Self::default()
        };
        if body.is_empty() {
            return parsed;
        }

        for token in body.split(TERM_SEPARATOR) {
            if let Some(bonus) = parse_bonus(token) {
                parsed.bonuses.push(bonus);
            }
            parsed.tags.push(token.to_string());
        }

        debug!(formula, ?parsed, "parsed formula");
        parsed
    }

    /// Sum this formula against `traits`. See [`resolve_pool`].
    pub fn pool_size<T: TraitSource + ?Sized>(&self, traits: &T) -> u8 {
        resolve_pool(traits, &self.tags, &self.bonuses)
    }

    /// Resolve against `traits` and build the roll at `difficulty`.
    ///
    /// Fails when the difficulty is out of range or the pool comes to zero.
    pub fn to_dice_config<T: TraitSource + ?Sized>(
        &self,
        traits: &T,
        difficulty: u8,
    ) -> EngineResult<DiceConfig> {
        DiceConfig::new(self.pool_size(traits), difficulty, self.explode)
    }
}

/// Add up the scores of `tags` plus every bonus, saturating at `u8::MAX`.
///
/// Tags the character lacks contribute 0.
pub fn resolve_pool<T: TraitSource + ?Sized>(
    traits: &T,
    tags: &[String],
    bonuses: &[u8],
) -> u8 {
    let from_traits = tags.iter().fold(0u8, |sum, tag| {
        let value = traits.trait_value(tag).unwrap_or_else(|| {
            debug!(tag = tag.as_str(), "unknown trait counts as 0");
            0
        });
        sum.saturating_add(value)
    });
    bonuses.iter().fold(from_traits, |sum, &bonus| sum.saturating_add(bonus))
}

/// A term that parses as a positive integer, clamped to `u8::MAX`.
fn parse_bonus(token: &str) -> Option<u8> {
    match token.parse::<i64>() {
        Ok(n) if n > 0 => Some(u8::try_from(n).unwrap_or(u8::MAX)),
        _ => None,
    }
}
