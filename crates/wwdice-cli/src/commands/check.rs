//! Roll a trait formula for a character.

use tracing::info;
use wwdice_core::{Character, Formula, RollerConfig};

use super::{RollReport, print_report};

/// Resolve `formula` against `character`, roll the pool, and print it.
pub fn run(
    config: &RollerConfig,
    character: &Character,
    formula: &str,
    difficulty: Option<u8>,
    json: bool,
) -> Result<(), String> {
    let parsed = Formula::parse(formula);
    let difficulty = difficulty.unwrap_or(config.default_difficulty);
    let dice = parsed
        .to_dice_config(character, difficulty)
        .map_err(|e| format!("{formula}: {e}"))?;

    let report = RollReport::roll(dice, &mut config.rng());
    info!(formula, %dice, result = ?report.result, "rolled formula");

    if !json {
        println!(
            "{formula}: pool {} at difficulty {}{}",
            dice.count(),
            dice.difficulty(),
            if dice.explode() { ", 10s explode" } else { "" }
        );
    }
    print_report(&report, json)
}
