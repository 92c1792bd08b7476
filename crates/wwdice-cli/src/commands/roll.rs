//! Roll raw dice notation.

use tracing::info;
use wwdice_core::{DiceConfig, RollerConfig};

use super::{RollReport, print_report};

/// Parse `notation`, roll it, and print the result.
pub fn run(config: &RollerConfig, notation: &str, json: bool) -> Result<(), String> {
    let dice = DiceConfig::parse(notation).map_err(|e| e.to_string())?;
    let report = RollReport::roll(dice, &mut config.rng());
    info!(%dice, result = ?report.result, "rolled notation");
    print_report(&report, json)
}
