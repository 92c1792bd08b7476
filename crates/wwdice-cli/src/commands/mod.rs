pub mod check;
pub mod roll;
pub mod sheet;

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use wwdice_core::{Character, DiceConfig, RollResult};

/// One finished roll, ready to print.
#[derive(Debug, Serialize)]
pub struct RollReport {
    /// What was rolled.
    pub config: DiceConfig,
    /// Faces, highest first.
    pub rolls: Vec<u8>,
    /// Scored outcome.
    pub result: RollResult,
}

impl RollReport {
    /// Roll `config` with `rng` and score it.
    pub fn roll(config: DiceConfig, rng: &mut impl wwdice_core::DieSource) -> Self {
        let rolls = config.roll(rng);
        let result = config.score(&rolls);
        Self {
            config,
            rolls,
            result,
        }
    }
}

impl std::fmt::Display for RollReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{:?}", self.result, self.rolls)
    }
}

/// Print a report as text or JSON.
fn print_report(report: &RollReport, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let text = report.result.to_string();
    let headline = if report.result.botch {
        text.as_str().red().bold()
    } else if report.result.succeeded() {
        text.as_str().green().bold()
    } else {
        text.as_str().normal()
    };
    println!("{headline}\t{:?}", report.rolls);
    Ok(())
}

/// Parse a `NAME=VALUE` trait argument.
pub fn parse_trait(s: &str) -> Result<(String, u8), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing trait name in '{s}'"));
    }
    let value = value
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid score for '{name}': {e}"))?;
    Ok((name.to_lowercase(), value))
}

/// Build a character from an optional sheet file plus inline traits.
pub fn load_character(
    sheet: Option<&Path>,
    traits: &[(String, u8)],
) -> Result<Character, String> {
    let mut character = match sheet {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Character::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => Character::new(),
    };
    for (name, value) in traits {
        character.set(name, *value);
    }
    Ok(character)
}
