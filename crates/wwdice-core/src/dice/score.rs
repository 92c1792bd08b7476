//! Scoring a roll into successes, failures and botches.
//!
//! Every die at or above the difficulty is a success and every 1 is a
//! failure. Each failure cancels one success. A roll with failures and no
//! successes at all is a botch; once at least one success came up, excess
//! failures only zero the net count.

use serde::Serialize;
use tracing::debug;

use super::DiceConfig;

/// The scored outcome of one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RollResult {
    /// Net successes after failures cancelled theirs.
    pub successes: u32,
    /// Dice that came up 1.
    pub failures: u32,
    /// Failures with no successes to cancel: a critical failure.
    pub botch: bool,
}

impl RollResult {
    /// Whether the roll produced at least one net success.
    pub fn succeeded(&self) -> bool {
        self.successes > 0
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.botch, self.successes) {
            (true, _) => write!(f, "BOTCH!"),
            (false, 1) => write!(f, "1 success"),
            (false, n) => write!(f, "{n} successes"),
        }
    }
}

/// Score `rolls` against `config`'s difficulty. Order of `rolls` is
/// irrelevant.
pub fn calculate_results(config: &DiceConfig, rolls: &[u8]) -> RollResult {
    let difficulty = config.difficulty();
    let raw_successes = count_u32(rolls.iter().filter(|&&face| face >= difficulty));
    let failures = count_u32(rolls.iter().filter(|&&face| face == 1));

    let result = if failures > 0 && raw_successes == 0 {
        RollResult {
            successes: 0,
            failures,
            botch: true,
        }
    } else {
        RollResult {
            successes: raw_successes.saturating_sub(failures),
            failures,
            botch: false,
        }
    };
    debug!(?rolls, difficulty, raw_successes, ?result, "scored roll");
    result
}

fn count_u32<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}
