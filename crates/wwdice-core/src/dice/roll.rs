//! Random roll generation with exploding 10s.

use rand::Rng;
use tracing::trace;

use super::{D10_SIDES, DiceConfig};

/// A source of d10 faces.
///
/// Every `rand` generator is a die source, so callers usually pass a
/// seeded `StdRng`. Tests can script exact faces by implementing this
/// directly.
pub trait DieSource {
    /// Roll one ten-sided die, returning a face in `1..=10`.
    fn roll_d10(&mut self) -> u8;
}

impl<R: Rng + ?Sized> DieSource for R {
    fn roll_d10(&mut self) -> u8 {
        self.random_range(1..=D10_SIDES)
    }
}

/// Roll the pool described by `config`, sorted highest face first.
///
/// With explosions on, every 10 schedules one more die, and that die can
/// explode again. The result therefore holds `count` dice plus one per 10
/// rolled while exploding.
pub fn roll_dice<S: DieSource + ?Sized>(config: &DiceConfig, source: &mut S) -> Vec<u8> {
    let mut pending = usize::from(config.count());
    let mut rolls = Vec::with_capacity(pending);

    while pending > 0 {
        pending -= 1;
        let face = source.roll_d10();
        if face == D10_SIDES && config.explode() {
            pending += 1;
            trace!(rolled = rolls.len() + 1, "10 exploded");
        }
        rolls.push(face);
    }

    rolls.sort_unstable_by(|a, b| b.cmp(a));
    rolls
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    /// Hands out a fixed list of faces.
    struct Scripted(VecDeque<u8>);

    impl Scripted {
        fn new(faces: &[u8]) -> Self {
            Self(faces.iter().copied().collect())
        }
    }

    impl DieSource for Scripted {
        fn roll_d10(&mut self) -> u8 {
            self.0.pop_front().expect("script ran out of faces")
        }
    }

    fn config(count: u8, explode: bool) -> DiceConfig {
        DiceConfig::new(count, 6, explode).unwrap()
    }

    #[test]
    fn sorted_descending() {
        let mut dice = Scripted::new(&[3, 9, 1, 6]);
        assert_eq!(roll_dice(&config(4, false), &mut dice), vec![9, 6, 3, 1]);
    }

    #[test]
    fn tens_do_not_explode_when_disabled() {
        let mut dice = Scripted::new(&[10, 10, 2]);
        assert_eq!(roll_dice(&config(3, false), &mut dice), vec![10, 10, 2]);
        assert!(dice.0.is_empty());
    }

    #[test]
    fn ten_adds_a_die() {
        let mut dice = Scripted::new(&[10, 4, 7]);
        assert_eq!(roll_dice(&config(2, true), &mut dice), vec![10, 7, 4]);
    }

    #[test]
    fn explosions_chain() {
        // The first 10 explodes into another 10, which explodes into a 5.
        let mut dice = Scripted::new(&[10, 2, 10, 5]);
        let rolls = roll_dice(&config(2, true), &mut dice);
        assert_eq!(rolls, vec![10, 10, 5, 2]);
        assert!(dice.0.is_empty());
    }

    #[test]
    fn long_explosion_chain_grows_past_pool() {
        let mut faces = vec![10; 300];
        faces.push(1);
        let mut dice = Scripted::new(&faces);
        let rolls = roll_dice(&config(1, true), &mut dice);
        assert_eq!(rolls.len(), 301);
        assert_eq!(rolls.last(), Some(&1));
    }

    #[test]
    fn seeded_rng_faces_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let rolls = roll_dice(&config(200, false), &mut rng);
        assert_eq!(rolls.len(), 200);
        assert!(rolls.iter().all(|f| (1..=10).contains(f)));
    }

    #[test]
    fn deterministic_with_seed() {
        let cfg = config(10, true);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(roll_dice(&cfg, &mut rng1), roll_dice(&cfg, &mut rng2));
    }

    #[test]
    fn method_delegates() {
        let cfg = config(3, false);
        let mut dice = Scripted::new(&[5, 8, 2]);
        assert_eq!(cfg.roll(&mut dice), vec![8, 5, 2]);
    }
}
