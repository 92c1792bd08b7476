//! Property tests for the dice engine and formula resolver.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wwdice_core::{Character, DiceConfig, EngineError, Formula, calculate_results, roll_dice};

fn faces() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1u8..=10, 0..40)
}

proptest! {
    #[test]
    fn notation_round_trips(count in 1u8..=u8::MAX, difficulty in 1u8..=10, explode in any::<bool>()) {
        let text = format!("{count}d{difficulty}{}", if explode { "!" } else { "" });
        let cfg = DiceConfig::parse(&text).unwrap();
        prop_assert_eq!(cfg.count(), count);
        prop_assert_eq!(cfg.difficulty(), difficulty);
        prop_assert_eq!(cfg.explode(), explode);
        prop_assert_eq!(cfg.to_string(), text);
    }

    #[test]
    fn oversized_difficulty_rejected(count in 0u32..1000, difficulty in 11u32..100_000) {
        let text = format!("{count}d{difficulty}");
        prop_assert_eq!(DiceConfig::parse(&text), Err(EngineError::Difficulty(difficulty)));
    }

    #[test]
    fn plain_rolls_keep_pool_size(count in 1u8..=60, difficulty in 1u8..=10, seed in any::<u64>()) {
        let cfg = DiceConfig::new(count, difficulty, false).unwrap();
        let rolls = roll_dice(&cfg, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(rolls.len(), usize::from(count));
        prop_assert!(rolls.iter().all(|f| (1..=10).contains(f)));
        prop_assert!(rolls.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn every_extra_die_is_a_ten(count in 1u8..=30, seed in any::<u64>()) {
        let cfg = DiceConfig::new(count, 6, true).unwrap();
        let rolls = roll_dice(&cfg, &mut StdRng::seed_from_u64(seed));
        let tens = rolls.iter().filter(|&&f| f == 10).count();
        prop_assert_eq!(rolls.len() - usize::from(count), tens);
    }

    #[test]
    fn scoring_ignores_order(
        (rolls, shuffled) in faces().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        difficulty in 1u8..=10,
    ) {
        let cfg = DiceConfig::new(1, difficulty, false).unwrap();
        prop_assert_eq!(calculate_results(&cfg, &rolls), calculate_results(&cfg, &shuffled));
    }

    #[test]
    fn botch_needs_ones_and_no_successes(rolls in faces(), difficulty in 2u8..=10) {
        let cfg = DiceConfig::new(1, difficulty, false).unwrap();
        let result = calculate_results(&cfg, &rolls);
        let ones = rolls.iter().filter(|&&f| f == 1).count();
        let hits = rolls.iter().filter(|&&f| f >= difficulty).count();
        prop_assert_eq!(result.botch, ones > 0 && hits == 0);
        prop_assert_eq!(result.failures as usize, ones);
        prop_assert_eq!(result.successes as usize, hits.saturating_sub(ones));
    }

    #[test]
    fn pool_never_wraps(a in any::<u8>(), b in any::<u8>(), bonus in 1u8..=u8::MAX) {
        let c = Character::new().with_trait("a", a).with_trait("b", b);
        let f = Formula::parse(&format!("a+b+{bonus}"));
        let expected = (u32::from(a) + u32::from(b) + u32::from(bonus)).min(255);
        prop_assert_eq!(u32::from(f.pool_size(&c)), expected);
    }
}

#[test]
fn exploding_pools_eventually_explode() {
    let cfg = DiceConfig::parse("10d6!").unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut ever_exploded = false;

    for _ in 0..10_000 {
        let rolls = roll_dice(&cfg, &mut rng);
        if rolls.len() > 10 {
            ever_exploded = true;
            let tens = rolls.iter().filter(|&&f| f == 10).count();
            assert_eq!(tens, rolls.len() - 10);
        }
    }
    assert!(ever_exploded, "no explosions across 10000 rolls of 10 dice");
}

#[test]
fn character_roller_flow() {
    let c = Character::new().with_trait("str", 5).with_trait("athletics", 2);
    let f = Formula::parse("str+athletics");
    let cfg = f.to_dice_config(&c, 6).unwrap();
    assert_eq!(cfg.count(), 7);

    let rolls = cfg.roll(&mut StdRng::seed_from_u64(1));
    assert_eq!(rolls.len(), 7);
    let result = cfg.score(&rolls);
    assert!(result.successes as usize <= rolls.len());
}
