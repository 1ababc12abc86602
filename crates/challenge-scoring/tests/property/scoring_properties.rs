use challenge_core::config::{
    BucketMultipliers, BucketedPolicy, ChallengeConfig, EnjoymentThresholds, MultiplierPolicy,
};
use challenge_core::models::{CounterofferRequest, StandardsTier};
use challenge_core::traits::IDifficultyEngine;
use challenge_core::Preset;
use challenge_scoring::{DifficultyEngine, FixedRoll};
use proptest::prelude::*;

fn arb_preset() -> impl Strategy<Value = Preset> {
    prop_oneof![
        Just(Preset::Harsh),
        Just(Preset::Lenient),
        Just(Preset::Continuous),
    ]
}

fn arb_tier() -> impl Strategy<Value = StandardsTier> {
    (0usize..5).prop_map(|i| StandardsTier::from_ordinal(i).unwrap_or_default())
}

/// Valid bucketed policies: ordered thresholds, non-decreasing multipliers.
fn arb_bucketed() -> impl Strategy<Value = BucketedPolicy> {
    (
        prop::array::uniform3(0.0f64..1.0),
        prop::array::uniform4(0.0f64..=1.0),
    )
        .prop_filter_map("distinct thresholds", |(mut t, mut m)| {
            t.sort_by(|a, b| a.total_cmp(b));
            m.sort_by(|a, b| a.total_cmp(b));
            (t[0] < t[1] && t[1] < t[2]).then_some(BucketedPolicy {
                thresholds: EnjoymentThresholds {
                    critical_low: t[0],
                    low: t[1],
                    medium: t[2],
                },
                multipliers: BucketMultipliers {
                    critical_low: m[0],
                    low: m[1],
                    medium: m[2],
                    high: m[3],
                },
            })
        })
}

// ── Enjoyment bounds ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn enjoyment_stays_in_unit_range(
        preset in arb_preset(),
        base in -2.0f64..3.0,
        affinity in -5.0f64..5.0,
        matches in 0usize..10,
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        let e = engine.score(base, affinity, matches);
        prop_assert!((0.0..=1.0).contains(&e));
    }

    #[test]
    fn enjoyment_monotone_in_affinity(
        preset in arb_preset(),
        base in 0.0f64..1.0,
        a in -1.0f64..1.0,
        b in -1.0f64..1.0,
        matches in 0usize..5,
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(engine.score(base, lo, matches) <= engine.score(base, hi, matches));
    }

    #[test]
    fn enjoyment_monotone_in_matches(
        preset in arb_preset(),
        base in 0.0f64..1.0,
        affinity in -1.0f64..1.0,
        matches in 0usize..5,
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        prop_assert!(engine.score(base, affinity, matches) <= engine.score(base, affinity, matches + 1));
    }
}

// ── Multiplier bounds ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn multiplier_in_unit_range(
        preset in arb_preset(),
        enjoyment in -1.0f64..2.0,
        tier in arb_tier(),
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        let m = engine.offer_multiplier(enjoyment, tier);
        prop_assert!((0.0..=1.0).contains(&m.enjoyment_multiplier));
        prop_assert!((0.0..=1.0).contains(&m.standards_penalty));
        prop_assert!((0.0..=1.0).contains(&m.combined));
    }

    #[test]
    fn continuous_never_below_floor(enjoyment in -1.0f64..2.0) {
        let engine = DifficultyEngine::from_preset(Preset::Continuous);
        prop_assert!(engine.enjoyment_multiplier(enjoyment) >= 0.1);
    }

    #[test]
    fn bucketed_multiplier_non_decreasing(
        policy in arb_bucketed(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let mut config = ChallengeConfig::from_preset(Preset::Harsh);
        config.multiplier = MultiplierPolicy::Bucketed(policy);
        let engine = DifficultyEngine::new(config);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(engine.enjoyment_multiplier(lo) <= engine.enjoyment_multiplier(hi));
    }

    #[test]
    fn adjusted_success_never_exceeds_base(
        preset in arb_preset(),
        chance in 0.0f64..=1.0,
        items in prop::collection::vec(0.0f64..=1.0, 0..6),
        tier in arb_tier(),
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        prop_assert!(engine.adjust_offer_success(chance, &items, tier) <= chance);
    }
}

// ── Counteroffer ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn roll_drawn_only_in_mediocre_band(
        preset in arb_preset(),
        enjoyment in 0.0f64..=1.0,
        roll_value in 0.0f64..1.0,
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        let co = &engine.config().counteroffer;
        let in_band = enjoyment >= co.min_enjoyment && enjoyment < co.mediocre_threshold;
        let mut roll = FixedRoll::new(roll_value);
        let request = CounterofferRequest {
            prior_accept: true,
            enjoyment,
            price: 1.0,
            avg_order_spend: None,
        };
        engine.evaluate_counteroffer(&request, &mut roll);
        prop_assert_eq!(roll.draws(), usize::from(in_band));
    }

    #[test]
    fn prior_rejection_never_overturned(
        preset in arb_preset(),
        enjoyment in 0.0f64..=1.0,
        roll_value in 0.0f64..1.0,
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        let request = CounterofferRequest {
            prior_accept: false,
            enjoyment,
            price: 1.0,
            avg_order_spend: Some(100.0),
        };
        prop_assert!(!engine.evaluate_counteroffer(&request, &mut FixedRoll::new(roll_value)).accepted);
    }

    #[test]
    fn higher_enjoyment_never_hurts_acceptance(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        roll_value in 0.0f64..1.0,
    ) {
        let engine = DifficultyEngine::from_preset(Preset::Harsh);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let accept = |e: f64| {
            let request = CounterofferRequest {
                prior_accept: true,
                enjoyment: e,
                price: 1.0,
                avg_order_spend: None,
            };
            engine.accept_counteroffer(&request, &mut FixedRoll::new(roll_value))
        };
        prop_assert!(!accept(lo) || accept(hi));
    }
}

proptest! {
    #[test]
    fn below_minimum_always_rejects(
        preset in arb_preset(),
        fraction in 0.0f64..1.0,
        roll_value in 0.0f64..1.0,
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        let enjoyment = engine.config().counteroffer.min_enjoyment * fraction;
        let request = CounterofferRequest {
            prior_accept: true,
            enjoyment,
            price: 1.0,
            avg_order_spend: None,
        };
        prop_assert!(!engine.evaluate_counteroffer(&request, &mut FixedRoll::new(roll_value)).accepted);
    }

    #[test]
    fn mediocre_or_better_always_accepts(
        preset in arb_preset(),
        fraction in 0.0f64..=1.0,
        roll_value in 0.0f64..1.0,
    ) {
        let engine = DifficultyEngine::from_preset(preset);
        let mediocre = engine.config().counteroffer.mediocre_threshold;
        let enjoyment = mediocre + (1.0 - mediocre) * fraction;
        let request = CounterofferRequest {
            prior_accept: true,
            enjoyment,
            price: 1.0,
            avg_order_spend: Some(100.0),
        };
        prop_assert!(engine.evaluate_counteroffer(&request, &mut FixedRoll::new(roll_value)).accepted);
    }

    #[test]
    fn price_past_limit_always_rejects(
        enjoyment in 0.0f64..=1.0,
        roll_value in 0.0f64..1.0,
        avg in 1.0f64..500.0,
    ) {
        let engine = DifficultyEngine::from_preset(Preset::Harsh);
        let request = CounterofferRequest {
            prior_accept: true,
            enjoyment,
            price: avg * 2.1,
            avg_order_spend: Some(avg),
        };
        prop_assert!(!engine.evaluate_counteroffer(&request, &mut FixedRoll::new(roll_value)).accepted);
    }
}
