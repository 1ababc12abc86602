use challenge_core::models::{CounterofferReason, CounterofferRequest};
use challenge_core::traits::IDifficultyEngine;
use challenge_core::Preset;
use challenge_scoring::{DifficultyEngine, FixedRoll, RngRoll, SequenceRoll};

fn request(enjoyment: f64, price: f64, avg: Option<f64>) -> CounterofferRequest {
    CounterofferRequest {
        prior_accept: true,
        enjoyment,
        price,
        avg_order_spend: avg,
    }
}

// ── Ordering of checks ───────────────────────────────────────────────────

#[test]
fn prior_rejection_is_final() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = FixedRoll::new(0.99);
    let mut req = request(1.0, 10.0, Some(100.0));
    req.prior_accept = false;
    let decision = engine.evaluate_counteroffer(&req, &mut roll);
    assert!(!decision.accepted);
    assert_eq!(decision.reason, CounterofferReason::PriorRejection);
    assert_eq!(roll.draws(), 0);
}

#[test]
fn price_at_limit_is_rejected() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = FixedRoll::new(0.99);
    let decision = engine.evaluate_counteroffer(&request(1.0, 200.0, Some(100.0)), &mut roll);
    assert!(!decision.accepted);
    assert_eq!(decision.reason, CounterofferReason::PriceLimit { limit: 200.0 });

    let decision = engine.evaluate_counteroffer(&request(1.0, 199.99, Some(100.0)), &mut roll);
    assert!(decision.accepted);
    assert_eq!(roll.draws(), 0);
}

#[test]
fn price_check_runs_before_enjoyment() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = FixedRoll::new(0.0);
    let decision = engine.evaluate_counteroffer(&request(0.1, 500.0, Some(100.0)), &mut roll);
    assert!(matches!(decision.reason, CounterofferReason::PriceLimit { .. }));
}

#[test]
fn zero_average_spend_rejects_any_price() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = FixedRoll::new(0.99);
    let decision = engine.evaluate_counteroffer(&request(0.9, 10.0, Some(0.0)), &mut roll);
    assert!(!decision.accepted);
    assert_eq!(decision.reason, CounterofferReason::PriceLimit { limit: 0.0 });
    assert_eq!(roll.draws(), 0);
}

#[test]
fn price_over_twice_spend_rejected_at_every_enjoyment() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    for step in 0..=20 {
        let enjoyment = f64::from(step) / 20.0;
        for roll_value in [0.0, 0.5, 0.999] {
            let mut roll = FixedRoll::new(roll_value);
            let decision =
                engine.evaluate_counteroffer(&request(enjoyment, 210.0, Some(100.0)), &mut roll);
            assert!(!decision.accepted, "enjoyment {enjoyment} roll {roll_value}");
            assert!(matches!(decision.reason, CounterofferReason::PriceLimit { .. }));
        }
    }
}

#[test]
fn continuous_preset_skips_price_check() {
    let engine = DifficultyEngine::from_preset(Preset::Continuous);
    let mut roll = FixedRoll::new(0.0);
    let decision = engine.evaluate_counteroffer(&request(0.9, 10_000.0, Some(10.0)), &mut roll);
    assert!(decision.accepted);
}

#[test]
fn unknown_spend_skips_price_check() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = FixedRoll::new(0.0);
    let decision = engine.evaluate_counteroffer(&request(0.9, 10_000.0, None), &mut roll);
    assert!(decision.accepted);
}

// ── Enjoyment bands ──────────────────────────────────────────────────────

#[test]
fn below_minimum_always_rejects_without_rolling() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = FixedRoll::new(0.999);
    let decision = engine.evaluate_counteroffer(&request(0.39, 10.0, None), &mut roll);
    assert!(!decision.accepted);
    assert_eq!(decision.reason, CounterofferReason::EnjoymentTooLow { minimum: 0.4 });
    assert_eq!(roll.draws(), 0);
}

#[test]
fn mediocre_band_rolls_exactly_once() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = FixedRoll::new(0.3);
    // reject chance at 0.5 enjoyment is 0.25
    let decision = engine.evaluate_counteroffer(&request(0.5, 10.0, None), &mut roll);
    assert!(decision.accepted);
    assert_eq!(roll.draws(), 1);
    match decision.reason {
        CounterofferReason::PassedRoll { reject_chance, roll } => {
            assert!((reject_chance - 0.25).abs() < 1e-9);
            assert_eq!(roll, 0.3);
        }
        other => panic!("unexpected reason {other:?}"),
    }

    let mut roll = FixedRoll::new(0.2);
    let decision = engine.evaluate_counteroffer(&request(0.5, 10.0, None), &mut roll);
    assert!(!decision.accepted);
    assert!(matches!(decision.reason, CounterofferReason::FailedRoll { .. }));
}

#[test]
fn at_minimum_uses_max_reject_chance() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut low = FixedRoll::new(0.49);
    let mut high = FixedRoll::new(0.5);
    assert!(!engine.accept_counteroffer(&request(0.4, 10.0, None), &mut low));
    assert!(engine.accept_counteroffer(&request(0.4, 10.0, None), &mut high));
}

#[test]
fn good_enjoyment_accepts_without_rolling() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = FixedRoll::new(0.0);
    let decision = engine.evaluate_counteroffer(&request(0.6, 10.0, None), &mut roll);
    assert!(decision.accepted);
    assert_eq!(decision.reason, CounterofferReason::Accepted);
    assert_eq!(roll.draws(), 0);
}

// ── Statistical behaviour ────────────────────────────────────────────────

#[test]
fn acceptance_rate_tracks_reject_chance() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = RngRoll::seeded(7);
    let trials = 20_000;
    let accepted = (0..trials)
        .filter(|_| engine.accept_counteroffer(&request(0.5, 10.0, None), &mut roll))
        .count();
    let rate = accepted as f64 / trials as f64;
    assert!((rate - 0.75).abs() < 0.02, "acceptance rate {rate}");
}

#[test]
fn decisions_carry_no_state() {
    let engine = DifficultyEngine::from_preset(Preset::Harsh);
    let mut roll = SequenceRoll::new(vec![0.1, 0.9]);
    let first = engine.evaluate_counteroffer(&request(0.5, 10.0, None), &mut roll);
    let second = engine.evaluate_counteroffer(&request(0.5, 10.0, None), &mut roll);
    assert!(!first.accepted);
    assert!(second.accepted);
    assert_eq!(roll.draws(), 2);
}
