//! Behaviour under skewed (Exponential) populations with equal variances.

use crate::common::{assert_within, exponential_pair, proportions, N};
use varsim::{run_simulation, run_sweep_parallel, seeded_rng, SweepConfig, TestKind, VaryingParameter};

/// Exponential(1) against Exponential(1): the F-test is badly inflated, Levene less so
#[test]
fn test_skew_inflates_non_robust_tests() {
    let result = run_simulation(&exponential_pair(N), 500, &mut seeded_rng(11)).expect("valid");
    let rate = |test| result.summary_for(test, 0.05).and_then(|s| s.proportion).expect("defined");

    assert_within(rate(TestKind::FTest), 0.22, 0.39, "F-test");
    assert_within(rate(TestKind::Levene), 0.07, 0.23, "Levene");
    assert!(rate(TestKind::FTest) > rate(TestKind::Levene));
    assert!(rate(TestKind::BrownForsythe) < 0.10);
}

/// Tests that median centering never rejects more often than mean centering on skewed data
#[test]
fn test_brown_forsythe_not_above_levene() {
    let sweep = SweepConfig::new(
        exponential_pair(10),
        VaryingParameter::SampleSize,
        vec![10.0, 50.0, 100.0, 200.0],
        500,
    );
    let result = run_sweep_parallel(&sweep, 314).expect("valid");
    let levene = proportions(&result, TestKind::Levene);
    let brown_forsythe = proportions(&result, TestKind::BrownForsythe);

    for ((n, l), b) in result.parameter_values().iter().zip(&levene).zip(&brown_forsythe) {
        assert!(b <= l, "n = {}: Brown-Forsythe {} above Levene {}", n, b, l);
    }
}
