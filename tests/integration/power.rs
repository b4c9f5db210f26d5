//! Power against unequal Normal variances.

use crate::common::{assert_within, normal_pair, proportions, N};
use varsim::{run_simulation, run_sweep, seeded_rng, SweepConfig, TestKind, VaryingParameter};

/// Normal(5, 1) against Normal(5, 1.2): the F-test and Bartlett reject about 42% of trials, Levene somewhat fewer
#[test]
fn test_power_at_sd_ratio_1_2() {
    let result = run_simulation(&normal_pair(1.0, 1.2, N), 500, &mut seeded_rng(7)).expect("valid");
    let rate = |test| result.summary_for(test, 0.05).and_then(|s| s.proportion).expect("defined");

    assert_within(rate(TestKind::FTest), 0.33, 0.55, "F-test");
    assert_within(rate(TestKind::Bartlett), 0.33, 0.55, "Bartlett");
    assert_within(rate(TestKind::Levene), 0.27, 0.50, "Levene");
    assert!((rate(TestKind::FTest) - rate(TestKind::Bartlett)).abs() <= 0.01);
}

/// Tests that rejection rates do not decrease as the scale ratio moves away from 1
#[test]
fn test_power_increases_with_scale_ratio() {
    let sweep = SweepConfig::new(
        normal_pair(1.0, 1.0, N),
        VaryingParameter::ScaleRatio,
        vec![1.0, 1.1, 1.2, 1.5],
        500,
    );
    let result = run_sweep(&sweep, &mut seeded_rng(99)).expect("valid");
    assert_eq!(result.parameter_values(), vec![1.0, 1.1, 1.2, 1.5]);

    for test in TestKind::ALL {
        let curve = proportions(&result, test);
        for pair in curve.windows(2) {
            assert!(pair[0] <= pair[1], "{} curve {:?} is not monotone", test, curve);
        }
        assert!(curve[3] > 0.85, "{} power at ratio 1.5 is {}", test, curve[3]);
    }
}
