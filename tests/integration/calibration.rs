//! Type-I error under equal Normal variances and agreement between Bartlett and F.

use crate::common::{assert_within, normal_pair, N};
use varsim::{run_simulation, seeded_rng, TestKind};

/// Tests that each test rejects close to alpha when the null holds
#[test]
fn test_null_rejection_rate_near_alpha() {
    let result = run_simulation(&normal_pair(1.0, 1.0, N), 1000, &mut seeded_rng(20240501)).expect("valid");
    for test in [TestKind::FTest, TestKind::Bartlett, TestKind::Levene, TestKind::BrownForsythe] {
        let summary = result.summary_for(test, 0.05).expect("requested");
        assert_eq!(summary.undefined, 0);
        assert_within(summary.proportion.expect("defined"), 0.025, 0.085, &test.to_string());
    }
}

/// Tests that Bartlett and the F-test agree on two Normal groups
#[test]
fn test_bartlett_agrees_with_f_test() {
    let result = run_simulation(&normal_pair(1.0, 1.2, N), 200, &mut seeded_rng(3)).expect("valid");
    let f = result.p_values(TestKind::FTest);
    let bartlett = result.p_values(TestKind::Bartlett);
    assert_eq!(f.len(), 200);
    for (pf, pb) in f.iter().zip(&bartlett) {
        assert!((pf - pb).abs() < 1e-3, "F-test {} vs Bartlett {}", pf, pb);
    }
}

/// Tests that p-values exported for plotting are plain probabilities in trial order
#[test]
fn test_raw_p_values_cover_every_trial() {
    let result = run_simulation(&normal_pair(1.0, 1.0, 20), 75, &mut seeded_rng(1)).expect("valid");
    for test in TestKind::ALL {
        let raw = result.raw_p_values(test);
        assert_eq!(raw.len(), 75);
        assert!(raw.iter().flatten().all(|p| (0.0..=1.0).contains(p)));
    }
}
