use crate::sampling::{Distribution, GroupParams};
use crate::simulation::{seeded_rng, SimulationConfig};
use crate::sweep::{reduce, run_sweep, run_sweep_parallel, run_sweep_with_observer, SweepConfig, VaryingParameter};
use crate::types::{
    DegreesOfFreedom, SimulationResult, TestKind, TestOutcome, TestResult, TrialOutcome, UndefinedReason,
};

fn sweep() -> SweepConfig {
    let base = SimulationConfig::two_group(
        Distribution::Normal,
        GroupParams::normal(0.0, 1.0),
        GroupParams::normal(0.0, 1.0),
        30,
    );
    SweepConfig::new(base, VaryingParameter::ScaleRatio, vec![2.0, 1.0, 1.5], 40)
}

#[test]
fn test_sweep_preserves_grid_order() {
    let result = run_sweep(&sweep(), &mut seeded_rng(10)).expect("valid");
    assert_eq!(result.parameter_values(), vec![2.0, 1.0, 1.5]);
    assert_eq!(result.repetitions, 40);
    assert_eq!(result.alpha, 0.05);
    for point in &result.points {
        let tests: Vec<TestKind> = point.summaries.iter().map(|s| s.test).collect();
        assert_eq!(tests, TestKind::ALL.to_vec());
        for summary in &point.summaries {
            assert_eq!(summary.defined + summary.undefined, 40);
            let p = summary.proportion.expect("continuous data");
            assert!((0.0..=1.0).contains(&p));
        }
    }
    let curve = result.rejection_curve(TestKind::FTest);
    assert_eq!(curve.len(), 3);
    assert_eq!(curve[0].0, 2.0);
}

#[test]
fn test_sweep_is_deterministic() {
    let a = run_sweep(&sweep(), &mut seeded_rng(10)).expect("valid");
    let b = run_sweep(&sweep(), &mut seeded_rng(10)).expect("valid");
    assert_eq!(a, b);

    let pa = run_sweep_parallel(&sweep(), 10).expect("valid");
    let pb = run_sweep_parallel(&sweep(), 10).expect("valid");
    assert_eq!(pa, pb);
    assert_eq!(pa.parameter_values(), vec![2.0, 1.0, 1.5]);
}

#[test]
fn test_observer_sees_every_point_in_order() {
    let mut seen = Vec::new();
    let result = run_sweep_with_observer(&sweep(), &mut seeded_rng(4), |index, point| {
        seen.push((index, point.value));
    })
    .expect("valid");
    assert_eq!(seen, vec![(0, 2.0), (1, 1.0), (2, 1.5)]);
    assert_eq!(result.points.len(), 3);
}

fn computed(test: TestKind, p_value: f64) -> TestOutcome {
    TestOutcome::Computed(TestResult {
        test,
        statistic: 1.0,
        df: DegreesOfFreedom::Single(1.0),
        p_value,
    })
}

/// Tests that undefined trials are excluded from the denominator and counted separately
#[test]
fn test_undefined_trials_are_excluded() {
    let undefined = TestOutcome::Undefined {
        test: TestKind::Bartlett,
        reason: UndefinedReason::ZeroVariance { group: 0 },
    };
    let trials = vec![
        TrialOutcome::new(vec![computed(TestKind::FTest, 0.01), computed(TestKind::Bartlett, 0.01)]),
        TrialOutcome::new(vec![computed(TestKind::FTest, 0.20), undefined.clone()]),
        TrialOutcome::new(vec![computed(TestKind::FTest, 0.04), undefined]),
        TrialOutcome::new(vec![computed(TestKind::FTest, 0.05), computed(TestKind::Bartlett, 0.90)]),
    ];
    let result = SimulationResult::new(vec![TestKind::FTest, TestKind::Bartlett], trials);
    let point = reduce(1.0, &result, 0.05);

    let f = point.summary(TestKind::FTest).expect("requested");
    assert_eq!((f.rejections, f.defined, f.undefined), (2, 4, 0));
    assert_eq!(f.proportion, Some(0.5));

    let bartlett = point.summary(TestKind::Bartlett).expect("requested");
    assert_eq!((bartlett.rejections, bartlett.defined, bartlett.undefined), (1, 2, 2));
    assert_eq!(bartlett.proportion, Some(0.5));
    assert_eq!(result.raw_p_values(TestKind::Bartlett), vec![Some(0.01), None, None, Some(0.90)]);

    assert!(point.summary(TestKind::Levene).is_none());
}

#[test]
fn test_all_undefined_has_no_proportion() {
    let trials = (0..3)
        .map(|_| {
            TrialOutcome::new(vec![TestOutcome::Undefined {
                test: TestKind::Levene,
                reason: UndefinedReason::ZeroWithinGroupSpread,
            }])
        })
        .collect();
    let result = SimulationResult::new(vec![TestKind::Levene], trials);
    let summary = &result.summarize(0.05)[0];
    assert_eq!(summary.undefined, 3);
    assert_eq!(summary.proportion, None);
    assert_eq!(summary.standard_error, None);
}

#[test]
fn test_sweep_result_serializes_with_snake_case_names() {
    let result = run_sweep(&sweep(), &mut seeded_rng(2)).expect("valid");
    let value = serde_json::to_value(&result).expect("serializes");

    assert_eq!(value["parameter"], "scale_ratio");
    assert_eq!(value["points"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["points"][0]["value"], 2.0);
    assert_eq!(value["points"][0]["summaries"][3]["test"], "brown_forsythe");
}
