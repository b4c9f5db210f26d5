use varsim::{Distribution, GroupParams, SimulationConfig, SweepResult, TestKind};

/// Observations per group used by the reference scenarios
pub const N: usize = 100;

pub fn normal_pair(sd_a: f64, sd_b: f64, n: usize) -> SimulationConfig {
    SimulationConfig::two_group(
        Distribution::Normal,
        GroupParams::normal(5.0, sd_a),
        GroupParams::normal(5.0, sd_b),
        n,
    )
}

pub fn exponential_pair(n: usize) -> SimulationConfig {
    SimulationConfig::two_group(
        Distribution::Exponential,
        GroupParams::exponential(1.0),
        GroupParams::exponential(1.0),
        n,
    )
}

pub fn assert_within(value: f64, low: f64, high: f64, what: &str) {
    assert!(
        value >= low && value <= high,
        "{}: {} not within [{}, {}]",
        what,
        value,
        low,
        high
    );
}

pub fn proportions(result: &SweepResult, test: TestKind) -> Vec<f64> {
    result
        .rejection_curve(test)
        .into_iter()
        .map(|(_, p)| p.expect("continuous data gives defined p-values"))
        .collect()
}
