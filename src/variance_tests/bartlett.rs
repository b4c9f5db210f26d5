use super::descriptive::variance;
use super::{chi_squared_upper_tail, check_group_count, ensure_finite, StatError};
use crate::types::{Dataset, DegreesOfFreedom, TestKind, TestResult, UndefinedReason};

/// Bartlett's test for equal variances across k >= 2 groups.
///
/// T = [(N - k) ln S_p² - Σ (n_i - 1) ln S_i²] / C with
/// C = 1 + (Σ 1/(n_i - 1) - 1/(N - k)) / (3 (k - 1)), referred to chi-square(k - 1).
pub fn bartlett_test(dataset: &Dataset) -> Result<TestResult, StatError> {
    check_group_count(TestKind::Bartlett, dataset)?;
    let groups = dataset.groups();
    let k = groups.len() as f64;
    let residual_df = (dataset.total_observations() - groups.len()) as f64;

    let mut weighted_log_variance = 0.0;
    let mut pooled_ss = 0.0;
    let mut reciprocal_df = 0.0;
    for (group, sample) in groups.iter().enumerate() {
        let v = variance(sample.values());
        if v == 0.0 {
            return Err(StatError::Undefined(UndefinedReason::ZeroVariance { group }));
        }
        let df = sample.degrees_of_freedom();
        weighted_log_variance += df * v.ln();
        pooled_ss += df * v;
        reciprocal_df += 1.0 / df;
    }

    let pooled_variance = pooled_ss / residual_df;
    let numerator = residual_df * pooled_variance.ln() - weighted_log_variance;
    let correction = 1.0 + (reciprocal_df - 1.0 / residual_df) / (3.0 * (k - 1.0));
    let statistic = ensure_finite(numerator / correction)?;

    let df = k - 1.0;
    let p_value = chi_squared_upper_tail(statistic, df)?;

    Ok(TestResult {
        test: TestKind::Bartlett,
        statistic,
        df: DegreesOfFreedom::Single(df),
        p_value,
    })
}
