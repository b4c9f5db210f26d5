use serde::{Deserialize, Serialize};

use super::descriptive::{mean, median};
use super::{check_group_count, ensure_finite, f_upper_tail, StatError};
use crate::types::{Dataset, DegreesOfFreedom, TestKind, TestResult, UndefinedReason};

/// Location each group's absolute deviations are measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Center {
    Mean,
    Median,
}

impl Center {
    fn of(&self, values: &[f64]) -> f64 {
        match self {
            Center::Mean => mean(values),
            Center::Median => median(values),
        }
    }

    fn test_kind(&self) -> TestKind {
        match self {
            Center::Mean => TestKind::Levene,
            Center::Median => TestKind::BrownForsythe,
        }
    }
}

/// Levene's test with mean centering
pub fn levene_test(dataset: &Dataset) -> Result<TestResult, StatError> {
    deviation_anova(dataset, Center::Mean)
}

/// Brown-Forsythe test: Levene's test with median centering, no trimming
pub fn brown_forsythe_test(dataset: &Dataset) -> Result<TestResult, StatError> {
    deviation_anova(dataset, Center::Median)
}

/// One-way ANOVA F on Z_ij = |Y_ij - center_i|:
/// W = [(N - k)/(k - 1)] · Σ n_i (Z̄_i - Z̄)² / Σ Σ (Z_ij - Z̄_i)², referred to F(k - 1, N - k).
fn deviation_anova(dataset: &Dataset, center: Center) -> Result<TestResult, StatError> {
    let test = center.test_kind();
    check_group_count(test, dataset)?;

    let deviations: Vec<Vec<f64>> = dataset
        .groups()
        .iter()
        .map(|sample| {
            let c = center.of(sample.values());
            sample.values().iter().map(|&y| (y - c).abs()).collect()
        })
        .collect();

    let n_total = dataset.total_observations() as f64;
    let grand_mean = deviations.iter().flatten().sum::<f64>() / n_total;

    let mut between = 0.0;
    let mut within = 0.0;
    for z in &deviations {
        let group_mean = mean(z);
        between += z.len() as f64 * (group_mean - grand_mean).powi(2);
        within += z.iter().map(|&v| (v - group_mean).powi(2)).sum::<f64>();
    }
    if within == 0.0 {
        return Err(StatError::Undefined(UndefinedReason::ZeroWithinGroupSpread));
    }

    let d1 = (deviations.len() - 1) as f64;
    let d2 = n_total - deviations.len() as f64;
    let statistic = ensure_finite((d2 / d1) * between / within)?;
    let p_value = f_upper_tail(statistic, d1, d2)?;

    Ok(TestResult {
        test,
        statistic,
        df: DegreesOfFreedom::Pair(d1, d2),
        p_value,
    })
}
