//! The four variance-equality procedures.
//!
//! Statistics are computed here from the raw groups; only the reference
//! distributions (F and chi-square) come from `statrs`.

use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor};
use thiserror::Error;

use crate::types::{Dataset, TestKind, TestResult, UndefinedReason};

pub mod bartlett;
pub mod descriptive;
pub mod levene;

pub use bartlett::bartlett_test;
pub use f_test::f_test;
pub use levene::{brown_forsythe_test, levene_test, Center};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    #[error("{test} requires {expected} groups, got {found}")]
    GroupCount {
        test: TestKind,
        expected: &'static str,
        found: usize,
    },
    #[error("Undefined statistic: {0}")]
    Undefined(UndefinedReason),
    #[error("Reference distribution error: {0}")]
    Distribution(String),
}

impl TestKind {
    /// Applies this test to a dataset
    pub fn apply(&self, dataset: &Dataset) -> Result<TestResult, StatError> {
        match self {
            TestKind::FTest => f_test(dataset),
            TestKind::Bartlett => bartlett_test(dataset),
            TestKind::Levene => levene_test(dataset),
            TestKind::BrownForsythe => brown_forsythe_test(dataset),
        }
    }

    /// Whether the test accepts a dataset with `k` groups
    pub fn supports_groups(&self, k: usize) -> bool {
        match self {
            TestKind::FTest => k == 2,
            _ => k >= 2,
        }
    }

    /// Human-readable group requirement, used in error messages
    pub fn group_requirement(&self) -> &'static str {
        match self {
            TestKind::FTest => "exactly 2",
            _ => "at least 2",
        }
    }
}

pub(crate) fn check_group_count(test: TestKind, dataset: &Dataset) -> Result<(), StatError> {
    let found = dataset.num_groups();
    if !test.supports_groups(found) {
        return Err(StatError::GroupCount {
            test,
            expected: test.group_requirement(),
            found,
        });
    }
    Ok(())
}

pub(crate) fn ensure_finite(statistic: f64) -> Result<f64, StatError> {
    if statistic.is_finite() {
        Ok(statistic)
    } else {
        Err(StatError::Undefined(UndefinedReason::NonFiniteStatistic))
    }
}

/// Passes through probabilities in [0, 1] and flags anything else as undefined
pub(crate) fn checked_p_value(p: f64) -> Result<f64, StatError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(StatError::Undefined(UndefinedReason::PValueOutOfRange))
    }
}

pub(crate) fn fisher_snedecor(d1: f64, d2: f64) -> Result<FisherSnedecor, StatError> {
    FisherSnedecor::new(d1, d2).map_err(|e| StatError::Distribution(e.to_string()))
}

/// Upper tail P(F >= f) of F(d1, d2)
pub(crate) fn f_upper_tail(f: f64, d1: f64, d2: f64) -> Result<f64, StatError> {
    checked_p_value(fisher_snedecor(d1, d2)?.sf(f))
}

/// Upper tail P(X >= x) of chi-square(df)
pub(crate) fn chi_squared_upper_tail(x: f64, df: f64) -> Result<f64, StatError> {
    let chi = ChiSquared::new(df).map_err(|e| StatError::Distribution(e.to_string()))?;
    checked_p_value(chi.sf(x))
}
