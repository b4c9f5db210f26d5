use serde::{Deserialize, Serialize};

use super::{TestKind, TrialOutcome};
use crate::sweep::VaryingParameter;

// ------------------------------------------------------------------------------------------------
// Simulation Results
// ------------------------------------------------------------------------------------------------

/// The outcomes of R independent trials for one fixed configuration, in trial order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    tests: Vec<TestKind>,
    trials: Vec<TrialOutcome>,
}

impl SimulationResult {
    pub fn new(tests: Vec<TestKind>, trials: Vec<TrialOutcome>) -> Self {
        Self { tests, trials }
    }

    /// Number of trials, always the configured repetition count
    pub fn repetitions(&self) -> usize {
        self.trials.len()
    }

    pub fn tests(&self) -> &[TestKind] {
        &self.tests
    }

    pub fn trials(&self) -> &[TrialOutcome] {
        &self.trials
    }

    /// One entry per trial; `None` marks an undefined statistic
    pub fn raw_p_values(&self, test: TestKind) -> Vec<Option<f64>> {
        self.trials.iter().map(|trial| trial.p_value(test)).collect()
    }

    /// The defined p-values for `test`, in trial order
    pub fn p_values(&self, test: TestKind) -> Vec<f64> {
        self.trials.iter().filter_map(|trial| trial.p_value(test)).collect()
    }

    /// Trials for which `test` was requested but produced no p-value
    pub fn undefined_count(&self, test: TestKind) -> usize {
        self.trials
            .iter()
            .filter(|trial| trial.get(test).map_or(false, |outcome| outcome.is_undefined()))
            .count()
    }

    /// Rejection summary for every requested test, in request order
    pub fn summarize(&self, alpha: f64) -> Vec<RejectionSummary> {
        self.tests
            .iter()
            .map(|&test| RejectionSummary::from_p_values(test, &self.raw_p_values(test), alpha))
            .collect()
    }

    pub fn summary_for(&self, test: TestKind, alpha: f64) -> Option<RejectionSummary> {
        if !self.tests.contains(&test) {
            return None;
        }
        Some(RejectionSummary::from_p_values(test, &self.raw_p_values(test), alpha))
    }
}

/// Reduction of one test's p-values at one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionSummary {
    pub test: TestKind,
    /// Trials with p < alpha
    pub rejections: usize,
    /// Trials that produced a p-value
    pub defined: usize,
    /// Trials whose statistic was undefined, excluded from `proportion`
    pub undefined: usize,
    /// rejections / defined, `None` when no trial produced a p-value
    pub proportion: Option<f64>,
    /// Monte Carlo standard error of `proportion`
    pub standard_error: Option<f64>,
}

impl RejectionSummary {
    pub fn from_p_values(test: TestKind, p_values: &[Option<f64>], alpha: f64) -> Self {
        let defined: Vec<f64> = p_values.iter().flatten().copied().collect();
        let rejections = defined.iter().filter(|&&p| p < alpha).count();
        let undefined = p_values.len() - defined.len();

        let (proportion, standard_error) = if defined.is_empty() {
            (None, None)
        } else {
            let m = defined.len() as f64;
            let p = rejections as f64 / m;
            (Some(p), Some((p * (1.0 - p) / m).sqrt()))
        };

        Self {
            test,
            rejections,
            defined: defined.len(),
            undefined,
            proportion,
            standard_error,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Sweep Results
// ------------------------------------------------------------------------------------------------

/// One grid value and the rejection summaries computed at it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub summaries: Vec<RejectionSummary>,
}

impl SweepPoint {
    pub fn summary(&self, test: TestKind) -> Option<&RejectionSummary> {
        self.summaries.iter().find(|summary| summary.test == test)
    }

    pub fn rejection_proportion(&self, test: TestKind) -> Option<f64> {
        self.summary(test).and_then(|summary| summary.proportion)
    }
}

/// Sweep points in grid order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub parameter: VaryingParameter,
    pub alpha: f64,
    pub repetitions: usize,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn parameter_values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    /// (grid value, rejection proportion) pairs for one test, in grid order
    pub fn rejection_curve(&self, test: TestKind) -> Vec<(f64, Option<f64>)> {
        self.points
            .iter()
            .map(|point| (point.value, point.rejection_proportion(test)))
            .collect()
    }
}
