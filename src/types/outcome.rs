use serde::{Deserialize, Serialize};
use std::fmt;

/// The variance-equality tests the engine can apply
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    /// Ratio of two sample variances against F(n_A - 1, n_B - 1), two-sided
    FTest,
    /// Bartlett's chi-square test on pooled and per-group log variances
    Bartlett,
    /// ANOVA on absolute deviations from the group means
    Levene,
    /// ANOVA on absolute deviations from the group medians
    BrownForsythe,
}

impl TestKind {
    /// Every test, in reporting order
    pub const ALL: [TestKind; 4] = [
        TestKind::FTest,
        TestKind::Bartlett,
        TestKind::Levene,
        TestKind::BrownForsythe,
    ];

    /// Stable identifier used in configuration files and result files
    pub fn name(&self) -> &'static str {
        match self {
            TestKind::FTest => "f_test",
            TestKind::Bartlett => "bartlett",
            TestKind::Levene => "levene",
            TestKind::BrownForsythe => "brown_forsythe",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestKind::FTest => write!(f, "F-test"),
            TestKind::Bartlett => write!(f, "Bartlett"),
            TestKind::Levene => write!(f, "Levene (mean)"),
            TestKind::BrownForsythe => write!(f, "Brown-Forsythe"),
        }
    }
}

/// Degrees of freedom of the reference distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DegreesOfFreedom {
    /// Chi-square reference
    Single(f64),
    /// F reference, (numerator, denominator)
    Pair(f64, f64),
}

/// A computed test on one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test: TestKind,
    pub statistic: f64,
    pub df: DegreesOfFreedom,
    /// Always within [0, 1]
    pub p_value: f64,
}

/// Why a test could not produce a p-value for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum UndefinedReason {
    /// A group has zero sample variance
    ZeroVariance { group: usize },
    /// Every absolute deviation equals its group average
    ZeroWithinGroupSpread,
    /// The statistic evaluated to NaN or infinity
    NonFiniteStatistic,
    /// The reference distribution returned a probability outside [0, 1]
    PValueOutOfRange,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedReason::ZeroVariance { group } => write!(f, "group {} has zero variance", group),
            UndefinedReason::ZeroWithinGroupSpread => write!(f, "zero within-group spread of deviations"),
            UndefinedReason::NonFiniteStatistic => write!(f, "non-finite test statistic"),
            UndefinedReason::PValueOutOfRange => write!(f, "p-value outside [0, 1]"),
        }
    }
}

/// Result of applying one test to one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum TestOutcome {
    Computed(TestResult),
    Undefined { test: TestKind, reason: UndefinedReason },
}

impl TestOutcome {
    pub fn test(&self) -> TestKind {
        match self {
            TestOutcome::Computed(result) => result.test,
            TestOutcome::Undefined { test, .. } => *test,
        }
    }

    /// The p-value, or `None` for an undefined statistic
    pub fn p_value(&self) -> Option<f64> {
        match self {
            TestOutcome::Computed(result) => Some(result.p_value),
            TestOutcome::Undefined { .. } => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, TestOutcome::Undefined { .. })
    }
}

/// Every requested test applied to one dataset, in request order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    outcomes: Vec<TestOutcome>,
}

impl TrialOutcome {
    pub fn new(outcomes: Vec<TestOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn get(&self, test: TestKind) -> Option<&TestOutcome> {
        self.outcomes.iter().find(|outcome| outcome.test() == test)
    }

    /// The p-value for `test`, `None` if the test was not run or was undefined
    pub fn p_value(&self, test: TestKind) -> Option<f64> {
        self.get(test).and_then(TestOutcome::p_value)
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }
}
