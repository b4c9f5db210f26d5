use thiserror::Error;

pub mod constants;
pub mod outcome;
pub mod results;
pub mod sample;

#[cfg(test)]
mod tests;

pub use outcome::{DegreesOfFreedom, TestKind, TestOutcome, TestResult, TrialOutcome, UndefinedReason};
pub use results::{RejectionSummary, SimulationResult, SweepPoint, SweepResult};
pub use sample::{Dataset, Sample};

/// Errors raised by the engine before or while running a configuration.
///
/// All of these are configuration errors: they are surfaced before any trial runs.
/// A degenerate draw is never an error, it is recorded as [`TestOutcome::Undefined`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("{test} requires {expected} groups, got {found}")]
    GroupCount {
        test: TestKind,
        expected: &'static str,
        found: usize,
    },
    #[error("Distribution error: {0}")]
    Distribution(String),
}
