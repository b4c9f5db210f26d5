//! One trial: draw a dataset, apply the requested tests.

use rand::Rng;

use crate::sampling::{sample_dataset, Distribution, GroupParams};
use crate::types::{SimError, TestKind, TestOutcome, TrialOutcome};
use crate::variance_tests::StatError;

/// Runs the requested tests on one freshly drawn dataset.
///
/// Undefined statistics are recorded in the outcome. Group-count mismatches and
/// invalid parameters are configuration errors and are returned.
pub fn run_trial<R: Rng + ?Sized>(
    distribution: Distribution,
    groups: &[GroupParams],
    n: usize,
    tests: &[TestKind],
    rng: &mut R,
) -> Result<TrialOutcome, SimError> {
    let dataset = sample_dataset(distribution, groups, n, rng)?;

    let outcomes = tests
        .iter()
        .map(|&test| match test.apply(&dataset) {
            Ok(result) => Ok(TestOutcome::Computed(result)),
            Err(StatError::Undefined(reason)) => {
                log::debug!("{} undefined for this trial: {}", test, reason);
                Ok(TestOutcome::Undefined { test, reason })
            }
            Err(StatError::GroupCount { test, expected, found }) => {
                Err(SimError::GroupCount { test, expected, found })
            }
            Err(StatError::Distribution(message)) => Err(SimError::Distribution(message)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TrialOutcome::new(outcomes))
}
