//! Repeated trials for one fixed configuration.
//!
//! The sequential driver advances a single caller-owned stream across all trials.
//! The parallel driver gives trial `i` its own stream derived from `(seed, i)`,
//! which makes its result independent of the rayon thread count.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sampling::{validate_sample_size, Distribution, GroupParams};
use crate::trial::run_trial;
use crate::types::constants::MIN_GROUPS;
use crate::types::{SimError, SimulationResult, TestKind};
use crate::utils::rng::substream;

pub use crate::utils::rng::seeded_rng;


// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Everything that fixes the data-generating process of a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Population family shared by every group
    pub distribution: Distribution,
    /// Per-group population parameters, in group order
    pub groups: Vec<GroupParams>,
    /// Observations per group
    pub sample_size: usize,
    /// Tests applied to each dataset, in reporting order
    pub tests: Vec<TestKind>,
}

impl SimulationConfig {
    /// Two-group configuration running every test
    pub fn two_group(distribution: Distribution, a: GroupParams, b: GroupParams, sample_size: usize) -> Self {
        Self {
            distribution,
            groups: vec![a, b],
            sample_size,
            tests: TestKind::ALL.to_vec(),
        }
    }

    pub fn with_tests(mut self, tests: &[TestKind]) -> Self {
        self.tests = tests.to_vec();
        self
    }

    /// Checks the configuration before any sampling happens
    pub fn validate(&self) -> Result<(), SimError> {
        if self.groups.len() < MIN_GROUPS {
            return Err(SimError::InvalidParameter(format!(
                "at least {} groups are required, got {}",
                MIN_GROUPS,
                self.groups.len()
            )));
        }
        for params in &self.groups {
            params.validate(self.distribution)?;
        }
        validate_sample_size(self.sample_size)?;

        if self.tests.is_empty() {
            return Err(SimError::InvalidParameter("at least one test must be requested".into()));
        }
        for (i, test) in self.tests.iter().enumerate() {
            if self.tests[..i].contains(test) {
                return Err(SimError::InvalidParameter(format!("{} is requested more than once", test)));
            }
            if !test.supports_groups(self.groups.len()) {
                return Err(SimError::GroupCount {
                    test: *test,
                    expected: test.group_requirement(),
                    found: self.groups.len(),
                });
            }
        }
        Ok(())
    }
}

pub fn validate_repetitions(repetitions: usize) -> Result<(), SimError> {
    if repetitions == 0 {
        return Err(SimError::InvalidParameter("repetitions must be positive".into()));
    }
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Drivers
// ------------------------------------------------------------------------------------------------

/// Runs `repetitions` trials on one advancing stream. All trials always run.
pub fn run_simulation<R: Rng + ?Sized>(
    config: &SimulationConfig,
    repetitions: usize,
    rng: &mut R,
) -> Result<SimulationResult, SimError> {
    config.validate()?;
    validate_repetitions(repetitions)?;
    log::debug!(
        "running {} trials: {:?}, n = {}, groups = {:?}",
        repetitions,
        config.distribution,
        config.sample_size,
        config.groups
    );

    let mut trials = Vec::with_capacity(repetitions);
    for _ in 0..repetitions {
        trials.push(run_trial(
            config.distribution,
            &config.groups,
            config.sample_size,
            &config.tests,
            rng,
        )?);
    }

    Ok(SimulationResult::new(config.tests.clone(), trials))
}

/// Runs `repetitions` trials across the rayon pool, trial `i` drawing from substream `(seed, i)`
pub fn run_simulation_parallel(
    config: &SimulationConfig,
    repetitions: usize,
    seed: u64,
) -> Result<SimulationResult, SimError> {
    config.validate()?;
    validate_repetitions(repetitions)?;

    let trials = (0..repetitions)
        .into_par_iter()
        .map(|index| {
            let mut rng = substream(seed, index as u64);
            run_trial(
                config.distribution,
                &config.groups,
                config.sample_size,
                &config.tests,
                &mut rng,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SimulationResult::new(config.tests.clone(), trials))
}
