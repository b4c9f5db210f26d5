//! Parameter sweeps: one varying parameter across an ordered grid, each grid
//! point reduced to a rejection proportion per test.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sampling::{Distribution, GroupParams};
use crate::simulation::{run_simulation, run_simulation_parallel, validate_repetitions, SimulationConfig};
use crate::types::constants::{DEFAULT_ALPHA, MAX_GROUP_SIZE, MIN_GROUP_SIZE};
use crate::types::{SimError, SimulationResult, SweepPoint, SweepResult};
use crate::utils::rng::derive_seed;

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Varying Parameter
// ------------------------------------------------------------------------------------------------

/// The configuration parameter a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaryingParameter {
    /// Scale of the last group as a multiple of the first group's scale
    /// (standard deviation for Normal, mean for Exponential)
    ScaleRatio,
    /// Observations per group
    SampleSize,
    /// Mean of the last group minus the mean of the first group
    MeanDifference,
}

impl VaryingParameter {
    pub fn name(&self) -> &'static str {
        match self {
            VaryingParameter::ScaleRatio => "scale_ratio",
            VaryingParameter::SampleSize => "sample_size",
            VaryingParameter::MeanDifference => "mean_difference",
        }
    }

    /// Substitutes `value` into a copy of `base`
    pub fn apply(&self, base: &SimulationConfig, value: f64) -> Result<SimulationConfig, SimError> {
        if !value.is_finite() {
            return Err(SimError::InvalidParameter(format!("{} grid value must be finite, got {}", self, value)));
        }
        let mut config = base.clone();
        let distribution = config.distribution;
        let (first, last) = match (config.groups.first().copied(), config.groups.len()) {
            (Some(first), len) if len >= 2 => (first, len - 1),
            _ => {
                return Err(SimError::InvalidParameter(
                    "a sweep needs a base configuration with at least two groups".into(),
                ))
            }
        };

        match self {
            VaryingParameter::ScaleRatio => {
                if value <= 0.0 {
                    return Err(SimError::InvalidParameter(format!("scale ratio must be positive, got {}", value)));
                }
                let scale = first.scale(distribution) * value;
                config.groups[last] = config.groups[last].with_scale(distribution, scale);
            }
            VaryingParameter::SampleSize => {
                if value < MIN_GROUP_SIZE as f64 || value > MAX_GROUP_SIZE as f64 || value.fract() != 0.0 {
                    return Err(SimError::InvalidParameter(format!(
                        "sample size must be an integer between {} and {}, got {}",
                        MIN_GROUP_SIZE, MAX_GROUP_SIZE, value
                    )));
                }
                config.sample_size = value as usize;
            }
            VaryingParameter::MeanDifference => {
                let mean = first.mean + value;
                config.groups[last] = match distribution {
                    Distribution::Normal => GroupParams::normal(mean, config.groups[last].sd),
                    Distribution::Exponential => GroupParams::exponential(mean),
                };
            }
        }
        Ok(config)
    }
}

impl fmt::Display for VaryingParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ------------------------------------------------------------------------------------------------
// Sweep Configuration
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Configuration every grid point starts from
    pub base: SimulationConfig,
    pub parameter: VaryingParameter,
    /// Values substituted for `parameter`, in output order
    pub grid: Vec<f64>,
    /// Trials per grid point
    pub repetitions: usize,
    /// Significance level, p < alpha counts as a rejection
    pub alpha: f64,
}

impl SweepConfig {
    pub fn new(base: SimulationConfig, parameter: VaryingParameter, grid: Vec<f64>, repetitions: usize) -> Self {
        Self {
            base,
            parameter,
            grid,
            repetitions,
            alpha: DEFAULT_ALPHA,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// The validated configuration for every grid point, in grid order
    pub fn point_configs(&self) -> Result<Vec<SimulationConfig>, SimError> {
        validate_alpha(self.alpha)?;
        validate_repetitions(self.repetitions)?;
        if self.grid.is_empty() {
            return Err(SimError::InvalidParameter("sweep grid must not be empty".into()));
        }
        self.grid
            .iter()
            .map(|&value| {
                let config = self.parameter.apply(&self.base, value)?;
                config.validate()?;
                Ok(config)
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.point_configs().map(|_| ())
    }
}

pub fn validate_alpha(alpha: f64) -> Result<(), SimError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(SimError::InvalidParameter(format!("alpha must lie in (0, 1), got {}", alpha)));
    }
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Sweep Drivers
// ------------------------------------------------------------------------------------------------

/// Reduces one grid point's simulation to its rejection summaries
pub fn reduce(value: f64, result: &SimulationResult, alpha: f64) -> SweepPoint {
    SweepPoint {
        value,
        summaries: result.summarize(alpha),
    }
}

/// Runs every grid point in order on one advancing stream
pub fn run_sweep<R: Rng + ?Sized>(sweep: &SweepConfig, rng: &mut R) -> Result<SweepResult, SimError> {
    run_sweep_with_observer(sweep, rng, |_, _| {})
}

/// As [`run_sweep`], calling `observer(index, point)` once each grid point is reduced
pub fn run_sweep_with_observer<R, F>(sweep: &SweepConfig, rng: &mut R, mut observer: F) -> Result<SweepResult, SimError>
where
    R: Rng + ?Sized,
    F: FnMut(usize, &SweepPoint),
{
    let configs = sweep.point_configs()?;

    let mut points = Vec::with_capacity(configs.len());
    for (index, (config, &value)) in configs.iter().zip(&sweep.grid).enumerate() {
        let result = run_simulation(config, sweep.repetitions, rng)?;
        let point = reduce(value, &result, sweep.alpha);
        log::info!(
            "sweep point {}/{}: {} = {}",
            index + 1,
            sweep.grid.len(),
            sweep.parameter,
            value
        );
        observer(index, &point);
        points.push(point);
    }

    Ok(SweepResult {
        parameter: sweep.parameter,
        alpha: sweep.alpha,
        repetitions: sweep.repetitions,
        points,
    })
}

/// Fans grid points and their trials out across the rayon pool.
///
/// Grid point `g` runs the parallel driver with seed `derive_seed(seed, g)`.
pub fn run_sweep_parallel(sweep: &SweepConfig, seed: u64) -> Result<SweepResult, SimError> {
    let configs = sweep.point_configs()?;

    let points = configs
        .par_iter()
        .zip(sweep.grid.par_iter())
        .enumerate()
        .map(|(index, (config, &value))| {
            let result = run_simulation_parallel(config, sweep.repetitions, derive_seed(seed, index as u64))?;
            Ok(reduce(value, &result, sweep.alpha))
        })
        .collect::<Result<Vec<_>, SimError>>()?;

    Ok(SweepResult {
        parameter: sweep.parameter,
        alpha: sweep.alpha,
        repetitions: sweep.repetitions,
        points,
    })
}
