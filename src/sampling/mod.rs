//! Synthetic group generation for the supported population families.
//! Every draw comes from the generator passed in; there is no hidden random state.

use rand::Rng;
use rand_distr::{Distribution as _, Exp, Normal};
use serde::{Deserialize, Serialize};

use crate::types::constants::{MAX_GROUP_SIZE, MIN_GROUP_SIZE};
use crate::types::{Dataset, Sample, SimError};


// ------------------------------------------------------------------------------------------------
// Data Structures
// ------------------------------------------------------------------------------------------------

/// Population family the groups are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Normal(mean, sd)
    Normal,
    /// Exponential with rate 1 / mean, so the variance is mean²
    Exponential,
}

/// Population parameters for one group.
///
/// `sd` is only read for the Normal family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupParams {
    pub mean: f64,
    #[serde(default)]
    pub sd: f64,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl GroupParams {
    pub fn normal(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    pub fn exponential(mean: f64) -> Self {
        Self { mean, sd: mean }
    }

    /// The parameter that controls spread: sd for Normal, mean for Exponential
    pub fn scale(&self, distribution: Distribution) -> f64 {
        match distribution {
            Distribution::Normal => self.sd,
            Distribution::Exponential => self.mean,
        }
    }

    /// Returns a copy whose spread parameter is `scale`
    pub fn with_scale(&self, distribution: Distribution, scale: f64) -> Self {
        match distribution {
            Distribution::Normal => Self { mean: self.mean, sd: scale },
            Distribution::Exponential => Self::exponential(scale),
        }
    }

    /// Population variance implied by the parameters
    pub fn variance(&self, distribution: Distribution) -> f64 {
        let scale = self.scale(distribution);
        scale * scale
    }

    /// Rejects parameters the family cannot be built from
    pub fn validate(&self, distribution: Distribution) -> Result<(), SimError> {
        match distribution {
            Distribution::Normal => {
                if !self.mean.is_finite() {
                    return Err(SimError::InvalidParameter(format!("Normal mean must be finite, got {}", self.mean)));
                }
                if !(self.sd.is_finite() && self.sd > 0.0) {
                    return Err(SimError::InvalidParameter(format!(
                        "Normal standard deviation must be positive, got {}",
                        self.sd
                    )));
                }
            }
            Distribution::Exponential => {
                if !(self.mean.is_finite() && self.mean > 0.0) {
                    return Err(SimError::InvalidParameter(format!(
                        "Exponential mean must be positive, got {}",
                        self.mean
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Rejects group sizes without positive within-group degrees of freedom
pub fn validate_sample_size(n: usize) -> Result<(), SimError> {
    if n < MIN_GROUP_SIZE {
        return Err(SimError::InvalidParameter(format!(
            "Sample size must be at least {}, got {}",
            MIN_GROUP_SIZE, n
        )));
    }
    if n > MAX_GROUP_SIZE {
        return Err(SimError::InvalidParameter(format!(
            "Sample size must be at most {}, got {}",
            MAX_GROUP_SIZE, n
        )));
    }
    Ok(())
}

/// Draws `n` i.i.d. observations for one group
pub fn sample_group<R: Rng + ?Sized>(
    distribution: Distribution,
    params: &GroupParams,
    n: usize,
    rng: &mut R,
) -> Result<Sample, SimError> {
    validate_sample_size(n)?;
    params.validate(distribution)?;

    let values: Vec<f64> = match distribution {
        Distribution::Normal => {
            let normal = Normal::new(params.mean, params.sd)
                .map_err(|e| SimError::Distribution(e.to_string()))?;
            normal.sample_iter(&mut *rng).take(n).collect()
        }
        Distribution::Exponential => {
            let exp = Exp::new(1.0 / params.mean)
                .map_err(|e| SimError::Distribution(e.to_string()))?;
            exp.sample_iter(&mut *rng).take(n).collect()
        }
    };

    Sample::new(values)
}

/// Draws every group in order from the same generator
pub fn sample_dataset<R: Rng + ?Sized>(
    distribution: Distribution,
    groups: &[GroupParams],
    n: usize,
    rng: &mut R,
) -> Result<Dataset, SimError> {
    let samples = groups
        .iter()
        .map(|params| sample_group(distribution, params, n, rng))
        .collect::<Result<Vec<_>, _>>()?;
    Dataset::new(samples)
}
