use serde::{Deserialize, Serialize};

use super::constants::{MIN_GROUPS, MIN_GROUP_SIZE};
use super::SimError;

/// The observations drawn for one group. The group label is its position in the [`Dataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSample")]
pub struct Sample {
    values: Vec<f64>,
}

// Deserialized shapes, checked through the constructors
#[derive(Deserialize)]
struct RawSample {
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawDataset {
    groups: Vec<Sample>,
}

impl TryFrom<RawSample> for Sample {
    type Error = SimError;

    fn try_from(raw: RawSample) -> Result<Self, Self::Error> {
        Sample::new(raw.values)
    }
}

impl TryFrom<RawDataset> for Dataset {
    type Error = SimError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        Dataset::new(raw.groups)
    }
}

impl Sample {
    /// Creates a sample, rejecting groups too small to estimate a variance from
    pub fn new(values: Vec<f64>) -> Result<Self, SimError> {
        if values.len() < MIN_GROUP_SIZE {
            return Err(SimError::InvalidParameter(format!(
                "a sample needs at least {} observations, got {}",
                MIN_GROUP_SIZE,
                values.len()
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, a sample holds at least two observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Within-group degrees of freedom, n - 1
    pub fn degrees_of_freedom(&self) -> f64 {
        (self.values.len() - 1) as f64
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// The groups generated for a single trial.
///
/// The standard design compares two groups; Bartlett, Levene and Brown-Forsythe
/// accept any number of groups from two upwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    groups: Vec<Sample>,
}

impl Dataset {
    pub fn new(groups: Vec<Sample>) -> Result<Self, SimError> {
        if groups.len() < MIN_GROUPS {
            return Err(SimError::InvalidParameter(format!(
                "a dataset needs at least {} groups, got {}",
                MIN_GROUPS,
                groups.len()
            )));
        }
        Ok(Self { groups })
    }

    /// Builds the standard two-group dataset
    pub fn pair(a: Sample, b: Sample) -> Self {
        Self { groups: vec![a, b] }
    }

    /// Convenience constructor from raw group values, used heavily by tests
    pub fn from_values(groups: Vec<Vec<f64>>) -> Result<Self, SimError> {
        let samples = groups
            .into_iter()
            .map(Sample::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(samples)
    }

    pub fn groups(&self) -> &[Sample] {
        &self.groups
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total number of observations across all groups (N)
    pub fn total_observations(&self) -> usize {
        self.groups.iter().map(Sample::len).sum()
    }
}
