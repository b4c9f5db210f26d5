//! Configuration loader and validator for the variance-test simulator.
//! Handles parsing, validation, and conversion of scenario files into engine configurations.

use serde::Deserialize;
use std::fs;
use thiserror::Error;
use varsim::types::constants::{DEFAULT_ALPHA, DEFAULT_REPETITIONS};
use varsim::{Distribution, GroupParams, SimError, SimulationConfig, SweepConfig, TestKind, VaryingParameter};

// ------------------------------------------------------------------------------------------------
// Main Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Configuration for a single fixed-parameter simulation.
///
/// This struct describes the data-generating process (family and per-group parameters)
/// and how many trials to run. It is also the base every sweep scenario starts from.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Population family shared by all groups
    pub distribution_config: DistributionConfig,
    /// Per-group population parameters, in group order
    pub groups: Vec<GroupConfig>,
    /// Sample size, repetitions, significance level and seed
    pub simulation_config: SimulationSettings,
}

/// Configuration for a sweep simulation: the base configuration plus the sweep definition.
#[derive(Debug, Deserialize, Clone)]
pub struct SweepFileConfig {
    pub distribution_config: DistributionConfig,
    pub groups: Vec<GroupConfig>,
    pub simulation_config: SimulationSettings,
    /// The varying parameter and its grid
    pub sweep: SweepSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DistributionConfig {
    /// `normal` or `exponential`
    pub family: Distribution,
}

/// Population parameters for one group.
#[derive(Debug, Deserialize, Clone)]
pub struct GroupConfig {
    /// Group mean (for Exponential this is also the standard deviation)
    pub mean: f64,
    /// Standard deviation, required for Normal and ignored for Exponential
    #[serde(default)]
    pub sd: Option<f64>,
}

/// Settings shared by every scenario.
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationSettings {
    /// Observations per group
    pub sample_size: usize,
    /// Trials per configuration
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    /// Significance level, a p-value below it counts as a rejection
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Seed of the random stream, fixed seeds make runs reproducible
    pub seed: u64,
    /// Tests to apply, in reporting order
    #[serde(default = "default_tests")]
    pub tests: Vec<TestKind>,
    /// Fan trials out over all cores using derived substreams
    #[serde(default)]
    pub parallel: bool,
}

/// Sweep definition: either an explicit grid or a start/step/count sequence.
#[derive(Debug, Deserialize, Clone)]
pub struct SweepSettings {
    pub parameter: VaryingParameter,
    /// Explicit grid values, in output order
    #[serde(default)]
    pub grid: Vec<f64>,
    /// First value of a generated grid
    #[serde(default)]
    pub start: Option<f64>,
    /// Increment of a generated grid
    #[serde(default)]
    pub step: Option<f64>,
    /// Number of values of a generated grid
    #[serde(default)]
    pub num_simulations: Option<usize>,
}

fn default_repetitions() -> usize {
    DEFAULT_REPETITIONS
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_tests() -> Vec<TestKind> {
    TestKind::ALL.to_vec()
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
    #[error("Rejected by the engine: {0}")]
    Engine(#[from] SimError),
    #[error("Failed to save results: {0}")]
    SaveError(String),
}

// Trait for common validation functionality
pub trait ValidateConfig {
    fn validate_common(&self) -> Result<(), ConfigError>;
    fn validate_sweep_specific(&self) -> Result<(), ConfigError>;

    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_common()?;
        self.validate_sweep_specific()?;
        Ok(())
    }
}

/// Builds the engine configuration and runs the engine's own checks on it
pub fn build_simulation_config(
    distribution_config: &DistributionConfig,
    groups: &[GroupConfig],
    simulation_config: &SimulationSettings,
) -> Result<SimulationConfig, ConfigError> {
    let family = distribution_config.family;
    let params = groups
        .iter()
        .enumerate()
        .map(|(i, group)| match family {
            Distribution::Normal => group
                .sd
                .map(|sd| GroupParams::normal(group.mean, sd))
                .ok_or_else(|| ConfigError::ValidationError(format!("Normal group {} needs an sd", i + 1))),
            Distribution::Exponential => Ok(GroupParams::exponential(group.mean)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let config = SimulationConfig {
        distribution: family,
        groups: params,
        sample_size: simulation_config.sample_size,
        tests: simulation_config.tests.clone(),
    };
    config.validate()?;
    Ok(config)
}

// Common validation logic
pub fn validate_common_fields(
    distribution_config: &DistributionConfig,
    groups: &[GroupConfig],
    simulation_config: &SimulationSettings,
) -> Result<(), ConfigError> {
    if simulation_config.repetitions == 0 {
        return Err(ConfigError::ValidationError("Repetitions must be positive".into()));
    }
    if !(simulation_config.alpha > 0.0 && simulation_config.alpha < 1.0) {
        return Err(ConfigError::ValidationError("Alpha must be between 0 and 1 (exclusive)".into()));
    }
    build_simulation_config(distribution_config, groups, simulation_config)?;
    Ok(())
}

/// Creates a sequence of `count` values starting at `start` with increment `step`
pub fn generate_f64_sequence(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + i as f64 * step).collect()
}

// ------------------------------------------------------------------------------------------------
// Configuration Implementation Methods
// ------------------------------------------------------------------------------------------------

impl ValidateConfig for Config {
    fn validate_common(&self) -> Result<(), ConfigError> {
        validate_common_fields(&self.distribution_config, &self.groups, &self.simulation_config)
    }

    fn validate_sweep_specific(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml(&config_str)
    }

    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        build_simulation_config(&self.distribution_config, &self.groups, &self.simulation_config)
    }
}

impl ValidateConfig for SweepFileConfig {
    fn validate_common(&self) -> Result<(), ConfigError> {
        validate_common_fields(&self.distribution_config, &self.groups, &self.simulation_config)
    }

    fn validate_sweep_specific(&self) -> Result<(), ConfigError> {
        let sweep = &self.sweep;
        let generated = sweep.start.is_some() || sweep.step.is_some() || sweep.num_simulations.is_some();
        if !sweep.grid.is_empty() && generated {
            return Err(ConfigError::ValidationError(
                "Set either an explicit grid or start/step/num_simulations, not both".into(),
            ));
        }
        if generated {
            match (sweep.start, sweep.step, sweep.num_simulations) {
                (Some(_), Some(step), Some(count)) => {
                    if step <= 0.0 {
                        return Err(ConfigError::ValidationError("Sweep step must be positive".into()));
                    }
                    if count == 0 {
                        return Err(ConfigError::ValidationError("Number of simulations must be positive".into()));
                    }
                }
                _ => {
                    return Err(ConfigError::ValidationError(
                        "A generated grid needs start, step and num_simulations".into(),
                    ))
                }
            }
        }
        // Every grid point is checked by the engine before any trial runs
        self.sweep_config()?;
        Ok(())
    }
}

impl SweepFileConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml(&config_str)
    }

    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: SweepFileConfig = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Grid values in sweep order
    pub fn grid(&self) -> Vec<f64> {
        match (self.sweep.start, self.sweep.step, self.sweep.num_simulations) {
            (Some(start), Some(step), Some(count)) if self.sweep.grid.is_empty() => {
                generate_f64_sequence(start, step, count)
            }
            _ => self.sweep.grid.clone(),
        }
    }

    /// The base configuration, as a plain single-simulation config
    pub fn base(&self) -> Config {
        Config {
            distribution_config: self.distribution_config.clone(),
            groups: self.groups.clone(),
            simulation_config: self.simulation_config.clone(),
        }
    }

    pub fn sweep_config(&self) -> Result<SweepConfig, ConfigError> {
        let base = build_simulation_config(&self.distribution_config, &self.groups, &self.simulation_config)?;
        let sweep = SweepConfig::new(base, self.sweep.parameter, self.grid(), self.simulation_config.repetitions)
            .with_alpha(self.simulation_config.alpha);
        sweep.validate()?;
        Ok(sweep)
    }
}

// ------------------------------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------------------------------
