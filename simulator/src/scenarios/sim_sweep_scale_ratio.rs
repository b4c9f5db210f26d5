use varsim::VaryingParameter;

use crate::config::{ConfigError, SweepFileConfig};
use crate::scenarios::sweep_runner::SweepRunner;
use crate::scenarios::utils::config_path;

// Runs the scale ratio sweep
//
// Two Normal groups with equal means; the second group's standard deviation is the
// first group's times the grid value. Ratio 1 is the null, so the first point estimates
// the Type-I error rate and the rest trace a power curve for each test.
pub fn run_sweep_scale_ratio() -> Result<(), ConfigError> {
    SweepRunner::new(
        "Scale Ratio",
        "sim_sweep_scale_ratio",
        VaryingParameter::ScaleRatio,
        Box::new(|| SweepFileConfig::load(&config_path("sim_sweep_scale_ratio"))),
    )
    .run()
    .map(|_| ())
}
