use varsim::VaryingParameter;

use crate::config::{ConfigError, SweepFileConfig};
use crate::scenarios::sweep_runner::SweepRunner;
use crate::scenarios::utils::config_path;

// Runs the mean difference sweep
//
// Equal spreads, shifting location of the last group. Variance tests should ignore
// the shift, so every point estimates a Type-I error rate.
pub fn run_sweep_mean_difference() -> Result<(), ConfigError> {
    SweepRunner::new(
        "Mean Difference",
        "sim_sweep_mean_difference",
        VaryingParameter::MeanDifference,
        Box::new(|| SweepFileConfig::load(&config_path("sim_sweep_mean_difference"))),
    )
    .run()
    .map(|_| ())
}
