use varsim::VaryingParameter;

use crate::config::{ConfigError, SweepFileConfig};
use crate::scenarios::sweep_runner::SweepRunner;
use crate::scenarios::utils::config_path;

// Runs the sample size sweep
//
// Fixed unequal spreads, growing per-group sample size: power as a function of n.
pub fn run_sweep_sample_size() -> Result<(), ConfigError> {
    SweepRunner::new(
        "Sample Size",
        "sim_sweep_sample_size",
        VaryingParameter::SampleSize,
        Box::new(|| SweepFileConfig::load(&config_path("sim_sweep_sample_size"))),
    )
    .run()
    .map(|_| ())
}
