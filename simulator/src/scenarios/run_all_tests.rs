use std::time::Instant;
use varsim::utils::logging;

use crate::config::ConfigError;
use crate::scenarios::utils::run_scenario;

/// Runs all scenarios sequentially
pub fn run_all_tests() -> Result<(), ConfigError> {
    let start_time = Instant::now();

    logging::log("SIMULATOR", "=== Starting All Tests Suite ===");
    logging::log("SIMULATOR", "This will run all simulation types sequentially");

    run_scenario(crate::scenarios::sim_simple::run_simple_simulation, "Simple Simulation")?;
    run_scenario(crate::scenarios::sim_sweep_scale_ratio::run_sweep_scale_ratio, "Scale Ratio Sweep")?;
    run_scenario(crate::scenarios::sim_sweep_sample_size::run_sweep_sample_size, "Sample Size Sweep")?;
    run_scenario(
        crate::scenarios::sim_sweep_mean_difference::run_sweep_mean_difference,
        "Mean Difference Sweep",
    )?;
    run_scenario(
        crate::scenarios::sim_sweep_exponential_sample_size::run_sweep_exponential_sample_size,
        "Exponential Sample Size Sweep",
    )?;

    let total_time = start_time.elapsed();
    logging::log("SIMULATOR", "=== All Tests Completed Successfully ===");
    logging::log("SIMULATOR", &format!("Total execution time: {:.2?}", total_time));

    println!("All tests completed successfully!");
    println!("Total execution time: {:.2?}", total_time);

    Ok(())
}
