use std::env;
use std::fs;
use std::time::Instant;

use varsim::utils::logging;

use crate::config::ConfigError;
use crate::simulation_results::RESULTS_ROOT;

/// Scenario configuration file shipped with the simulator
pub fn config_path(scenario: &str) -> String {
    format!("simulator/src/scenarios/configs/{}.toml", scenario)
}

/// Creates the results, data and figures directories of a scenario
pub fn create_directories(results_dir: &str) -> Result<(), ConfigError> {
    for sub in ["", "/data", "/figs"] {
        let path = format!("{}/{}{}", RESULTS_ROOT, results_dir, sub);
        fs::create_dir_all(&path).map_err(|e| ConfigError::SaveError(format!("Failed to create {}: {}", path, e)))?;
    }
    Ok(())
}

/// Sets up logging if ENABLE_LOGS environment variable is set
pub fn setup_logging(results_dir: &str) {
    if env::var("ENABLE_LOGS").is_ok() {
        // Delete existing log file if it exists
        let log_path = format!("{}/{}/simulation.log", RESULTS_ROOT, results_dir);
        if let Err(e) = fs::remove_file(&log_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                eprintln!("Error deleting log file: {}", e);
            }
        }

        // Initialize logging with scenario-specific log file
        env::set_var("VARSIM_LOGGING", "true");
        env::set_var("VARSIM_LOG_TO_FILE", "true");
        env::set_var("VARSIM_LOG_FILE", log_path);
        logging::init_logging();
    }
}

/// Runs a scenario, logging its start, completion and duration
pub fn run_scenario<F>(simulation_fn: F, simulation_name: &str) -> Result<(), ConfigError>
where
    F: FnOnce() -> Result<(), ConfigError>,
{
    logging::log("SIMULATOR", &format!("=== Running {} ===", simulation_name));
    let start = Instant::now();

    simulation_fn().map_err(|e| ConfigError::ValidationError(format!("{} failed: {}", simulation_name, e)))?;

    logging::log(
        "SIMULATOR",
        &format!("{} completed successfully in {:.2?}", simulation_name, start.elapsed()),
    );
    Ok(())
}
