use chrono::Local;
use varsim::utils::logging;
use varsim::{run_simulation, run_simulation_parallel, seeded_rng, SimulationResult};

use crate::config::{Config, ConfigError};
use crate::scenarios::utils::{config_path, create_directories, setup_logging};
use crate::simulation_results::{data_dir, save_simulation_results};

const RESULTS_DIR: &str = "sim_simple";

/// Runs the simple simulation: one fixed configuration, raw p-values and rejection summaries
pub fn run_simple_simulation() -> Result<(), ConfigError> {
    run_simple_from(&config_path(RESULTS_DIR)).map(|_| ())
}

/// Runs the simple simulation from an explicit config file
pub fn run_simple_from(path: &str) -> Result<SimulationResult, ConfigError> {
    create_directories(RESULTS_DIR)?;
    setup_logging(RESULTS_DIR);

    let config = Config::load(path)?;
    let engine_config = config.simulation_config()?;
    let settings = &config.simulation_config;
    log_configuration(&config);

    println!("Running Simulation: {} trials", settings.repetitions);
    let result = if settings.parallel {
        run_simulation_parallel(&engine_config, settings.repetitions, settings.seed)?
    } else {
        run_simulation(&engine_config, settings.repetitions, &mut seeded_rng(settings.seed))?
    };

    log_summaries(&config, &result);
    save_simulation_results(&data_dir(RESULTS_DIR), &config, &result)?;

    Ok(result)
}

fn log_configuration(config: &Config) {
    let settings = &config.simulation_config;
    logging::log("SIMULATOR", "=== Simulation Configuration ===");
    logging::log("SIMULATOR", &format!("Start Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    logging::log("SIMULATOR", &format!("Family: {:?}", config.distribution_config.family));
    for (i, group) in config.groups.iter().enumerate() {
        logging::log("SIMULATOR", &format!("Group {}: mean {} sd {:?}", i + 1, group.mean, group.sd));
    }
    logging::log("SIMULATOR", &format!("Sample Size: {}", settings.sample_size));
    logging::log("SIMULATOR", &format!("Repetitions: {}", settings.repetitions));
    logging::log("SIMULATOR", &format!("Alpha: {}", settings.alpha));
    logging::log("SIMULATOR", &format!("Seed: {}", settings.seed));
    logging::log("SIMULATOR", "=============================");
}

fn log_summaries(config: &Config, result: &SimulationResult) {
    logging::log("SIMULATOR", "\n=== Simulation Statistics ===");
    for summary in result.summarize(config.simulation_config.alpha) {
        let rate = summary
            .proportion
            .map_or_else(|| "undefined".to_string(), |p| format!("{:.3}", p));
        let line = format!(
            "{}: rejected {}/{} (rate {}, {} undefined)",
            summary.test, summary.rejections, summary.defined, rate, summary.undefined
        );
        println!("{}", line);
        logging::log("SIMULATOR", &line);
    }
    logging::log("SIMULATOR", "===========================");
}
