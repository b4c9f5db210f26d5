//! JSON export of engine results for the plotting and report tools.

use std::fs;

use chrono::Local;
use serde_json::{json, Map, Value};
use varsim::utils::logging;
use varsim::{SimulationResult, SweepResult};

use crate::config::{Config, ConfigError, SimulationSettings, SweepFileConfig};

pub const RESULTS_ROOT: &str = "simulator/results";

/// Directory holding the JSON data files of one scenario
pub fn data_dir(results_dir: &str) -> String {
    format!("{}/{}/data", RESULTS_ROOT, results_dir)
}

fn parameters_json(config: &Config) -> Value {
    let settings: &SimulationSettings = &config.simulation_config;
    json!({
        "family": config.distribution_config.family,
        "groups": config.groups.iter().map(|group| json!({ "mean": group.mean, "sd": group.sd })).collect::<Vec<_>>(),
        "sample_size": settings.sample_size,
        "repetitions": settings.repetitions,
        "alpha": settings.alpha,
        "seed": settings.seed,
        "tests": settings.tests,
        "parallel": settings.parallel,
    })
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, ConfigError> {
    serde_json::to_value(value).map_err(|e| ConfigError::SaveError(e.to_string()))
}

fn write_json(path: &str, value: &Value) -> Result<(), ConfigError> {
    let contents = serde_json::to_string_pretty(value).map_err(|e| ConfigError::SaveError(e.to_string()))?;
    fs::write(path, contents).map_err(|e| ConfigError::SaveError(format!("{}: {}", path, e)))
}

// ------------------------------------------------------------------------------------------------
// Single Configuration
// ------------------------------------------------------------------------------------------------

/// Parameters, rejection summaries and the raw per-trial p-values of each test
pub fn simulation_json(config: &Config, result: &SimulationResult) -> Result<Value, ConfigError> {
    let alpha = config.simulation_config.alpha;

    let mut p_values = Map::new();
    let mut undefined = Map::new();
    for &test in result.tests() {
        p_values.insert(test.name().to_string(), to_value(&result.raw_p_values(test))?);
        undefined.insert(test.name().to_string(), json!(result.undefined_count(test)));
    }

    Ok(json!({
        "generated_at": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "parameters": parameters_json(config),
        "results": {
            "repetitions": result.repetitions(),
            "summaries": to_value(&result.summarize(alpha))?,
            "undefined": Value::Object(undefined),
        },
        "p_values": Value::Object(p_values),
    }))
}

/// Writes `simulation_results.json` into `data_dir`, returning the file path
pub fn save_simulation_results(data_dir: &str, config: &Config, result: &SimulationResult) -> Result<String, ConfigError> {
    fs::create_dir_all(data_dir).map_err(|e| ConfigError::SaveError(e.to_string()))?;

    let file = format!("{}/simulation_results.json", data_dir);
    write_json(&file, &simulation_json(config, result)?)?;
    logging::log("SIMULATOR", &format!("Saved simulation results to {}", file));
    Ok(file)
}

// ------------------------------------------------------------------------------------------------
// Sweeps
// ------------------------------------------------------------------------------------------------

/// Sweep summary with one rejection curve per test, plus the full per-point summaries
pub fn sweep_json(config: &SweepFileConfig, result: &SweepResult) -> Result<Value, ConfigError> {
    let mut sweep_summary = Map::new();
    sweep_summary.insert("parameter".to_string(), json!(result.parameter.name()));
    sweep_summary.insert("num_simulations".to_string(), json!(result.points.len()));
    sweep_summary.insert("alpha".to_string(), json!(result.alpha));
    sweep_summary.insert("repetitions".to_string(), json!(result.repetitions));
    sweep_summary.insert(result.parameter.name().to_string(), json!(result.parameter_values()));

    let mut rejection_rates = Map::new();
    for &test in &config.simulation_config.tests {
        let curve: Vec<Option<f64>> = result.rejection_curve(test).into_iter().map(|(_, p)| p).collect();
        rejection_rates.insert(test.name().to_string(), json!(curve));
    }
    sweep_summary.insert("rejection_rates".to_string(), Value::Object(rejection_rates));

    Ok(json!({
        "generated_at": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "parameters": parameters_json(&config.base()),
        "sweep_summary": Value::Object(sweep_summary),
        "individual_results": to_value(&result.points)?,
    }))
}

/// Writes `sweep_results.json` into `data_dir`, returning the file path
pub fn save_sweep_results(data_dir: &str, config: &SweepFileConfig, result: &SweepResult) -> Result<String, ConfigError> {
    fs::create_dir_all(data_dir).map_err(|e| ConfigError::SaveError(e.to_string()))?;

    let file = format!("{}/sweep_results.json", data_dir);
    write_json(&file, &sweep_json(config, result)?)?;
    logging::log("SIMULATOR", &format!("Saved combined sweep results to {}", file));
    Ok(file)
}
