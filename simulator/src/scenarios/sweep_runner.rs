use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use varsim::utils::logging;
use varsim::{run_sweep_parallel, run_sweep_with_observer, seeded_rng, SweepPoint, SweepResult, VaryingParameter};

use crate::config::{ConfigError, SweepFileConfig};
use crate::scenarios::utils::{create_directories, setup_logging};
use crate::simulation_results::{data_dir, save_sweep_results};

type ConfigLoader = Box<dyn Fn() -> Result<SweepFileConfig, ConfigError>>;

/// Generic sweep runner shared by every sweep scenario
pub struct SweepRunner {
    sweep_name: String,
    results_dir: String,
    parameter: VaryingParameter,
    config_loader: ConfigLoader,
}

impl SweepRunner {
    pub fn new(sweep_name: &str, results_dir: &str, parameter: VaryingParameter, config_loader: ConfigLoader) -> Self {
        Self {
            sweep_name: sweep_name.to_string(),
            results_dir: results_dir.to_string(),
            parameter,
            config_loader,
        }
    }

    /// Runs the complete sweep
    pub fn run(&self) -> Result<SweepResult, ConfigError> {
        create_directories(&self.results_dir)?;
        setup_logging(&self.results_dir);

        let file_config = (self.config_loader)()?;
        if file_config.sweep.parameter != self.parameter {
            return Err(ConfigError::ValidationError(format!(
                "Sweep '{}' varies {}, but its config varies {}",
                self.sweep_name, self.parameter, file_config.sweep.parameter
            )));
        }
        let result = self.execute(&file_config)?;

        save_sweep_results(&data_dir(&self.results_dir), &file_config, &result)?;

        logging::log("SIMULATOR", "=== Sweep Simulation Complete ===");
        logging::log("SIMULATOR", &format!("Total simulations completed: {}", result.points.len()));

        Ok(result)
    }

    /// Runs the sweep described by `file_config`, logging every grid point
    pub fn execute(&self, file_config: &SweepFileConfig) -> Result<SweepResult, ConfigError> {
        let sweep = file_config.sweep_config()?;
        let settings = &file_config.simulation_config;

        self.log_sweep_start(file_config);
        println!("Running Sweep: {}", self.sweep_name);

        let total = sweep.grid.len();
        let progress_bar = self.create_progress_bar(total);

        let result = if settings.parallel {
            progress_bar.set_message(format!("{} points in parallel", total));
            let result = run_sweep_parallel(&sweep, settings.seed)?;
            // Points finish out of order, so they are logged once all are reduced
            for (index, point) in result.points.iter().enumerate() {
                self.log_point(index, total, point);
                progress_bar.inc(1);
            }
            result
        } else {
            let mut rng = seeded_rng(settings.seed);
            run_sweep_with_observer(&sweep, &mut rng, |index, point| {
                self.log_point(index, total, point);
                progress_bar.inc(1);
                progress_bar.set_message(self.format_progress_message(index, total, point.value));
            })?
        };

        progress_bar.finish_with_message(format!("{} simulations with {}", total, self.parameter));
        println!("Sweep simulation complete");
        Ok(result)
    }

    /// Creates a progress bar for the sweep
    fn create_progress_bar(&self, num_simulations: usize) -> ProgressBar {
        let progress_bar = ProgressBar::new(num_simulations as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("+>-");
        progress_bar.set_style(style);
        progress_bar
    }

    fn log_sweep_start(&self, config: &SweepFileConfig) {
        let settings = &config.simulation_config;
        logging::log("SIMULATOR", &format!("=== Sweep {} Simulation ===", self.sweep_name));
        logging::log("SIMULATOR", &format!("Start Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
        logging::log("SIMULATOR", &format!("Family: {:?}", config.distribution_config.family));
        for (i, group) in config.groups.iter().enumerate() {
            logging::log("SIMULATOR", &format!("Group {}: mean {} sd {:?}", i + 1, group.mean, group.sd));
        }
        logging::log("SIMULATOR", &format!("Sample Size: {}", settings.sample_size));
        logging::log("SIMULATOR", &format!("Repetitions: {}", settings.repetitions));
        logging::log("SIMULATOR", &format!("Alpha: {}", settings.alpha));
        logging::log("SIMULATOR", &format!("Seed: {}", settings.seed));
        logging::log("SIMULATOR", &format!("Parallel: {}", settings.parallel));
        logging::log("SIMULATOR", &format!("{} values: {:?}", self.parameter, config.grid()));
        logging::log("SIMULATOR", "================================");
    }

    fn log_point(&self, index: usize, total: usize, point: &SweepPoint) {
        logging::log("SIMULATOR", &self.format_progress_message(index, total, point.value));
        for summary in &point.summaries {
            let rate = summary
                .proportion
                .map_or_else(|| "undefined".to_string(), |p| format!("{:.3}", p));
            logging::log(
                "SIMULATOR",
                &format!("  {}: rejection rate {} ({} undefined)", summary.test, rate, summary.undefined),
            );
        }
    }

    fn format_progress_message(&self, index: usize, total: usize, value: f64) -> String {
        format!("Simulation {}/{} with {}: {}", index + 1, total, self.parameter, value)
    }
}
