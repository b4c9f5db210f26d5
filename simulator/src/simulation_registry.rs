//! Central registry for all scenario types in the variance test simulator.
//! Maps each menu entry to its display name and execution logic.

use std::collections::HashMap;

use crate::scenarios::{
    run_all_tests::run_all_tests,
    sim_simple::run_simple_simulation,
    sim_sweep_exponential_sample_size::run_sweep_exponential_sample_size,
    sim_sweep_mean_difference::run_sweep_mean_difference,
    sim_sweep_sample_size::run_sweep_sample_size,
    sim_sweep_scale_ratio::run_sweep_scale_ratio,
};

use super::interface::SimulationType;

/// Registry entry for a scenario
pub struct ScenarioEntry {
    pub name: &'static str,
    pub run_fn: Box<dyn Fn() -> Result<(), String> + Send + Sync>,
}

/// Registry that holds all scenario entries
pub struct SimulationRegistry {
    simulations: HashMap<SimulationType, ScenarioEntry>,
}

impl Default for SimulationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationRegistry {
    pub fn new() -> Self {
        let mut simulations = HashMap::new();

        simulations.insert(SimulationType::Simple, ScenarioEntry {
            name: "Simple Simulation",
            run_fn: Box::new(|| {
                run_simple_simulation().map_err(|e| format!("Simple simulation failed: {}", e))
            }),
        });

        simulations.insert(SimulationType::SweepScaleRatio, ScenarioEntry {
            name: "Scale Ratio Sweep",
            run_fn: Box::new(|| {
                run_sweep_scale_ratio().map_err(|e| format!("Scale ratio sweep failed: {}", e))
            }),
        });

        simulations.insert(SimulationType::SweepSampleSize, ScenarioEntry {
            name: "Sample Size Sweep",
            run_fn: Box::new(|| {
                run_sweep_sample_size().map_err(|e| format!("Sample size sweep failed: {}", e))
            }),
        });

        simulations.insert(SimulationType::SweepMeanDifference, ScenarioEntry {
            name: "Mean Difference Sweep",
            run_fn: Box::new(|| {
                run_sweep_mean_difference().map_err(|e| format!("Mean difference sweep failed: {}", e))
            }),
        });

        simulations.insert(SimulationType::SweepExponentialSampleSize, ScenarioEntry {
            name: "Exponential Sample Size Sweep",
            run_fn: Box::new(|| {
                run_sweep_exponential_sample_size()
                    .map_err(|e| format!("Exponential sample size sweep failed: {}", e))
            }),
        });

        simulations.insert(SimulationType::RunAllTests, ScenarioEntry {
            name: "All Tests",
            run_fn: Box::new(|| run_all_tests().map_err(|e| format!("All tests failed: {}", e))),
        });

        Self { simulations }
    }

    pub fn get(&self, simulation_type: &SimulationType) -> Option<&ScenarioEntry> {
        self.simulations.get(simulation_type)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.simulations.values().map(|entry| entry.name).collect();
        names.sort_unstable();
        names
    }
}

// Global registry instance
lazy_static::lazy_static! {
    static ref REGISTRY: SimulationRegistry = SimulationRegistry::new();
}

/// Get a reference to the global registry
pub fn get_registry() -> &'static SimulationRegistry {
    &REGISTRY
}
