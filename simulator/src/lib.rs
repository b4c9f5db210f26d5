pub mod config;
pub mod interface;
pub mod scenarios;
pub mod simulation_registry;
pub mod simulation_results;

pub use config::{Config, ConfigError, SweepFileConfig};
pub use interface::{SimulationType, SimulatorInterface};
