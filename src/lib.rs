pub mod types;
pub mod sampling;
pub mod variance_tests;
pub mod trial;
pub mod simulation;
pub mod sweep;
pub mod utils;

pub use sampling::{sample_dataset, sample_group, Distribution, GroupParams};
pub use simulation::{run_simulation, run_simulation_parallel, seeded_rng, SimulationConfig};
pub use sweep::{run_sweep, run_sweep_parallel, run_sweep_with_observer, SweepConfig, VaryingParameter};
pub use trial::run_trial;
pub use types::{SimError, SimulationResult, SweepPoint, SweepResult, TestKind, TestOutcome, TestResult, TrialOutcome};
