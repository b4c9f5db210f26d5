pub mod sim_simple;
pub mod sim_sweep_exponential_sample_size;
pub mod sim_sweep_mean_difference;
pub mod sim_sweep_sample_size;
pub mod sim_sweep_scale_ratio;
pub mod run_all_tests;
pub mod sweep_runner;
pub mod utils;
