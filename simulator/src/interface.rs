use std::io::{self, Write};

use crate::simulation_registry::get_registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationType {
    Simple,
    SweepScaleRatio,
    SweepSampleSize,
    SweepMeanDifference,
    SweepExponentialSampleSize,
    RunAllTests,
    Exit,
}

impl SimulationType {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" | "simple" => Some(SimulationType::Simple),
            "2" | "sweep_scale_ratio" => Some(SimulationType::SweepScaleRatio),
            "3" | "sweep_sample_size" => Some(SimulationType::SweepSampleSize),
            "4" | "sweep_mean_difference" => Some(SimulationType::SweepMeanDifference),
            "5" | "sweep_exponential_sample_size" => Some(SimulationType::SweepExponentialSampleSize),
            "6" | "all" => Some(SimulationType::RunAllTests),
            "0" | "exit" => Some(SimulationType::Exit),
            _ => None,
        }
    }
}

pub struct SimulatorInterface;

impl Default for SimulatorInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatorInterface {
    pub fn new() -> Self {
        Self
    }

    pub fn get_menu_text(&self) -> &'static str {
        "Available simulation types:\n  1. Simple simulation\n  2. Sweep scale ratio\n  3. Sweep sample size\n  4. Sweep mean difference\n  5. Sweep sample size (Exponential groups)\n  6. Run All Tests\n  0. Exit"
    }

    pub fn show_menu(&self) {
        println!("=== Variance Test Simulator ===");
        println!("{}", self.get_menu_text());
    }

    /// Reads one menu choice from stdin. `None` on unreadable or unknown input.
    pub fn get_user_choice(&self) -> Option<SimulationType> {
        print!("\nSelect simulation type (0-6): ");
        io::stdout().flush().ok()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).ok()?;

        SimulationType::from_input(&input)
    }

    /// Runs one scenario through the registry
    pub fn run(&self, simulation_type: SimulationType) -> Result<(), String> {
        log::info!("running scenario {:?}", simulation_type);
        let registry = get_registry();
        let entry = registry
            .get(&simulation_type)
            .ok_or_else(|| format!("No scenario registered for {:?}", simulation_type))?;
        (entry.run_fn)()?;
        println!("{} completed successfully!", entry.name);
        Ok(())
    }

    /// Shows the menu until a scenario ran or the user chose to exit
    pub fn run_interactive(&self) -> Result<(), String> {
        loop {
            self.show_menu();

            match self.get_user_choice() {
                Some(SimulationType::Exit) => {
                    println!("Exiting...");
                    break;
                }
                Some(simulation_type) => {
                    self.run(simulation_type)?;
                    break;
                }
                None => {
                    println!("Invalid choice. Please enter 1, 2, 3, 4, 5, 6, or 0 to exit.");
                }
            }
        }

        Ok(())
    }
}
