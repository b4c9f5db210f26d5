use std::env;
use std::process::ExitCode;

use simulator::{SimulationType, SimulatorInterface};

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Runs the scenario named by the first argument, or shows the menu when there is none
fn main() -> ExitCode {
    env_logger::init();

    let interface = SimulatorInterface::new();
    let outcome = match env::args().nth(1) {
        Some(arg) => match SimulationType::from_input(&arg) {
            Some(SimulationType::Exit) => Ok(()),
            Some(simulation_type) => interface.run(simulation_type),
            None => Err(format!("Unknown scenario '{}'\n{}", arg, interface.get_menu_text())),
        },
        None => interface.run_interactive(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
