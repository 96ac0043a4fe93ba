use derive_builder::Builder;
use tracing::{debug, info};

use crate::simulation::engine::{SimulationEngine, SimulationOutcome};
use crate::simulation::events::EventsManager;
use crate::simulation::scenario::Scenario;

/// Owns a scenario and runs it to completion. Subscribers registered on the
/// events manager before `run` observe every step of the simulation.
#[derive(Debug, Builder)]
#[builder(pattern = "owned")]
pub struct LocalController {
    scenario: Scenario,
    #[builder(default)]
    events: EventsManager,
}

impl LocalController {
    /// Runs the simulation and prints the crash report to stdout. The
    /// outcome is also returned so tests don't have to capture stdout.
    pub fn run(mut self) -> SimulationOutcome {
        for vehicle in &self.scenario.vehicles {
            vehicle.report_stats();
        }

        self.events.on_any(|event| debug!("{:?}", event));

        let engine = SimulationEngine::new(self.scenario, self.events);
        let outcome = engine.run();

        match outcome {
            SimulationOutcome::Crash { step, .. } => info!("Crash after {} steps", step),
            SimulationOutcome::FuelExhausted { step } => {
                info!("Both tanks empty after {} steps", step)
            }
            SimulationOutcome::StepLimitReached { step } => info!("Gave up after {} steps", step),
        }
        println!("{}", outcome_report(&outcome));

        outcome
    }
}

/// The one line of plain stdout the simulation is contracted to produce.
fn outcome_report(outcome: &SimulationOutcome) -> String {
    match outcome {
        SimulationOutcome::Crash { position, .. } => {
            format!("The cars crashed at point {}.", position)
        }
        SimulationOutcome::FuelExhausted { .. } | SimulationOutcome::StepLimitReached { .. } => {
            "The cars did not crash.".to_string()
        }
    }
}
