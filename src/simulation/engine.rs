use tracing::info;

use crate::simulation::events::{EventsManager, VehicleMoved, VehicleStalled, VehiclesCrashed};
use crate::simulation::geometry::Point;
use crate::simulation::scenario::Scenario;
use crate::simulation::vehicles::{Advance, Vehicle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationOutcome {
    /// Both vehicles occupy the same coordinate.
    Crash { position: Point, step: u64 },
    /// Both tanks ran dry without the positions ever coinciding.
    FuelExhausted { step: u64 },
    /// The configured step bound was hit first. Without a bound the loop
    /// never terminates when one vehicle keeps fuel but zero velocity and
    /// is never caught at the other vehicle's position.
    StepLimitReached { step: u64 },
}

/// Advances both vehicles in lockstep until a termination condition holds.
pub struct SimulationEngine {
    vehicles: [Vehicle; 2],
    events: EventsManager,
    max_steps: Option<u64>,
    step: u64,
}

impl SimulationEngine {
    pub fn new(scenario: Scenario, events: EventsManager) -> Self {
        SimulationEngine {
            vehicles: scenario.vehicles,
            events,
            max_steps: scenario.max_steps,
            step: 0,
        }
    }

    pub fn run(mut self) -> SimulationOutcome {
        loop {
            // exact equality on both coordinates, no tolerance
            if self.vehicles[0].position() == self.vehicles[1].position() {
                let position = self.vehicles[0].position();
                self.events.publish_event(&VehiclesCrashed {
                    step: self.step,
                    position,
                });
                return SimulationOutcome::Crash {
                    position,
                    step: self.step,
                };
            }

            if self.vehicles.iter().all(Vehicle::is_tank_empty) {
                return SimulationOutcome::FuelExhausted { step: self.step };
            }

            if let Some(max_steps) = self.max_steps {
                if self.step >= max_steps {
                    info!("Reached the step limit of {} steps", max_steps);
                    return SimulationOutcome::StepLimitReached { step: self.step };
                }
            }

            self.step += 1;
            for i in 0..self.vehicles.len() {
                self.advance_vehicle(i);
            }
        }
    }

    fn advance_vehicle(&mut self, index: usize) {
        let was_empty = self.vehicles[index].is_tank_empty();
        let vehicle = &mut self.vehicles[index];

        match vehicle.advance() {
            Advance::Moved => {
                let event = VehicleMoved {
                    step: self.step,
                    model: vehicle.model().to_string(),
                    position: vehicle.position(),
                    fuel: vehicle.fuel(),
                };
                self.events.publish_event(&event);
            }
            Advance::Stalled if !was_empty => {
                let event = VehicleStalled {
                    step: self.step,
                    model: vehicle.model().to_string(),
                    position: vehicle.position(),
                };
                self.events.publish_event(&event);
            }
            // repeated stalls of a dry vehicle and idle vehicles stay quiet
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::Config;

    fn engine_for(config: &Config) -> SimulationEngine {
        let scenario = Scenario::load(config).unwrap();
        SimulationEngine::new(scenario, EventsManager::new())
    }

    #[test]
    fn test_crash_after_two_steps() {
        let outcome = engine_for(&Config::default()).run();
        assert_eq!(
            outcome,
            SimulationOutcome::Crash {
                position: Point::new(4.0, 4.0),
                step: 2,
            }
        );
    }

    #[test]
    fn test_no_crash_runs_both_tanks_dry() {
        let mut config = Config::default();
        config.vehicles[1].initial_position = Point::new(-2.0, 1.0);

        let outcome = engine_for(&config).run();
        // the Rabbit covers sqrt(8) km per step at 5 km/L and stalls on
        // advance 133, long after the Corolla
        assert_eq!(outcome, SimulationOutcome::FuelExhausted { step: 133 });
    }

    #[test]
    fn test_immediate_crash_at_identical_start() {
        let mut config = Config::default();
        config.vehicles[1].initial_position = config.vehicles[0].initial_position;

        let outcome = engine_for(&config).run();
        assert_eq!(
            outcome,
            SimulationOutcome::Crash {
                position: Point::new(0.0, 0.0),
                step: 0,
            }
        );
    }

    #[test]
    fn test_step_limit_stops_zero_velocity_standoff() {
        let mut config = Config::default();
        // a full tank and zero velocity never report empty, so without the
        // bound this loop would spin forever
        config.vehicles[1].velocity = Point::ZERO;
        config.vehicles[1].initial_position = Point::new(-100.0, -100.0);
        config.simulation.max_steps = Some(200);

        let outcome = engine_for(&config).run();
        assert_eq!(outcome, SimulationOutcome::StepLimitReached { step: 200 });
    }

    #[test]
    fn test_both_tanks_empty_before_any_step() {
        let mut config = Config::default();
        config.vehicles[0].tank_state = crate::simulation::vehicles::FuelTankState::Empty;
        config.vehicles[1].tank_state = crate::simulation::vehicles::FuelTankState::Empty;

        let outcome = engine_for(&config).run();
        assert_eq!(outcome, SimulationOutcome::FuelExhausted { step: 0 });
    }
}
