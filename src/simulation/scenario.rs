use thiserror::Error;
use tracing::info;

use crate::simulation::config::{Config, VehicleConfig};
use crate::simulation::vehicles::{Vehicle, VehicleError};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("expected exactly 2 vehicles in the config, got {0}")]
    WrongVehicleCount(usize),
    #[error(transparent)]
    Vehicle(#[from] VehicleError),
}

/// The live simulation state assembled from a [`Config`].
#[derive(Debug)]
pub struct Scenario {
    pub vehicles: [Vehicle; 2],
    pub max_steps: Option<u64>,
}

impl Scenario {
    pub fn load(config: &Config) -> Result<Scenario, ScenarioError> {
        if config.vehicles.len() != 2 {
            return Err(ScenarioError::WrongVehicleCount(config.vehicles.len()));
        }

        let vehicles = [
            Self::build_vehicle(&config.vehicles[0])?,
            Self::build_vehicle(&config.vehicles[1])?,
        ];

        Ok(Scenario {
            vehicles,
            max_steps: config.simulation.max_steps,
        })
    }

    fn build_vehicle(config: &VehicleConfig) -> Result<Vehicle, VehicleError> {
        let mut vehicle = Vehicle::new(
            config.company.clone(),
            config.model.clone(),
            config.seats,
            config.side,
            config.fuel_capacity,
            config.fuel_efficiency,
            config.tank_state,
            config.initial_position,
        )?;
        // vehicles always start with zero velocity, the scenario assigns it
        vehicle.set_velocity(config.velocity);

        info!(
            "Loaded vehicle {} {} at {} with velocity {}",
            vehicle.company(),
            vehicle.model(),
            vehicle.position(),
            vehicle.velocity()
        );
        Ok(vehicle)
    }
}
