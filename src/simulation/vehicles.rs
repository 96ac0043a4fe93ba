use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::simulation::geometry::Point;

/// All vehicles have the same number of tires, so this is a module constant
/// rather than per-instance state.
pub const NUMBER_OF_TIRES: u32 = 4;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteeringSide {
    Left,
    Right,
}

/// Initial fuel condition of a tank.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelTankState {
    Full,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleState {
    Moving,
    StoppedNoVelocity,
    StoppedOutOfFuel,
}

/// Outcome of a single [`Vehicle::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Position changed by one velocity step, fuel was consumed.
    Moved,
    /// Not enough fuel for the required step distance. Fuel is drained to
    /// zero and the position stays where it is.
    Stalled,
    /// Velocity is zero, nothing happened.
    Idle,
}

#[derive(Debug, Error, PartialEq)]
pub enum VehicleError {
    #[error("fuel capacity must not be negative, got {0} L")]
    InvalidCapacity(f64),
    #[error("fuel efficiency must be positive, got {0} km/L")]
    InvalidEfficiency(f64),
    #[error("refuel amount must not be negative, got {0} L")]
    NegativeRefuelAmount(f64),
}

/// A vehicle on the plane. Identity and capacity attributes are fixed at
/// construction, motion state changes through [`Vehicle::set_velocity`],
/// [`Vehicle::advance`] and the refuel methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    company: String,
    model: String,
    seats: u32,
    side: SteeringSide,
    fuel_capacity: f64,
    fuel_efficiency: f64,
    fuel: f64,
    position: Point,
    velocity: Point,
    minimum_distance: f64,
    maximum_distance: f64,
}

impl Vehicle {
    /// Creates a vehicle with zero velocity at the given position. The tank
    /// starts full or empty depending on `tank_state`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company: impl Into<String>,
        model: impl Into<String>,
        seats: u32,
        side: SteeringSide,
        fuel_capacity: f64,
        fuel_efficiency: f64,
        tank_state: FuelTankState,
        initial_position: Point,
    ) -> Result<Self, VehicleError> {
        if fuel_capacity < 0.0 {
            return Err(VehicleError::InvalidCapacity(fuel_capacity));
        }
        if fuel_efficiency <= 0.0 {
            return Err(VehicleError::InvalidEfficiency(fuel_efficiency));
        }

        let fuel = match tank_state {
            FuelTankState::Full => fuel_capacity,
            FuelTankState::Empty => 0.0,
        };

        Ok(Vehicle {
            company: company.into(),
            model: model.into(),
            seats,
            side,
            fuel_capacity,
            fuel_efficiency,
            fuel,
            position: initial_position,
            velocity: Point::ZERO,
            minimum_distance: 0.0,
            maximum_distance: fuel * fuel_efficiency,
        })
    }

    /// Sets the velocity and recomputes the minimum distance, i.e. the
    /// straight-line distance this vehicle has to cover per step.
    pub fn set_velocity(&mut self, velocity: Point) {
        self.velocity = velocity;
        self.minimum_distance = velocity.length();
    }

    /// Advances the vehicle by one step. The vehicle only moves if the
    /// remaining fuel covers the step distance; otherwise the tank is
    /// drained and the vehicle stays put. A vehicle with zero velocity
    /// neither moves nor consumes fuel.
    pub fn advance(&mut self) -> Advance {
        if self.minimum_distance == 0.0 {
            return Advance::Idle;
        }

        self.maximum_distance = self.fuel * self.fuel_efficiency;

        if self.maximum_distance >= self.minimum_distance {
            self.position = self.position + self.velocity;
            self.fuel -= self.minimum_distance / self.fuel_efficiency;
            Advance::Moved
        } else {
            // No partial steps. The remaining fuel doesn't cover the step
            // distance, so it is drained and the vehicle stops here.
            self.fuel = 0.0;
            Advance::Stalled
        }
    }

    /// Adds `amount` liters to the tank. Excess beyond the capacity is
    /// silently discarded.
    pub fn refuel(&mut self, amount: f64) -> Result<(), VehicleError> {
        if amount < 0.0 {
            return Err(VehicleError::NegativeRefuelAmount(amount));
        }
        self.fuel = (self.fuel + amount).min(self.fuel_capacity);
        Ok(())
    }

    /// Fills the tank to capacity.
    pub fn refuel_full(&mut self) {
        self.fuel = self.fuel_capacity;
    }

    pub fn is_tank_empty(&self) -> bool {
        self.fuel == 0.0
    }

    pub fn state(&self) -> VehicleState {
        if self.fuel == 0.0 {
            VehicleState::StoppedOutOfFuel
        } else if self.minimum_distance == 0.0 {
            VehicleState::StoppedNoVelocity
        } else {
            VehicleState::Moving
        }
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn side(&self) -> SteeringSide {
        self.side
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }

    pub fn fuel_efficiency(&self) -> f64 {
        self.fuel_efficiency
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn minimum_distance(&self) -> f64 {
        self.minimum_distance
    }

    /// Diagnostic snapshot of the vehicle.
    pub fn report_stats(&self) {
        info!(
            "{} {}: fuel remaining {} L, position {}",
            self.company, self.model, self.fuel, self.position
        );
    }
}
