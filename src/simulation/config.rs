use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::simulation::geometry::Point;
use crate::simulation::vehicles::{FuelTankState, SteeringSide};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    /// Path to a YAML scenario config. Without it the built-in default
    /// scenario runs.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub vehicles: Vec<VehicleConfig>,
    #[serde(default)]
    pub simulation: SimulationParams,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SimulationParams {
    /// Upper bound on loop iterations. `None` runs until a crash or until
    /// both tanks are empty, which never happens when one vehicle keeps
    /// fuel but zero velocity.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleConfig {
    pub company: String,
    pub model: String,
    pub seats: u32,
    pub side: SteeringSide,
    pub fuel_capacity: f64,
    pub fuel_efficiency: f64,
    pub tank_state: FuelTankState,
    pub initial_position: Point,
    pub velocity: Point,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let file = File::open(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| ConfigError::Yaml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn from_args(args: &CommandLineArgs) -> Result<Config, ConfigError> {
        match &args.config {
            Some(path) => Config::from_file(path),
            None => Ok(Config::default()),
        }
    }
}

impl Default for Config {
    /// The built-in crash scenario: with starting point (6, 0) for the
    /// Corolla the cars meet at (4, 4); with (-2, 1) they never do.
    fn default() -> Self {
        Config {
            vehicles: vec![
                VehicleConfig {
                    company: "Volkswagon".to_string(),
                    model: "Rabbit".to_string(),
                    seats: 5,
                    side: SteeringSide::Left,
                    fuel_capacity: 75.0,
                    fuel_efficiency: 5.0,
                    tank_state: FuelTankState::Full,
                    initial_position: Point::new(0.0, 0.0),
                    velocity: Point::new(2.0, 2.0),
                },
                VehicleConfig {
                    company: "Toyota".to_string(),
                    model: "Corolla".to_string(),
                    seats: 4,
                    side: SteeringSide::Left,
                    fuel_capacity: 55.0,
                    fuel_efficiency: 3.0,
                    tank_state: FuelTankState::Full,
                    initial_position: Point::new(6.0, 0.0),
                    velocity: Point::new(-1.0, 2.0),
                },
            ],
            simulation: SimulationParams::default(),
        }
    }
}
