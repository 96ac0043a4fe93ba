pub mod config;
pub mod controller;
pub mod engine;
pub mod events;
pub mod geometry;
pub mod logging;
pub mod scenario;
pub mod vehicles;
