//! Simulation engine for the evacuation drill.
//!
//! Owns the hecs ECS world, runs the countdown, hazard and execution
//! timers, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod hazard;
pub mod player;
pub mod scenario;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use evac_core as core;

#[cfg(test)]
mod tests;
