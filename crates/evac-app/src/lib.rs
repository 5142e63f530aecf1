//! Headless host for the evacuation drill simulation.
//!
//! Reads player commands as JSON lines on stdin, runs the engine on a
//! real-time game loop thread, and writes state snapshots as JSON lines
//! on stdout.

pub mod game_loop;
pub mod ipc;
pub mod state;

pub use evac_core as core;
