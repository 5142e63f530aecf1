//! Core types and definitions for the evacuation drill simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! map templates, components, commands, state snapshots, events, and
//! constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod layout;
pub mod state;
pub mod types;
