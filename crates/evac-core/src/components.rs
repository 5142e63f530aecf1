//! Components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in the hazard
//! model and systems, not here. Each component carries its own position
//! so the hazard functions can work on plain slices.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// A burning spot on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireHazard {
    pub position: Position,
    pub intensity: FireIntensity,
    /// Suppressed fires never change again and no longer burn.
    pub is_suppressed: bool,
}

/// A smoke cloud, centered on the fire that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmokeZone {
    pub center: Position,
    pub radius: f64,
    pub density: SmokeDensity,
    /// Hazard ticks survived so far.
    pub age: u32,
}

/// A trapped person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Where the person waits. Never moves; followers are drawn on the route.
    pub position: Position,
    pub is_rescued: bool,
    pub is_follower: bool,
    /// Route index the follower currently occupies.
    pub follower_route_index: Option<usize>,
}

/// A way out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitDoor {
    pub position: Position,
    pub status: ExitStatus,
}

/// A wall-mounted extinguisher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extinguisher {
    pub position: Position,
    pub is_picked_up: bool,
}

impl FireHazard {
    pub fn new(position: Position, intensity: FireIntensity) -> Self {
        Self {
            position,
            intensity,
            is_suppressed: false,
        }
    }

    pub fn spread_radius(&self) -> f64 {
        self.intensity.spread_radius()
    }
}

impl Person {
    pub fn trapped(position: Position) -> Self {
        Self {
            position,
            is_rescued: false,
            is_follower: false,
            follower_route_index: None,
        }
    }
}
