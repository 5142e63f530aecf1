//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed one at a time at the next step boundary.
//! A command that does not apply to the current phase is ignored.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Phase control ---
    /// Leave the tutorial and start the countdown in planning.
    StartGame,
    /// Start walking the current route (ignored while the route is empty).
    StartExecution,
    /// Reload the map template and return to planning.
    Reset,

    // --- Route drawing ---
    /// Add one drawing-surface point; it is snapped into the corridors first.
    AppendRoutePoint { point: Position },
    /// Discard the route being drawn and the scored route.
    ClearRoute,
    /// Submit the points drawn so far for validation and scoring.
    FinishRoute,
    /// Replace the route wholesale and score it.
    SubmitRoute { points: Vec<Position> },

    // --- Hazard response ---
    /// Spray the extinguisher at a map point.
    ApplyExtinguisher { point: Position },
}
