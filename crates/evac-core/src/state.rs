//! Game state snapshot: the complete visible state sent to the frontend.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::FeedbackEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to collaborators after each step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub map_name: String,
    pub time_remaining: u32,
    pub score: u32,
    pub grade: Option<Grade>,
    pub route: RouteView,
    pub player: PlayerView,
    pub fires: Vec<FireView>,
    pub smoke: Vec<SmokeView>,
    pub exits: Vec<ExitView>,
    pub extinguishers: Vec<ExtinguisherView>,
    pub people: Vec<PersonView>,
    /// Rescued people in rescue order, at their trailing positions.
    pub followers: Vec<FollowerView>,
    pub feedback_events: Vec<FeedbackEvent>,
    pub summary: Option<CompletionSummary>,
}

/// The drawn route and its planning score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteView {
    /// Points drawn but not yet submitted.
    pub pending: Vec<Position>,
    /// The scored route the player will walk.
    pub points: Vec<Position>,
    pub distance: f64,
    pub safety_score: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub route_index: usize,
    pub has_extinguisher: bool,
    pub charge: u32,
    pub in_heavy_smoke: bool,
    pub smoke_exposure_ticks: u32,
}

/// Entity views carry `id`, the stable hecs handle in bit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireView {
    pub id: u64,
    pub position: Position,
    pub intensity: FireIntensity,
    pub spread_radius: f64,
    pub is_suppressed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeView {
    pub id: u64,
    pub center: Position,
    pub radius: f64,
    pub density: SmokeDensity,
    pub age: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitView {
    pub id: u64,
    pub position: Position,
    pub status: ExitStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtinguisherView {
    pub id: u64,
    pub position: Position,
    pub is_picked_up: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonView {
    pub id: u64,
    pub position: Position,
    pub is_rescued: bool,
    pub is_follower: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowerView {
    pub id: u64,
    pub route_index: usize,
    pub position: Position,
}

/// Final result, for the statistics aggregator and the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub outcome: Outcome,
    pub score: u32,
    pub grade: Grade,
    pub time_remaining: u32,
    pub rescued: u32,
    pub safety_score: u32,
}
