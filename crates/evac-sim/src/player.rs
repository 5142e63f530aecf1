//! Run-level state that is not an entity: the route, the player, the score.
//!
//! Stored directly on `SimulationEngine`, NOT as ECS entities.

use evac_core::enums::Grade;
use evac_core::state::CompletionSummary;
use evac_core::types::Position;

/// The drawn and the scored route.
#[derive(Debug, Clone, Default)]
pub struct RouteState {
    /// Points appended one by one, not yet submitted.
    pub pending: Vec<Position>,
    /// Last route that passed the submission gate and was scored.
    pub points: Vec<Position>,
    pub distance: f64,
    pub safety_score: u32,
}

impl RouteState {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the route point nearest to `p`, with its distance.
    /// Ties go to the earlier index.
    pub fn nearest_index(&self, p: &Position) -> Option<(usize, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, point)| (i, point.distance_to(p)))
            .fold(None, |best, candidate| match best {
                Some((_, d)) if d <= candidate.1 => best,
                _ => Some(candidate),
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    pub position: Position,
    pub route_index: usize,
    pub has_extinguisher: bool,
    pub charge: u32,
    pub in_heavy_smoke: bool,
    /// Consecutive execution ticks spent in heavy smoke.
    pub smoke_exposure_ticks: u32,
}

impl PlayerState {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Use one charge. Returns false if the extinguisher was already empty.
    pub fn spend_charge(&mut self) -> bool {
        if self.charge == 0 {
            return false;
        }
        self.charge -= 1;
        if self.charge == 0 {
            self.has_extinguisher = false;
        }
        true
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub time_remaining: u32,
    /// Countdown the run started with.
    pub time_limit: u32,
    pub grade: Option<Grade>,
    pub summary: Option<CompletionSummary>,
}

impl ScoreState {
    pub fn new(time_limit: u32) -> Self {
        Self {
            time_remaining: time_limit,
            time_limit,
            ..Default::default()
        }
    }

    /// Seconds since the run started, as seen by the hazard model.
    pub fn time_elapsed_secs(&self) -> f64 {
        f64::from(self.time_limit.saturating_sub(self.time_remaining))
    }

    pub fn penalize(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }
}
