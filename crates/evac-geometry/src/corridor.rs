//! Route validation against the corridor rectangles.
//!
//! Walks each leg of the route in fixed steps and requires every sample to
//! sit inside at least one hallway. Adjacent or overlapping hallways form one
//! continuous walkable area.

use evac_core::constants::CORRIDOR_SAMPLE_STEP;
use evac_core::layout::Hallway;
use evac_core::types::Position;

/// Reason reported when a sample leaves the corridors.
pub const LEAVES_CORRIDOR: &str = "Route leaves corridor area";

/// Result of a corridor check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCheck {
    pub valid: bool,
    pub reason: Option<String>,
}

impl RouteCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validate with the default sample spacing.
pub fn validate_route(route: &[Position], hallways: &[Hallway]) -> RouteCheck {
    validate_route_with_step(route, hallways, CORRIDOR_SAMPLE_STEP)
}

/// Validate `route`, sampling every `step` map units along each leg.
///
/// Routes with fewer than two points are trivially valid. Zero-length legs
/// are skipped. Stops at the first sample outside every hallway.
pub fn validate_route_with_step(route: &[Position], hallways: &[Hallway], step: f64) -> RouteCheck {
    if route.len() < 2 {
        return RouteCheck::ok();
    }

    for leg in route.windows(2) {
        let (from, to) = (&leg[0], &leg[1]);
        let length = from.distance_to(to);
        if length <= 0.0 {
            continue;
        }

        let samples = leg_samples(from, to, length, step);
        if !samples.iter().all(|s| in_any_hallway(s, hallways)) {
            return RouteCheck::rejected(LEAVES_CORRIDOR);
        }
    }

    RouteCheck::ok()
}

/// Sample points from `from` towards `to` every `step` units, ending exactly on `to`.
fn leg_samples(from: &Position, to: &Position, length: f64, step: f64) -> Vec<Position> {
    let step = if step > 0.0 { step } else { CORRIDOR_SAMPLE_STEP };
    let count = (length / step).ceil() as usize;

    let mut samples: Vec<Position> = (0..count)
        .map(|i| from.lerp(to, (i as f64 * step) / length))
        .collect();
    samples.push(*to);
    samples
}

fn in_any_hallway(p: &Position, hallways: &[Hallway]) -> bool {
    hallways.iter().any(|h| h.contains(p))
}
