//! Hazard model: fire spread, smoke, and point classification.
//!
//! Pure functions over component slices. The world glue lives in
//! `systems::hazard`.

pub mod fire;
pub mod smoke;

pub use fire::{calculate_spread, spread_probability};
pub use smoke::{evolve_smoke, generate_smoke};

use evac_core::components::{FireHazard, SmokeZone};
use evac_core::enums::SmokeDensity;
use evac_core::types::Position;

/// Inside the spread radius of any unsuppressed fire.
pub fn is_in_fire(point: &Position, fires: &[FireHazard]) -> bool {
    fires
        .iter()
        .any(|f| !f.is_suppressed && f.position.distance_to(point) <= f.spread_radius())
}

/// Inside any heavy smoke zone.
pub fn is_in_heavy_smoke(point: &Position, zones: &[SmokeZone]) -> bool {
    zones
        .iter()
        .any(|z| z.density == SmokeDensity::Heavy && z.center.distance_to(point) <= z.radius)
}
