//! Smoke generation and evolution.

use evac_core::components::{FireHazard, SmokeZone};
use evac_core::constants::*;
use evac_core::enums::SmokeDensity;

/// One fresh zone per fire, in fire order.
pub fn generate_smoke(fires: &[FireHazard]) -> Vec<SmokeZone> {
    fires.iter().map(zone_for).collect()
}

/// Age and grow the existing zones, then add zones for uncovered fires.
///
/// Zones already at `SMOKE_MAX_AGE` are dropped. Surviving zones keep their
/// relative order; new zones are appended in fire order. A fire is covered
/// when some surviving zone is centered exactly on it.
pub fn evolve_smoke(existing: &[SmokeZone], fires: &[FireHazard], expansion: f64) -> Vec<SmokeZone> {
    let mut zones: Vec<SmokeZone> = existing
        .iter()
        .filter(|z| z.age < SMOKE_MAX_AGE)
        .map(|z| SmokeZone {
            radius: z.radius + expansion,
            age: z.age + 1,
            ..*z
        })
        .collect();

    for fire in fires.iter().filter(|f| !f.is_suppressed) {
        let covered = zones.iter().any(|z| z.center == fire.position);
        if !covered {
            zones.push(zone_for(fire));
        }
    }

    zones
}

fn zone_for(fire: &FireHazard) -> SmokeZone {
    let density = if fire.is_suppressed {
        SmokeDensity::Light
    } else {
        fire.intensity.smoke_density()
    };
    SmokeZone {
        center: fire.position,
        radius: fire.spread_radius() * SMOKE_RADIUS_FACTOR,
        density,
        age: 0,
    }
}
