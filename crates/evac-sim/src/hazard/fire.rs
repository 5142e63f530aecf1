//! Fire spread model.
//!
//! One call is one hazard tick. All randomness comes from the caller's RNG,
//! so the same seed and inputs always produce the same fires.

use rand::Rng;

use evac_core::components::FireHazard;
use evac_core::constants::*;
use evac_core::enums::FireIntensity;
use evac_core::types::Position;

/// Candidate spawn offsets around a spreading fire: 4 orthogonal, then 4 diagonal.
const SPREAD_OFFSETS: [(f64, f64); 8] = [
    (SPREAD_ORTHOGONAL_OFFSET, 0.0),
    (-SPREAD_ORTHOGONAL_OFFSET, 0.0),
    (0.0, SPREAD_ORTHOGONAL_OFFSET),
    (0.0, -SPREAD_ORTHOGONAL_OFFSET),
    (SPREAD_DIAGONAL_OFFSET, SPREAD_DIAGONAL_OFFSET),
    (-SPREAD_DIAGONAL_OFFSET, SPREAD_DIAGONAL_OFFSET),
    (SPREAD_DIAGONAL_OFFSET, -SPREAD_DIAGONAL_OFFSET),
    (-SPREAD_DIAGONAL_OFFSET, -SPREAD_DIAGONAL_OFFSET),
];

/// Chance that an unsuppressed fire spreads this tick.
pub fn spread_probability(intensity: FireIntensity, time_elapsed: f64) -> f64 {
    (intensity.base_spread_probability() + time_elapsed / SPREAD_TIME_DIVISOR)
        .min(SPREAD_PROBABILITY_CAP)
}

/// Advance the fire list by one hazard tick.
///
/// Input fires keep their index in the output; spawned fires are appended in
/// spawn order. Suppressed fires are copied through untouched and consume no
/// randomness.
pub fn calculate_spread(fires: &[FireHazard], time_elapsed: f64, rng: &mut impl Rng) -> Vec<FireHazard> {
    let mut next = fires.to_vec();

    for fire in fires.iter().filter(|f| !f.is_suppressed) {
        let roll: f64 = rng.gen();
        if roll >= spread_probability(fire.intensity, time_elapsed) {
            continue;
        }

        for (dx, dy) in SPREAD_OFFSETS {
            let candidate = fire.position.offset(dx, dy);
            if in_spawn_bounds(&candidate) && !crowded(&candidate, &next) {
                next.push(FireHazard::new(candidate, FireIntensity::Small));
            }
        }
    }

    let upgrade_chance = time_elapsed / SPREAD_TIME_DIVISOR;
    for fire in next.iter_mut().filter(|f| !f.is_suppressed) {
        let roll: f64 = rng.gen();
        if roll < upgrade_chance {
            fire.intensity = fire.intensity.upgraded();
        }
    }

    next
}

fn in_spawn_bounds(p: &Position) -> bool {
    (SPAWN_MIN..=SPAWN_MAX).contains(&p.x) && (SPAWN_MIN..=SPAWN_MAX).contains(&p.y)
}

fn crowded(p: &Position, fires: &[FireHazard]) -> bool {
    fires
        .iter()
        .any(|f| f.position.distance_to(p) < SPREAD_MIN_SEPARATION)
}
