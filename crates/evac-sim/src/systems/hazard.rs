//! Hazard tick system: applies the fire spread and smoke models to the world.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use evac_core::components::{FireHazard, SmokeZone};
use evac_core::constants::SMOKE_MAX_AGE;

use crate::hazard;

/// Spread fires, evolve smoke, then rate the exits.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, time_elapsed: f64, expansion: f64) {
    let fires = collect_fires(world);
    let plain: Vec<FireHazard> = fires.iter().map(|(_, f)| *f).collect();
    let next = hazard::calculate_spread(&plain, time_elapsed, rng);

    for ((entity, _), updated) in fires.iter().zip(&next) {
        if let Ok(mut fire) = world.get::<&mut FireHazard>(*entity) {
            *fire = *updated;
        }
    }
    for spawned in &next[fires.len()..] {
        world.spawn((*spawned,));
    }

    tracing::debug!(
        fires = next.len(),
        spawned = next.len() - fires.len(),
        time_elapsed,
        "hazard tick"
    );

    evolve_smoke(world, expansion);
    super::exits::run(world);
}

/// Age and grow smoke in place, despawning expired zones and spawning
/// zones for uncovered fires.
pub fn evolve_smoke(world: &mut World, expansion: f64) {
    let fires: Vec<FireHazard> = collect_fires(world).into_iter().map(|(_, f)| f).collect();
    let zones = collect_smoke(world);
    let plain: Vec<SmokeZone> = zones.iter().map(|(_, z)| *z).collect();

    // Survivors come back in their original order, new zones after them.
    let mut evolved = hazard::evolve_smoke(&plain, &fires, expansion).into_iter();
    for (entity, zone) in &zones {
        if zone.age >= SMOKE_MAX_AGE {
            let _ = world.despawn(*entity);
        } else if let Some(next) = evolved.next() {
            if let Ok(mut z) = world.get::<&mut SmokeZone>(*entity) {
                *z = next;
            }
        }
    }
    for fresh in evolved {
        world.spawn((fresh,));
    }
}

pub fn collect_fires(world: &World) -> Vec<(Entity, FireHazard)> {
    let mut fires: Vec<(Entity, FireHazard)> =
        world.query::<&FireHazard>().iter().map(|(e, f)| (e, *f)).collect();
    fires.sort_by_key(|(e, _)| e.to_bits());
    fires
}

pub fn collect_smoke(world: &World) -> Vec<(Entity, SmokeZone)> {
    let mut zones: Vec<(Entity, SmokeZone)> =
        world.query::<&SmokeZone>().iter().map(|(e, z)| (e, *z)).collect();
    zones.sort_by_key(|(e, _)| e.to_bits());
    zones
}
