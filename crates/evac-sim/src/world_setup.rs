//! Entity spawn factories for seeding the world from a map template.

use hecs::{Entity, World};

use evac_core::components::*;
use evac_core::enums::*;
use evac_core::layout::MapLayout;
use evac_core::types::Position;

use crate::hazard;
use crate::systems;

/// Intensity the authored fire starts burn at for a given difficulty.
pub fn initial_fire_intensity(difficulty: Difficulty) -> FireIntensity {
    match difficulty {
        Difficulty::Easy => FireIntensity::Small,
        Difficulty::Medium => FireIntensity::Medium,
        Difficulty::Hard => FireIntensity::Large,
    }
}

/// Clear the world and repopulate it from `layout`: fires, their initial
/// smoke, people, exits and extinguishers. Exit status is computed before
/// returning.
pub fn setup_run(world: &mut World, layout: &MapLayout) {
    world.clear();

    let intensity = initial_fire_intensity(layout.difficulty);
    let fires: Vec<FireHazard> = layout
        .fire_starts
        .iter()
        .map(|p| FireHazard::new(*p, intensity))
        .collect();
    for fire in &fires {
        world.spawn((*fire,));
    }
    for zone in hazard::generate_smoke(&fires) {
        world.spawn((zone,));
    }

    for p in &layout.trapped_people {
        spawn_person(world, *p);
    }
    for p in &layout.exits {
        world.spawn((ExitDoor {
            position: *p,
            status: ExitStatus::Safe,
        },));
    }
    for p in &layout.extinguishers {
        spawn_extinguisher(world, *p);
    }

    systems::exits::run(world);
}

pub fn spawn_fire(world: &mut World, position: Position, intensity: FireIntensity) -> Entity {
    world.spawn((FireHazard::new(position, intensity),))
}

pub fn spawn_person(world: &mut World, position: Position) -> Entity {
    world.spawn((Person::trapped(position),))
}

pub fn spawn_extinguisher(world: &mut World, position: Position) -> Entity {
    world.spawn((Extinguisher {
        position,
        is_picked_up: false,
    },))
}
