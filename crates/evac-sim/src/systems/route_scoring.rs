//! Route scoring system: rates a planned route against the live hazards.
//!
//! Scoring is recomputed from scratch on every submission: rescues from a
//! previous route are undone first. Extinguisher pickups stay; charge is
//! only granted by an extinguisher nobody has picked up yet.

use hecs::{Entity, World};

use evac_core::components::{Extinguisher, FireHazard, Person, SmokeZone};
use evac_core::constants::*;
use evac_core::enums::Feedback;
use evac_core::events::FeedbackEvent;
use evac_core::types::Position;

use crate::hazard;
use crate::player::{PlayerState, RouteState};

/// Safety score of a route: 100, minus 30 per point in fire and 10 per point
/// in heavy smoke, floored at 0.
pub fn safety_score(points: &[Position], fires: &[FireHazard], smoke: &[SmokeZone]) -> u32 {
    let penalty: u32 = points
        .iter()
        .map(|p| {
            let mut hit = 0;
            if hazard::is_in_fire(p, fires) {
                hit += ROUTE_FIRE_PENALTY;
            }
            if hazard::is_in_heavy_smoke(p, smoke) {
                hit += ROUTE_SMOKE_PENALTY;
            }
            hit
        })
        .sum();
    ROUTE_SAFETY_MAX.saturating_sub(penalty)
}

/// Total polyline length.
pub fn route_distance(points: &[Position]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Score `points` as the new route.
pub fn run(
    world: &mut World,
    points: Vec<Position>,
    route: &mut RouteState,
    player: &mut PlayerState,
    followers: &mut Vec<Entity>,
    events: &mut Vec<FeedbackEvent>,
) {
    reset_rescues(world, followers);

    let fires: Vec<FireHazard> = world.query::<&FireHazard>().iter().map(|(_, f)| *f).collect();
    let smoke: Vec<SmokeZone> = world.query::<&SmokeZone>().iter().map(|(_, z)| *z).collect();

    route.distance = route_distance(&points);
    route.safety_score = safety_score(&points, &fires, &smoke);
    route.points = points;

    let mut people: Vec<(Entity, Position)> = world
        .query::<&Person>()
        .iter()
        .filter(|(_, p)| !p.is_rescued)
        .map(|(e, p)| (e, p.position))
        .collect();
    people.sort_by_key(|(e, _)| e.to_bits());

    for (entity, home) in people {
        let Some((index, distance)) = route.nearest_index(&home) else {
            continue;
        };
        if distance < PLANNING_RESCUE_RADIUS {
            if let Ok(mut person) = world.get::<&mut Person>(entity) {
                person.is_rescued = true;
                person.is_follower = true;
                person.follower_route_index = Some(index);
            }
            followers.push(entity);
        }
    }

    for (_entity, ext) in world.query_mut::<&mut Extinguisher>() {
        if ext.is_picked_up {
            continue;
        }
        let reached = route
            .points
            .iter()
            .any(|p| p.distance_to(&ext.position) <= PICKUP_RADIUS);
        if reached {
            ext.is_picked_up = true;
            player.has_extinguisher = true;
            player.charge = EXTINGUISHER_CHARGES;
        }
    }

    let feedback = Feedback::for_safety_score(route.safety_score);
    tracing::debug!(
        points = route.points.len(),
        safety = route.safety_score,
        rescued = followers.len(),
        "route scored"
    );
    events.push(FeedbackEvent::RouteScored {
        feedback,
        safety_score: route.safety_score,
    });
}

/// Drop the scored route and the rescues it granted.
pub fn clear(world: &mut World, route: &mut RouteState, followers: &mut Vec<Entity>) {
    reset_rescues(world, followers);
    route.points.clear();
    route.distance = 0.0;
    route.safety_score = 0;
}

/// Undo rescues granted by the previous route.
fn reset_rescues(world: &mut World, followers: &mut Vec<Entity>) {
    followers.clear();
    for (_entity, person) in world.query_mut::<&mut Person>() {
        person.is_rescued = false;
        person.is_follower = false;
        person.follower_route_index = None;
    }
}
