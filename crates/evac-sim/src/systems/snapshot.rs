//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::{Entity, World};

use evac_core::components::*;
use evac_core::enums::GamePhase;
use evac_core::events::FeedbackEvent;
use evac_core::state::*;
use evac_core::types::SimTime;

use crate::player::{PlayerState, RouteState, ScoreState};

/// Everything outside the world a snapshot needs.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub map_name: &'a str,
    pub route: &'a RouteState,
    pub player: &'a PlayerState,
    pub score: &'a ScoreState,
    pub followers: &'a [Entity],
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: SnapshotContext<'_>,
    feedback_events: Vec<FeedbackEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        map_name: ctx.map_name.to_string(),
        time_remaining: ctx.score.time_remaining,
        score: ctx.score.score,
        grade: ctx.score.grade,
        route: RouteView {
            pending: ctx.route.pending.clone(),
            points: ctx.route.points.clone(),
            distance: ctx.route.distance,
            safety_score: ctx.route.safety_score,
        },
        player: PlayerView {
            position: ctx.player.position,
            route_index: ctx.player.route_index,
            has_extinguisher: ctx.player.has_extinguisher,
            charge: ctx.player.charge,
            in_heavy_smoke: ctx.player.in_heavy_smoke,
            smoke_exposure_ticks: ctx.player.smoke_exposure_ticks,
        },
        fires: build_fires(world),
        smoke: build_smoke(world),
        exits: build_exits(world),
        extinguishers: build_extinguishers(world),
        people: build_people(world),
        followers: build_followers(world, ctx.route, ctx.followers),
        feedback_events,
        summary: ctx.score.summary,
    }
}

fn id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

fn build_fires(world: &World) -> Vec<FireView> {
    let mut fires: Vec<FireView> = world
        .query::<&FireHazard>()
        .iter()
        .map(|(e, f)| FireView {
            id: id(e),
            position: f.position,
            intensity: f.intensity,
            spread_radius: f.spread_radius(),
            is_suppressed: f.is_suppressed,
        })
        .collect();
    fires.sort_by_key(|f| f.id);
    fires
}

fn build_smoke(world: &World) -> Vec<SmokeView> {
    let mut smoke: Vec<SmokeView> = world
        .query::<&SmokeZone>()
        .iter()
        .map(|(e, z)| SmokeView {
            id: id(e),
            center: z.center,
            radius: z.radius,
            density: z.density,
            age: z.age,
        })
        .collect();
    smoke.sort_by_key(|z| z.id);
    smoke
}

fn build_exits(world: &World) -> Vec<ExitView> {
    let mut exits: Vec<ExitView> = world
        .query::<&ExitDoor>()
        .iter()
        .map(|(e, exit)| ExitView {
            id: id(e),
            position: exit.position,
            status: exit.status,
        })
        .collect();
    exits.sort_by_key(|x| x.id);
    exits
}

fn build_extinguishers(world: &World) -> Vec<ExtinguisherView> {
    let mut extinguishers: Vec<ExtinguisherView> = world
        .query::<&Extinguisher>()
        .iter()
        .map(|(e, ext)| ExtinguisherView {
            id: id(e),
            position: ext.position,
            is_picked_up: ext.is_picked_up,
        })
        .collect();
    extinguishers.sort_by_key(|x| x.id);
    extinguishers
}

fn build_people(world: &World) -> Vec<PersonView> {
    let mut people: Vec<PersonView> = world
        .query::<&Person>()
        .iter()
        .map(|(e, p)| PersonView {
            id: id(e),
            position: p.position,
            is_rescued: p.is_rescued,
            is_follower: p.is_follower,
        })
        .collect();
    people.sort_by_key(|p| p.id);
    people
}

/// Followers in rescue order, placed on their route point.
fn build_followers(world: &World, route: &RouteState, followers: &[Entity]) -> Vec<FollowerView> {
    followers
        .iter()
        .filter_map(|&entity| {
            let person = world.get::<&Person>(entity).ok()?;
            let route_index = person.follower_route_index?;
            let position = route.points.get(route_index).copied().unwrap_or(person.position);
            Some(FollowerView {
                id: id(entity),
                route_index,
                position,
            })
        })
        .collect()
}
