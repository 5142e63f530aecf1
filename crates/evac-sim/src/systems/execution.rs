//! Execution tick system: walks the player one route point per tick.

use hecs::{Entity, World};

use evac_core::components::{ExitDoor, FireHazard, Person, SmokeZone};
use evac_core::constants::*;
use evac_core::enums::{ExitStatus, Outcome};
use evac_core::events::FeedbackEvent;

use crate::hazard;
use crate::player::{PlayerState, RouteState, ScoreState};

/// What the engine should do after an execution tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Continue,
    Finished(Outcome),
}

/// Run one execution tick.
///
/// Heavy smoke halves the walking pace: on every second consecutive tick in
/// smoke the player stays put and nothing else happens.
pub fn run(
    world: &mut World,
    route: &RouteState,
    player: &mut PlayerState,
    score: &mut ScoreState,
    followers: &mut Vec<Entity>,
    events: &mut Vec<FeedbackEvent>,
) -> StepResult {
    let smoke: Vec<SmokeZone> = world.query::<&SmokeZone>().iter().map(|(_, z)| *z).collect();
    player.in_heavy_smoke = hazard::is_in_heavy_smoke(&player.position, &smoke);

    if player.in_heavy_smoke {
        player.smoke_exposure_ticks += 1;
        score.penalize(SMOKE_TICK_PENALTY);
        if player.smoke_exposure_ticks == 1 {
            events.push(FeedbackEvent::SmokeExposure { consecutive_ticks: 1 });
        }
        if player.smoke_exposure_ticks > SMOKE_EXPOSURE_LIMIT {
            return StepResult::Finished(Outcome::SmokeOverwhelmed);
        }
        if player.smoke_exposure_ticks % 2 == 0 {
            return StepResult::Continue;
        }
    } else {
        player.smoke_exposure_ticks = 0;
    }

    if player.route_index + 1 >= route.points.len() {
        return StepResult::Finished(Outcome::RouteExhausted);
    }
    player.route_index += 1;
    player.position = route.points[player.route_index];

    super::extinguisher::auto_pickup(world, player, events);
    if super::extinguisher::auto_suppress(world, player, events) > 0 {
        super::exits::run(world);
    }

    rescue_nearby(world, route, player, score, followers, events);
    trail_followers(world, player.route_index, followers);

    let escaped = world.query::<&ExitDoor>().iter().any(|(_, exit)| {
        exit.status != ExitStatus::Blocked
            && exit.position.distance_to(&player.position) <= EXIT_REACH_RADIUS
    });
    if escaped {
        return StepResult::Finished(Outcome::Escaped);
    }

    StepResult::Continue
}

fn rescue_nearby(
    world: &mut World,
    route: &RouteState,
    player: &PlayerState,
    score: &mut ScoreState,
    followers: &mut Vec<Entity>,
    events: &mut Vec<FeedbackEvent>,
) {
    let fires: Vec<FireHazard> = world.query::<&FireHazard>().iter().map(|(_, f)| *f).collect();
    let in_fire = hazard::is_in_fire(&player.position, &fires);

    let mut reached: Vec<Entity> = world
        .query::<&Person>()
        .iter()
        .filter(|(_, p)| !p.is_rescued && p.position.distance_to(&player.position) <= EXECUTION_RESCUE_RADIUS)
        .map(|(e, _)| e)
        .collect();
    reached.sort_by_key(|e| e.to_bits());

    for entity in reached {
        if let Ok(mut person) = world.get::<&mut Person>(entity) {
            person.is_rescued = true;
            person.is_follower = true;
            person.follower_route_index = route.nearest_index(&person.position).map(|(i, _)| i);
        }
        followers.push(entity);

        if in_fire && !player.has_extinguisher {
            score.penalize(RESCUE_IN_FIRE_PENALTY);
        }
        tracing::debug!(followers = followers.len(), in_fire, "person rescued");
        events.push(FeedbackEvent::PersonRescued {
            follower_index: followers.len() - 1,
        });
    }
}

/// Follower `k` walks `FOLLOWER_SPACING * (k + 1)` points behind the player.
pub fn follower_index(route_index: usize, k: usize) -> usize {
    route_index.saturating_sub(FOLLOWER_SPACING * (k + 1))
}

fn trail_followers(world: &mut World, route_index: usize, followers: &[Entity]) {
    for (k, entity) in followers.iter().enumerate() {
        if let Ok(mut person) = world.get::<&mut Person>(*entity) {
            person.follower_route_index = Some(follower_index(route_index, k));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evac_core::enums::{FireIntensity, SmokeDensity};
    use evac_core::types::Position;

    fn straight_route(len: usize) -> RouteState {
        RouteState {
            points: (0..len).map(|i| Position::new(20.0 + i as f64 * 5.0, 100.0)).collect(),
            safety_score: 100,
            ..Default::default()
        }
    }

    fn tick(world: &mut World, route: &RouteState, player: &mut PlayerState) -> StepResult {
        let mut score = ScoreState::new(60);
        let mut followers = Vec::new();
        let mut events = Vec::new();
        run(world, route, player, &mut score, &mut followers, &mut events)
    }

    #[test]
    fn test_player_advances_one_point_per_tick() {
        let mut world = World::new();
        let route = straight_route(4);
        let mut player = PlayerState::at(route.points[0]);

        assert_eq!(tick(&mut world, &route, &mut player), StepResult::Continue);
        assert_eq!(player.route_index, 1);
        assert_eq!(player.position, route.points[1]);
    }

    #[test]
    fn test_route_end_finishes_run() {
        let mut world = World::new();
        let route = straight_route(2);
        let mut player = PlayerState::at(route.points[0]);

        assert_eq!(tick(&mut world, &route, &mut player), StepResult::Continue);
        assert_eq!(
            tick(&mut world, &route, &mut player),
            StepResult::Finished(Outcome::RouteExhausted)
        );
    }

    #[test]
    fn test_heavy_smoke_halves_pace() {
        let mut world = World::new();
        world.spawn((SmokeZone {
            center: Position::new(60.0, 100.0),
            radius: 200.0,
            density: SmokeDensity::Heavy,
            age: 0,
        },));
        let route = straight_route(10);
        let mut player = PlayerState::at(route.points[0]);
        let mut score = ScoreState::new(60);
        score.score = 10;
        let mut followers = Vec::new();
        let mut events = Vec::new();

        for _ in 0..4 {
            run(&mut world, &route, &mut player, &mut score, &mut followers, &mut events);
        }

        assert_eq!(player.smoke_exposure_ticks, 4);
        assert_eq!(player.route_index, 2);
        assert_eq!(score.score, 6);
        assert_eq!(events, vec![FeedbackEvent::SmokeExposure { consecutive_ticks: 1 }]);
    }

    #[test]
    fn test_leaving_smoke_resets_exposure() {
        let mut world = World::new();
        let route = straight_route(5);
        let mut player = PlayerState::at(route.points[0]);
        player.smoke_exposure_ticks = 20;

        tick(&mut world, &route, &mut player);
        assert_eq!(player.smoke_exposure_ticks, 0);
        assert!(!player.in_heavy_smoke);
    }

    #[test]
    fn test_sustained_smoke_overwhelms() {
        let mut world = World::new();
        world.spawn((SmokeZone {
            center: Position::new(20.0, 100.0),
            radius: 500.0,
            density: SmokeDensity::Heavy,
            age: 0,
        },));
        let route = straight_route(60);
        let mut player = PlayerState::at(route.points[0]);

        let mut result = StepResult::Continue;
        let mut ticks = 0;
        while result == StepResult::Continue {
            result = tick(&mut world, &route, &mut player);
            ticks += 1;
        }
        assert_eq!(result, StepResult::Finished(Outcome::SmokeOverwhelmed));
        assert_eq!(ticks, SMOKE_EXPOSURE_LIMIT + 1);
    }

    #[test]
    fn test_reaching_open_exit_escapes() {
        let mut world = World::new();
        world.spawn((ExitDoor {
            position: Position::new(30.0, 110.0),
            status: ExitStatus::Risky,
        },));
        let route = straight_route(10);
        let mut player = PlayerState::at(route.points[0]);

        assert_eq!(
            tick(&mut world, &route, &mut player),
            StepResult::Finished(Outcome::Escaped)
        );
    }

    #[test]
    fn test_blocked_exit_is_not_an_escape() {
        let mut world = World::new();
        world.spawn((ExitDoor {
            position: Position::new(30.0, 110.0),
            status: ExitStatus::Blocked,
        },));
        let route = straight_route(10);
        let mut player = PlayerState::at(route.points[0]);

        assert_eq!(tick(&mut world, &route, &mut player), StepResult::Continue);
    }

    #[test]
    fn test_rescue_in_fire_without_extinguisher_costs_points() {
        let mut world = World::new();
        let person = world.spawn((Person::trapped(Position::new(25.0, 110.0)),));
        world.spawn((FireHazard::new(Position::new(25.0, 100.0), FireIntensity::Small),));
        let route = straight_route(10);
        let mut player = PlayerState::at(route.points[0]);
        let mut score = ScoreState::new(60);
        score.score = 80;
        let mut followers = Vec::new();
        let mut events = Vec::new();

        run(&mut world, &route, &mut player, &mut score, &mut followers, &mut events);

        assert_eq!(followers, vec![person]);
        assert_eq!(score.score, 30);
        assert!(world.get::<&Person>(person).unwrap().is_rescued);
        assert!(events.contains(&FeedbackEvent::PersonRescued { follower_index: 0 }));
    }

    #[test]
    fn test_followers_trail_behind() {
        assert_eq!(follower_index(20, 0), 12);
        assert_eq!(follower_index(20, 1), 4);
        assert_eq!(follower_index(20, 2), 0);
        assert_eq!(follower_index(3, 0), 0);
    }
}
