//! Tests for the simulation engine: phases, route gating and scoring,
//! execution, completion and determinism.

use evac_core::commands::PlayerCommand;
use evac_core::components::SmokeZone;
use evac_core::enums::*;
use evac_core::events::FeedbackEvent;
use evac_core::layout::{Hallway, MapLayout, Wall};
use evac_core::state::GameStateSnapshot;
use evac_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine, CROSSES_WALL};
use crate::scenario;
use crate::scheduler::{ScheduledTick, TimerKind};

fn p(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

/// Dense polyline through axis-aligned corners, one point every `step` units.
fn densify(corners: &[Position], step: f64) -> Vec<Position> {
    let mut points = Vec::new();
    for leg in corners.windows(2) {
        let (from, to) = (leg[0], leg[1]);
        let length = from.distance_to(&to);
        let (ux, uy) = ((to.x - from.x) / length, (to.y - from.y) / length);
        let count = (length / step).round() as usize;
        for k in 0..count {
            let d = k as f64 * step;
            points.push(p(from.x + ux * d, from.y + uy * d));
        }
    }
    if let Some(last) = corners.last() {
        points.push(*last);
    }
    points
}

/// Start of the office map to the south-west exit.
fn escape_route() -> Vec<Position> {
    densify(&[p(160.0, 160.0), p(60.0, 160.0), p(60.0, 290.0)], 5.0)
}

fn engine_with(layout: MapLayout, config: SimConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(layout, config);
    engine.queue_command(PlayerCommand::StartGame);
    engine.step(0);
    engine
}

fn office() -> SimulationEngine {
    engine_with(scenario::training_office(), SimConfig::default())
}

/// One open square hallway with a single fire start in the middle.
fn open_floor(difficulty: Difficulty, walls: Vec<Wall>) -> MapLayout {
    MapLayout {
        environment: Environment::Factory,
        name: "Open Floor".to_string(),
        rooms: Vec::new(),
        hallways: vec![Hallway::new(20.0, 20.0, 280.0, 280.0)],
        walls,
        start_position: p(40.0, 40.0),
        exits: vec![p(290.0, 290.0)],
        fire_starts: vec![p(160.0, 160.0)],
        trapped_people: Vec::new(),
        extinguishers: Vec::new(),
        difficulty,
    }
}

fn submit(engine: &mut SimulationEngine, points: Vec<Position>) -> GameStateSnapshot {
    engine.queue_command(PlayerCommand::SubmitRoute { points });
    engine.step(0)
}

fn run_until_completed(engine: &mut SimulationEngine, max_ticks: usize) -> GameStateSnapshot {
    let mut snap = engine.tick();
    for _ in 0..max_ticks {
        if snap.phase == GamePhase::Completed {
            return snap;
        }
        snap = engine.tick();
    }
    snap
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = || SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = engine_with(scenario::training_office(), config());
    let mut engine_b = engine_with(scenario::training_office(), config());

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_command(PlayerCommand::SubmitRoute {
            points: escape_route(),
        });
    }

    for i in 0..40 {
        if i == 20 {
            engine_a.queue_command(PlayerCommand::StartExecution);
            engine_b.queue_command(PlayerCommand::StartExecution);
        }
        let json_a = serde_json::to_string(&engine_a.step(500)).unwrap();
        let json_b = serde_json::to_string(&engine_b.step(500)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed at step {i}");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine_with(
        scenario::training_office(),
        SimConfig {
            seed: 111,
            ..Default::default()
        },
    );
    let mut engine_b = engine_with(
        scenario::training_office(),
        SimConfig {
            seed: 222,
            ..Default::default()
        },
    );

    let mut diverged = false;
    for _ in 0..11 {
        let fires_a = serde_json::to_string(&engine_a.step(5000).fires).unwrap();
        let fires_b = serde_json::to_string(&engine_b.step(5000).fires).unwrap();
        if fires_a != fires_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent fires");
}

// ---- Phases ----

#[test]
fn test_start_game_enters_planning() {
    let mut engine = office();
    let snap = engine.snapshot();

    assert_eq!(snap.phase, GamePhase::Planning);
    assert_eq!(snap.map_name, "Training Office");
    assert_eq!(snap.time_remaining, 60);
    assert_eq!(snap.fires.len(), 1);
    assert_eq!(snap.fires[0].intensity, FireIntensity::Medium);
    assert_eq!(snap.smoke.len(), 1);
    assert_eq!(snap.smoke[0].radius, 62.5);
    assert_eq!(snap.people.len(), 2);
    assert_eq!(snap.extinguishers.len(), 1);
    assert!(snap.exits.iter().all(|e| e.status == ExitStatus::Safe));
    assert_eq!(snap.player.position, p(160.0, 160.0));
}

#[test]
fn test_time_limit_follows_difficulty_and_config() {
    let school = engine_with(scenario::school_wing(), SimConfig::default());
    assert_eq!(school.score().time_remaining, 45);

    let custom = engine_with(
        scenario::school_wing(),
        SimConfig {
            time_limit_secs: Some(120),
            ..Default::default()
        },
    );
    assert_eq!(custom.score().time_remaining, 120);
}

#[test]
fn test_commands_ignored_in_tutorial() {
    let mut engine = SimulationEngine::new(scenario::training_office(), SimConfig::default());
    engine.queue_commands([
        PlayerCommand::SubmitRoute {
            points: escape_route(),
        },
        PlayerCommand::StartExecution,
        PlayerCommand::Reset,
    ]);
    let snap = engine.step(10_000);

    assert_eq!(snap.phase, GamePhase::Tutorial);
    assert!(snap.route.points.is_empty());
    assert_eq!(snap.time_remaining, 60, "countdown must not run before start");
    assert_eq!(snap.smoke[0].age, 0, "hazards must not run before start");
}

#[test]
fn test_start_execution_requires_route() {
    let mut engine = office();
    engine.queue_command(PlayerCommand::StartExecution);
    let snap = engine.step(0);
    assert_eq!(snap.phase, GamePhase::Planning);
}

#[test]
fn test_hazard_tick_runs_during_planning() {
    let mut engine = office();
    let snap = engine.step(4999);
    assert_eq!(snap.smoke[0].age, 0);
    assert_eq!(snap.time_remaining, 56);

    let snap = engine.step(1);
    assert!(snap
        .smoke
        .iter()
        .any(|z| z.center == p(160.0, 80.0) && z.age == 1 && z.radius == 66.5));
    assert_eq!(snap.time_remaining, 55);
    assert_eq!(snap.time.elapsed_ms, 5000);
}

// ---- Route planning ----

#[test]
fn test_safe_route_scores_full() {
    let mut engine = office();
    let snap = submit(&mut engine, escape_route());

    assert_eq!(snap.route.safety_score, 100);
    assert!((snap.route.distance - 230.0).abs() < 1e-9);
    assert!(snap.player.has_extinguisher, "route passes the extinguisher");
    assert_eq!(snap.player.charge, 3);
    assert!(snap.extinguishers[0].is_picked_up);
    assert_eq!(
        snap.feedback_events,
        vec![FeedbackEvent::RouteScored {
            feedback: Feedback::Success,
            safety_score: 100
        }]
    );
}

#[test]
fn test_each_point_in_fire_costs_30() {
    let mut engine = engine_with(open_floor(Difficulty::Easy, Vec::new()), SimConfig::default());

    let snap = submit(&mut engine, vec![p(150.0, 160.0), p(160.0, 160.0), p(170.0, 160.0)]);
    assert_eq!(snap.route.safety_score, 10);
    assert_eq!(
        snap.feedback_events,
        vec![FeedbackEvent::RouteScored {
            feedback: Feedback::Error,
            safety_score: 10
        }]
    );

    let snap = submit(
        &mut engine,
        vec![p(150.0, 160.0), p(155.0, 160.0), p(160.0, 160.0), p(170.0, 160.0)],
    );
    assert_eq!(snap.route.safety_score, 0);
}

#[test]
fn test_planning_rescue_is_not_cumulative() {
    let mut engine = office();
    let via_person = densify(&[p(160.0, 160.0), p(60.0, 160.0), p(60.0, 60.0)], 5.0);

    let snap = submit(&mut engine, via_person.clone());
    assert_eq!(engine.followers().len(), 1);
    assert_eq!(snap.people.iter().filter(|p| p.is_rescued).count(), 1);
    assert_eq!(snap.followers.len(), 1);
    assert_eq!(snap.followers[0].position, p(60.0, 80.0));

    submit(&mut engine, via_person);
    assert_eq!(engine.followers().len(), 1);

    let snap = submit(&mut engine, escape_route());
    assert!(engine.followers().is_empty());
    assert!(snap.people.iter().all(|p| !p.is_rescued && !p.is_follower));
}

#[test]
fn test_route_leaving_corridor_is_rejected() {
    let mut engine = office();
    submit(&mut engine, escape_route());

    let snap = submit(&mut engine, vec![p(160.0, 160.0), p(160.0, 100.0)]);
    assert_eq!(
        snap.feedback_events,
        vec![FeedbackEvent::RouteRejected {
            reason: "Route leaves corridor area".to_string()
        }]
    );
    assert_eq!(snap.route.points, escape_route(), "previous route is kept");
}

#[test]
fn test_route_through_wall_is_rejected() {
    let walls = vec![Wall::new((160.0, 100.0), (160.0, 220.0))];
    let mut engine = engine_with(open_floor(Difficulty::Easy, walls), SimConfig::default());

    let snap = submit(&mut engine, vec![p(100.0, 60.0), p(220.0, 60.0)]);
    assert_eq!(snap.route.points.len(), 2, "route above the wall is fine");

    let snap = submit(&mut engine, vec![p(100.0, 160.0), p(220.0, 160.0)]);
    assert_eq!(
        snap.feedback_events,
        vec![FeedbackEvent::RouteRejected {
            reason: CROSSES_WALL.to_string()
        }]
    );
    assert_eq!(snap.route.points, vec![p(100.0, 60.0), p(220.0, 60.0)]);
}

#[test]
fn test_drawn_points_are_snapped_and_submitted() {
    let mut engine = office();
    engine.queue_commands([
        PlayerCommand::AppendRoutePoint { point: p(160.0, 100.0) },
        PlayerCommand::AppendRoutePoint { point: p(100.0, 150.0) },
        PlayerCommand::AppendRoutePoint { point: p(60.0, 150.0) },
    ]);
    let snap = engine.step(0);
    assert_eq!(snap.route.pending, vec![p(160.0, 140.0), p(100.0, 150.0), p(60.0, 150.0)]);
    assert!(snap.route.points.is_empty());

    engine.queue_command(PlayerCommand::FinishRoute);
    let snap = engine.step(0);
    assert!(snap.route.pending.is_empty());
    assert_eq!(snap.route.points, vec![p(160.0, 140.0), p(100.0, 150.0), p(60.0, 150.0)]);
    assert!(snap.player.has_extinguisher);
}

#[test]
fn test_clear_route_undoes_scoring() {
    let mut engine = office();
    let via_person = densify(&[p(160.0, 160.0), p(60.0, 160.0), p(60.0, 60.0)], 5.0);
    submit(&mut engine, via_person);
    assert_eq!(engine.followers().len(), 1);

    engine.queue_command(PlayerCommand::ClearRoute);
    engine.queue_command(PlayerCommand::StartExecution);
    let snap = engine.step(0);

    assert_eq!(snap.phase, GamePhase::Planning);
    assert!(snap.route.points.is_empty());
    assert!(snap.followers.is_empty());
    assert!(snap.people.iter().all(|p| !p.is_rescued));
    // The extinguisher stays in hand.
    assert!(snap.player.has_extinguisher);
    assert_eq!(snap.player.charge, 3);
    assert!(snap.extinguishers[0].is_picked_up);
}

#[test]
fn test_resubmitting_route_does_not_refill_extinguisher() {
    let mut engine = office();
    submit(&mut engine, escape_route());

    for _ in 0..3 {
        engine.queue_command(PlayerCommand::ApplyExtinguisher { point: p(300.0, 300.0) });
    }
    let snap = engine.step(0);
    assert_eq!(snap.player.charge, 0);
    assert!(!snap.player.has_extinguisher);

    let snap = submit(&mut engine, escape_route());
    assert_eq!(snap.route.safety_score, 100);
    assert_eq!(snap.player.charge, 0);
    assert!(!snap.player.has_extinguisher);
    assert!(snap.extinguishers[0].is_picked_up);
}

// ---- Extinguisher ----

#[test]
fn test_spray_suppresses_and_spends_charge() {
    let mut engine = office();
    submit(&mut engine, escape_route());

    engine.queue_command(PlayerCommand::ApplyExtinguisher { point: p(160.0, 100.0) });
    let snap = engine.step(0);

    assert!(snap.fires[0].is_suppressed);
    assert_eq!(snap.player.charge, 2);
    assert!(snap.player.has_extinguisher);
    assert_eq!(snap.smoke[0].age, 1, "spraying evolves the smoke");
    assert_eq!(
        snap.feedback_events,
        vec![FeedbackEvent::FireSuppressed {
            fires: 1,
            charge_left: 2
        }]
    );
}

/// Block the south-west exit with a small fire, then spray it.
fn spray_blocked_exit(engine: &mut SimulationEngine) {
    let exit_position = p(60.0, 290.0);
    let exit_status = |snap: &GameStateSnapshot| {
        snap.exits
            .iter()
            .find(|e| e.position == exit_position)
            .map(|e| e.status)
    };

    engine.spawn_test_fire(p(60.0, 280.0), FireIntensity::Small);
    let snap = engine.step(0);
    assert_eq!(exit_status(&snap), Some(ExitStatus::Blocked));

    engine.queue_command(PlayerCommand::ApplyExtinguisher { point: p(60.0, 280.0) });
    let snap = engine.step(0);
    assert!(snap.fires.iter().any(|f| f.position == p(60.0, 280.0) && f.is_suppressed));
    assert_eq!(exit_status(&snap), Some(ExitStatus::Safe));
    assert_eq!(snap.player.charge, 2);
}

#[test]
fn test_spray_reopens_blocked_exit_while_planning() {
    let mut engine = office();
    submit(&mut engine, escape_route());

    spray_blocked_exit(&mut engine);
    assert_eq!(engine.phase(), GamePhase::Planning);
}

#[test]
fn test_spray_reopens_blocked_exit_while_executing() {
    let mut engine = office();
    submit(&mut engine, escape_route());
    engine.queue_command(PlayerCommand::StartExecution);
    engine.step(0);

    spray_blocked_exit(&mut engine);
    assert_eq!(engine.phase(), GamePhase::Executing);
    assert_eq!(engine.player().route_index, 0);
}

#[test]
fn test_spray_without_extinguisher_is_ignored() {
    let mut engine = office();
    engine.queue_command(PlayerCommand::ApplyExtinguisher { point: p(160.0, 80.0) });
    let snap = engine.step(0);

    assert!(!snap.fires[0].is_suppressed);
    assert!(snap.feedback_events.is_empty());
}

// ---- Execution ----

#[test]
fn test_escape_scores_and_grades() {
    let mut engine = office();
    submit(&mut engine, escape_route());
    engine.queue_command(PlayerCommand::StartExecution);

    let snap = run_until_completed(&mut engine, 100);

    assert_eq!(snap.phase, GamePhase::Completed);
    let summary = snap.summary.expect("completed run has a summary");
    assert_eq!(summary.outcome, Outcome::Escaped);
    assert_eq!(summary.time_remaining, 58);
    assert_eq!(summary.score, 1000 + 58 * 10 + 200);
    assert_eq!(summary.grade, Grade::A);
    assert_eq!(snap.grade, Some(Grade::A));
    assert_eq!(snap.player.route_index, 41);
    assert!(snap.feedback_events.contains(&FeedbackEvent::Completed {
        outcome: Outcome::Escaped,
        grade: Grade::A
    }));
}

#[test]
fn test_completed_run_stops_all_timers() {
    let mut engine = office();
    submit(&mut engine, escape_route());
    engine.queue_command(PlayerCommand::StartExecution);
    let done = run_until_completed(&mut engine, 100);

    let later = engine.step(20_000);
    assert_eq!(later.phase, GamePhase::Completed);
    assert_eq!(later.time_remaining, done.time_remaining);
    assert_eq!(later.score, done.score);
    assert_eq!(later.time, done.time);
    for kind in [TimerKind::Countdown, TimerKind::Hazard, TimerKind::Execution] {
        assert!(!engine.scheduler().is_scheduled(kind));
    }
}

#[test]
fn test_route_end_without_exit_completes() {
    let mut engine = office();
    submit(&mut engine, densify(&[p(160.0, 160.0), p(100.0, 160.0)], 5.0));
    engine.queue_command(PlayerCommand::StartExecution);

    let snap = run_until_completed(&mut engine, 100);
    let summary = snap.summary.expect("summary");
    assert_eq!(summary.outcome, Outcome::RouteExhausted);
    assert_ne!(summary.grade, Grade::F);
    assert!(summary.score >= 1000);
}

#[test]
fn test_followers_trail_the_player() {
    let mut engine = office();
    let route = densify(
        &[p(160.0, 160.0), p(60.0, 160.0), p(60.0, 80.0), p(60.0, 290.0)],
        5.0,
    );
    submit(&mut engine, route.clone());
    assert_eq!(engine.followers().len(), 1);
    engine.queue_command(PlayerCommand::StartExecution);
    engine.step(0);

    let mut snap = engine.tick();
    for _ in 1..10 {
        snap = engine.tick();
    }

    assert_eq!(snap.player.route_index, 10);
    assert_eq!(snap.followers.len(), 1);
    assert_eq!(snap.followers[0].route_index, 2);
    assert_eq!(snap.followers[0].position, route[2]);
}

#[test]
fn test_auto_suppression_reopens_blocked_exit() {
    let mut engine = office();
    submit(&mut engine, escape_route());
    engine.spawn_test_fire(p(60.0, 280.0), FireIntensity::Small);

    let snap = engine.step(0);
    let exit = snap
        .exits
        .iter()
        .find(|e| e.position == p(60.0, 290.0))
        .expect("south-west exit");
    assert_eq!(exit.status, ExitStatus::Blocked);

    engine.queue_command(PlayerCommand::StartExecution);
    let snap = run_until_completed(&mut engine, 100);

    let summary = snap.summary.expect("summary");
    assert_eq!(summary.outcome, Outcome::Escaped);
    assert_eq!(snap.player.charge, 2);
    assert!(snap.fires.iter().any(|f| f.position == p(60.0, 280.0) && f.is_suppressed));
}

#[test]
fn test_sustained_heavy_smoke_fails_run() {
    let mut engine = engine_with(open_floor(Difficulty::Hard, Vec::new()), SimConfig::default());
    let route = densify(&[p(100.0, 140.0), p(100.0, 180.0), p(100.0, 140.0)], 2.0);
    let snap = submit(&mut engine, route);
    assert_eq!(snap.route.safety_score, 0);

    engine.queue_command(PlayerCommand::StartExecution);
    let snap = run_until_completed(&mut engine, 60);

    let summary = snap.summary.expect("summary");
    assert_eq!(summary.outcome, Outcome::SmokeOverwhelmed);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.grade, Some(Grade::F));
    assert_eq!(engine.time().tick, 34);
}

#[test]
fn test_heavy_smoke_drains_score_by_tick() {
    let mut engine = engine_with(open_floor(Difficulty::Easy, Vec::new()), SimConfig::default());
    engine.spawn_test_smoke(SmokeZone {
        center: p(40.0, 40.0),
        radius: 30.0,
        density: SmokeDensity::Heavy,
        age: 0,
    });
    submit(&mut engine, densify(&[p(40.0, 40.0), p(40.0, 140.0)], 5.0));
    engine.queue_command(PlayerCommand::StartExecution);
    engine.step(0);

    let snap = engine.tick();
    assert!(snap.player.in_heavy_smoke);
    assert_eq!(snap.player.smoke_exposure_ticks, 1);
    assert_eq!(snap.player.route_index, 1);
    assert_eq!(
        snap.feedback_events,
        vec![FeedbackEvent::SmokeExposure { consecutive_ticks: 1 }]
    );

    let snap = engine.tick();
    assert_eq!(snap.player.smoke_exposure_ticks, 2);
    assert_eq!(snap.player.route_index, 1, "even exposure tick skips movement");
}

#[test]
fn test_countdown_expiry_fails_run() {
    let mut engine = engine_with(
        scenario::training_office(),
        SimConfig {
            time_limit_secs: Some(5),
            ..Default::default()
        },
    );

    let snap = engine.step(4000);
    assert_eq!(snap.phase, GamePhase::Planning);
    assert_eq!(snap.time_remaining, 1);

    let snap = engine.step(1000);
    assert_eq!(snap.phase, GamePhase::Completed);
    let summary = snap.summary.expect("summary");
    assert_eq!(summary.outcome, Outcome::TimedOut);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.grade, Grade::F);
}

// ---- Scheduling and reset ----

#[test]
fn test_starting_execution_keeps_countdown_and_hazard_phase() {
    let mut planning = office();
    let mut walking = office();
    submit(&mut planning, escape_route());
    submit(&mut walking, escape_route());

    planning.step(4900);
    walking.step(4900);
    walking.queue_command(PlayerCommand::StartExecution);

    let stayed = planning.step(200);
    let walked = walking.step(200);

    assert_eq!(walked.phase, GamePhase::Executing);
    assert!(walked.player.route_index > 0);
    assert_eq!(stayed.time_remaining, 55);
    assert_eq!(walked.time_remaining, stayed.time_remaining);

    let ages = |snap: &GameStateSnapshot| -> Vec<(Position, u32)> {
        snap.smoke.iter().map(|z| (z.center, z.age)).collect()
    };
    assert!(ages(&walked).iter().any(|&(center, age)| center == p(160.0, 80.0) && age == 1));
    assert_eq!(ages(&walked), ages(&stayed));
}

#[test]
fn test_stale_tick_is_discarded() {
    let mut engine = office();
    let current = engine.scheduler().generation();

    engine.dispatch(ScheduledTick {
        kind: TimerKind::Countdown,
        generation: current - 1,
        due_ms: 0,
    });
    assert_eq!(engine.score().time_remaining, 60);

    engine.dispatch(ScheduledTick {
        kind: TimerKind::Countdown,
        generation: current,
        due_ms: 0,
    });
    assert_eq!(engine.score().time_remaining, 59);
}

#[test]
fn test_execution_tick_ignored_while_planning() {
    let mut engine = office();
    submit(&mut engine, escape_route());
    let generation = engine.scheduler().generation();
    engine.dispatch(ScheduledTick {
        kind: TimerKind::Execution,
        generation,
        due_ms: 0,
    });
    assert_eq!(engine.player().route_index, 0);
    assert_eq!(engine.time().tick, 0);
}

#[test]
fn test_reset_from_completed_reloads_template() {
    let mut engine = engine_with(
        scenario::training_office(),
        SimConfig {
            time_limit_secs: Some(2),
            ..Default::default()
        },
    );
    submit(&mut engine, escape_route());
    engine.queue_command(PlayerCommand::ApplyExtinguisher { point: p(160.0, 80.0) });
    let snap = engine.step(2000);
    assert_eq!(snap.phase, GamePhase::Completed);

    engine.queue_command(PlayerCommand::Reset);
    let snap = engine.step(0);

    assert_eq!(snap.phase, GamePhase::Planning);
    assert_eq!(snap.time_remaining, 2);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.grade, None);
    assert!(snap.summary.is_none());
    assert!(snap.route.points.is_empty());
    assert_eq!(snap.fires.len(), 1);
    assert!(!snap.fires[0].is_suppressed);
    assert_eq!(snap.player.charge, 0);
    assert_eq!(snap.time.elapsed_ms, 0);

    // The fresh run keeps counting down.
    let snap = engine.step(1000);
    assert_eq!(snap.time_remaining, 1);
}

#[test]
fn test_reset_during_execution_cancels_walk() {
    let mut engine = office();
    submit(&mut engine, escape_route());
    engine.queue_command(PlayerCommand::StartExecution);
    engine.step(0);
    for _ in 0..5 {
        engine.tick();
    }
    assert_eq!(engine.player().route_index, 5);

    engine.queue_command(PlayerCommand::Reset);
    let snap = engine.step(600);
    assert_eq!(snap.phase, GamePhase::Planning);
    assert_eq!(snap.player.route_index, 0);
    assert_eq!(snap.player.position, p(160.0, 160.0));
    assert!(!engine.scheduler().is_scheduled(TimerKind::Execution));
}
