//! Simulation engine for the drill.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! fires the periodic countdown/hazard/execution ticks, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use evac_core::commands::PlayerCommand;
use evac_core::constants::*;
use evac_core::enums::{GamePhase, Outcome};
use evac_core::events::FeedbackEvent;
use evac_core::layout::MapLayout;
use evac_core::state::GameStateSnapshot;
use evac_core::types::{Position, SimTime};
use evac_geometry::{route_crosses_wall, snap, validate_route};

use crate::player::{PlayerState, RouteState, ScoreState};
use crate::scheduler::{ScheduledTick, Scheduler, TimerKind};
use crate::systems;
use crate::systems::execution::StepResult;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// Reason reported when a route passes through a wall.
pub const CROSSES_WALL: &str = "Route crosses a wall";

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Countdown override; `None` uses the layout's difficulty.
    pub time_limit_secs: Option<u32>,
    /// Smoke radius growth per hazard tick.
    pub smoke_expansion: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_limit_secs: None,
            smoke_expansion: SMOKE_EXPANSION_PER_TICK,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    layout: MapLayout,
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    scheduler: Scheduler,
    command_queue: VecDeque<PlayerCommand>,
    feedback_events: Vec<FeedbackEvent>,
    route: RouteState,
    player: PlayerState,
    score: ScoreState,
    /// Rescued people in rescue order.
    followers: Vec<Entity>,
    /// Scheduler time at which the current run started.
    started_at_ms: u64,
}

impl SimulationEngine {
    /// Create an engine for `layout`. The world is populated right away so
    /// the briefing can show the map; hazards stay frozen until `StartGame`.
    pub fn new(layout: MapLayout, config: SimConfig) -> Self {
        let time_limit = config
            .time_limit_secs
            .unwrap_or_else(|| layout.difficulty.time_limit_secs());
        let mut world = World::new();
        world_setup::setup_run(&mut world, &layout);

        Self {
            player: PlayerState::at(layout.start_position),
            score: ScoreState::new(time_limit),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            layout,
            config,
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            scheduler: Scheduler::new(),
            command_queue: VecDeque::new(),
            feedback_events: Vec::new(),
            route: RouteState::default(),
            followers: Vec::new(),
            started_at_ms: 0,
        }
    }

    /// Queue a player command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, then advance simulation time by `dt_ms`,
    /// firing every timer that falls due in order.
    pub fn step(&mut self, dt_ms: u64) -> GameStateSnapshot {
        self.process_commands();

        let until = self.scheduler.now_ms() + dt_ms;
        while let Some(tick) = self.scheduler.next_due(until) {
            self.dispatch(tick);
        }
        self.scheduler.advance_to(until);

        if self.is_running() {
            self.time.elapsed_ms = until.saturating_sub(self.started_at_ms);
        }

        self.snapshot()
    }

    /// Advance by one execution period.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.step(EXECUTION_PERIOD_MS)
    }

    /// Build a snapshot of the current state, draining pending feedback events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let feedback_events = std::mem::take(&mut self.feedback_events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: &self.time,
                phase: self.phase,
                map_name: &self.layout.name,
                route: &self.route,
                player: &self.player,
                score: &self.score,
                followers: &self.followers,
            },
            feedback_events,
        )
    }

    /// Run a due timer. Ticks from a cancelled generation, or for a timer
    /// the current phase does not run, are dropped.
    pub fn dispatch(&mut self, tick: ScheduledTick) {
        if !self.scheduler.is_current(&tick) {
            tracing::debug!(?tick, current = self.scheduler.generation(), "stale tick discarded");
            return;
        }

        match (tick.kind, self.phase) {
            (TimerKind::Countdown, GamePhase::Planning | GamePhase::Executing) => self.countdown_tick(),
            (TimerKind::Hazard, GamePhase::Planning | GamePhase::Executing) => self.hazard_tick(),
            (TimerKind::Execution, GamePhase::Executing) => self.execution_tick(),
            (kind, phase) => tracing::debug!(?kind, ?phase, "tick ignored in this phase"),
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn layout(&self) -> &MapLayout {
        &self.layout
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn route(&self) -> &RouteState {
        &self.route
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn followers(&self) -> &[Entity] {
        &self.followers
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Spawn an extra fire (for tests).
    #[cfg(test)]
    pub fn spawn_test_fire(
        &mut self,
        position: Position,
        intensity: evac_core::enums::FireIntensity,
    ) -> Entity {
        let entity = world_setup::spawn_fire(&mut self.world, position, intensity);
        systems::exits::run(&mut self.world);
        entity
    }

    /// Spawn an extra smoke zone (for tests).
    #[cfg(test)]
    pub fn spawn_test_smoke(&mut self, zone: evac_core::components::SmokeZone) -> Entity {
        let entity = self.world.spawn((zone,));
        systems::exits::run(&mut self.world);
        entity
    }

    fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Planning | GamePhase::Executing)
    }

    fn time_limit(&self) -> u32 {
        self.config
            .time_limit_secs
            .unwrap_or_else(|| self.layout.difficulty.time_limit_secs())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands the phase does not accept
    /// are dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        match (command, self.phase) {
            (PlayerCommand::StartGame, GamePhase::Tutorial) => self.start_run(),
            (PlayerCommand::Reset, GamePhase::Planning | GamePhase::Executing | GamePhase::Completed) => {
                self.start_run()
            }
            (PlayerCommand::StartExecution, GamePhase::Planning) if !self.route.is_empty() => {
                self.begin_execution()
            }
            (PlayerCommand::AppendRoutePoint { point }, GamePhase::Planning) => {
                let snapped = snap(point, &self.layout.hallways);
                self.route.pending.push(snapped);
            }
            (PlayerCommand::ClearRoute, GamePhase::Planning) => {
                self.route.pending.clear();
                systems::route_scoring::clear(&mut self.world, &mut self.route, &mut self.followers);
            }
            (PlayerCommand::FinishRoute, GamePhase::Planning) => {
                let points = std::mem::take(&mut self.route.pending);
                self.submit_route(points);
            }
            (PlayerCommand::SubmitRoute { points }, GamePhase::Planning) => self.submit_route(points),
            (PlayerCommand::ApplyExtinguisher { point }, GamePhase::Planning | GamePhase::Executing) => {
                self.apply_extinguisher(point)
            }
            (command, phase) => tracing::debug!(?command, ?phase, "command rejected"),
        }
    }

    /// (Re)seed the world from the layout and enter planning.
    fn start_run(&mut self) {
        world_setup::setup_run(&mut self.world, &self.layout);
        self.route = RouteState::default();
        self.player = PlayerState::at(self.layout.start_position);
        self.followers.clear();
        self.score = ScoreState::new(self.time_limit());
        self.time = SimTime::default();
        self.started_at_ms = self.scheduler.now_ms();

        self.scheduler.cancel_all();
        self.scheduler.schedule_every(TimerKind::Countdown, COUNTDOWN_PERIOD_MS);
        self.scheduler.schedule_every(TimerKind::Hazard, HAZARD_PERIOD_MS);
        self.phase = GamePhase::Planning;

        tracing::info!(
            map = %self.layout.name,
            time_limit = self.score.time_limit,
            "planning started"
        );
    }

    /// Countdown and hazard timers keep their phase from planning; only the
    /// walk timer is added.
    fn begin_execution(&mut self) {
        self.scheduler.schedule_every(TimerKind::Execution, EXECUTION_PERIOD_MS);

        self.player.route_index = 0;
        self.player.position = self.route.points[0];
        self.player.smoke_exposure_ticks = 0;
        self.player.in_heavy_smoke = false;
        self.phase = GamePhase::Executing;

        tracing::info!(
            points = self.route.points.len(),
            safety = self.route.safety_score,
            "execution started"
        );
    }

    /// Gate a route through the corridor and wall checks, then score it.
    /// A rejected route leaves the previous one in place.
    fn submit_route(&mut self, points: Vec<Position>) {
        let check = validate_route(&points, &self.layout.hallways);
        let rejection = if !check.valid {
            check.reason
        } else if route_crosses_wall(&points, &self.layout.walls) {
            Some(CROSSES_WALL.to_string())
        } else {
            None
        };

        if let Some(reason) = rejection {
            tracing::debug!(%reason, points = points.len(), "route rejected");
            self.feedback_events.push(FeedbackEvent::RouteRejected { reason });
            return;
        }

        systems::route_scoring::run(
            &mut self.world,
            points,
            &mut self.route,
            &mut self.player,
            &mut self.followers,
            &mut self.feedback_events,
        );
    }

    fn apply_extinguisher(&mut self, point: Position) {
        let applied = systems::extinguisher::apply(
            &mut self.world,
            &mut self.player,
            &point,
            &mut self.feedback_events,
        );
        match applied {
            Some(suppressed) => {
                systems::hazard::evolve_smoke(&mut self.world, self.config.smoke_expansion);
                systems::exits::run(&mut self.world);
                tracing::debug!(suppressed, charge_left = self.player.charge, "extinguisher applied");
            }
            None => tracing::debug!("extinguisher applied without charge"),
        }
    }

    /// One second of countdown.
    pub fn countdown_tick(&mut self) {
        self.score.time_remaining = self.score.time_remaining.saturating_sub(1);
        if self.score.time_remaining == 0 {
            self.finish(Outcome::TimedOut);
        }
    }

    /// One hazard evolution: fire spread, smoke, exits.
    pub fn hazard_tick(&mut self) {
        systems::hazard::run(
            &mut self.world,
            &mut self.rng,
            self.score.time_elapsed_secs(),
            self.config.smoke_expansion,
        );
    }

    /// One step along the route.
    pub fn execution_tick(&mut self) {
        self.time.tick += 1;
        let result = systems::execution::run(
            &mut self.world,
            &self.route,
            &mut self.player,
            &mut self.score,
            &mut self.followers,
            &mut self.feedback_events,
        );
        if let StepResult::Finished(outcome) = result {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.scheduler.cancel_all();

        let rescued = self.followers.len() as u32;
        let summary =
            systems::scoring::finalize(&mut self.score, outcome, rescued, self.route.safety_score);
        self.phase = GamePhase::Completed;
        self.time.elapsed_ms = self.scheduler.now_ms().saturating_sub(self.started_at_ms);

        self.feedback_events.push(FeedbackEvent::Completed {
            outcome,
            grade: summary.grade,
        });
        tracing::info!(
            ?outcome,
            score = summary.score,
            grade = ?summary.grade,
            rescued,
            time_remaining = summary.time_remaining,
            "run completed"
        );
    }
}
