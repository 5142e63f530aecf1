//! State shared between the stdin reader and the game loop thread.

use evac_core::commands::PlayerCommand;
use evac_core::enums::GamePhase;
use evac_core::state::GameStateSnapshot;

/// Commands sent from the IPC layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Decides which loop ticks produce a snapshot line.
///
/// A snapshot goes out on the first tick, whenever the phase changes or
/// feedback events are pending, and otherwise every `every` ticks.
/// `every == 0` emits on every tick.
#[derive(Debug, Clone)]
pub struct SnapshotThrottle {
    every: u64,
    ticks_since_emit: u64,
    last_phase: Option<GamePhase>,
}

impl SnapshotThrottle {
    pub fn new(every: u64) -> Self {
        Self {
            every,
            ticks_since_emit: 0,
            last_phase: None,
        }
    }

    /// Record one tick; returns whether `snapshot` should be emitted.
    pub fn should_emit(&mut self, snapshot: &GameStateSnapshot) -> bool {
        self.ticks_since_emit += 1;

        let phase_changed = self.last_phase != Some(snapshot.phase);
        let emit = phase_changed
            || !snapshot.feedback_events.is_empty()
            || self.ticks_since_emit >= self.every;

        if emit {
            self.ticks_since_emit = 0;
            self.last_phase = Some(snapshot.phase);
        }
        emit
    }
}
