//! Game loop thread: runs the simulation engine in real time and writes
//! snapshot lines.
//!
//! The engine is moved into the thread and owned there. Commands arrive via
//! an `mpsc` channel; snapshots are written as JSON lines to the output.

use std::io::Write;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use evac_core::constants::EXECUTION_PERIOD_MS;
use evac_sim::engine::SimulationEngine;

use crate::ipc::{self, AppError};
use crate::state::{GameLoopCommand, SnapshotThrottle};

/// Wall-clock duration of one loop iteration. Matches the execution timer so
/// the walk advances one route point per iteration.
pub const TICK_DURATION: Duration = Duration::from_millis(EXECUTION_PERIOD_MS);

/// Handle to a running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Wait for the loop thread to finish.
    pub fn join(self) -> Result<(), AppError> {
        self.thread.join().map_err(|_| AppError::LoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop<W>(
    engine: SimulationEngine,
    snapshot_every: u64,
    out: W,
) -> Result<GameLoopHandle, AppError>
where
    W: Write + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("evac-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, SnapshotThrottle::new(snapshot_every), out);
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect, or a failed write.
fn run_game_loop<W: Write>(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut throttle: SnapshotThrottle,
    mut out: W,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    tracing::info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Write the snapshot if anything worth reporting happened
        if throttle.should_emit(&snapshot) {
            if let Err(e) = ipc::write_snapshot(&mut out, &snapshot) {
                tracing::warn!(error = %e, "snapshot output closed, stopping game loop");
                return;
            }
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
