//! JSON-lines IPC: player commands in on stdin, snapshots out on stdout.

use std::io::{BufRead, Write};
use std::sync::mpsc;

use thiserror::Error;

use evac_core::commands::PlayerCommand;
use evac_core::layout::LayoutError;
use evac_core::state::GameStateSnapshot;

use crate::state::GameLoopCommand;

/// Errors from the host side of the simulation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("game loop has stopped")]
    LoopStopped,
    #[error("game loop thread panicked")]
    LoopPanicked,
}

/// Parse one input line. Blank lines carry no command.
pub fn parse_command(line: &str) -> Result<Option<PlayerCommand>, AppError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(trimmed)?))
}

/// Forward every command line from `reader` to the game loop, then ask it
/// to shut down at end of input. Malformed lines are logged and skipped.
pub fn forward_commands<R: BufRead>(
    reader: R,
    tx: &mpsc::Sender<GameLoopCommand>,
) -> Result<(), AppError> {
    for line in reader.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                tracing::debug!(?command, "command received");
                tx.send(GameLoopCommand::PlayerCommand(command))
                    .map_err(|_| AppError::LoopStopped)?;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "ignoring malformed command line"),
        }
    }

    // The loop may already be gone; nothing left to tell it then.
    let _ = tx.send(GameLoopCommand::Shutdown);
    Ok(())
}

/// Write one snapshot as a single JSON line and flush.
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &GameStateSnapshot) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, snapshot)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
