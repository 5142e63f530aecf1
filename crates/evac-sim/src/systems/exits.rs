//! Exit status system: rates every exit against the current fires and smoke.

use hecs::World;

use evac_core::components::{ExitDoor, FireHazard, SmokeZone};
use evac_core::constants::{EXIT_BLOCK_RADIUS, EXIT_RISK_RADIUS};
use evac_core::enums::ExitStatus;
use evac_core::types::Position;

/// Recompute `ExitDoor::status` for every exit.
pub fn run(world: &mut World) {
    let fires: Vec<FireHazard> = world.query::<&FireHazard>().iter().map(|(_, f)| *f).collect();
    let smoke: Vec<SmokeZone> = world.query::<&SmokeZone>().iter().map(|(_, z)| *z).collect();

    for (_entity, exit) in world.query_mut::<&mut ExitDoor>() {
        exit.status = exit_status(&exit.position, &fires, &smoke);
    }
}

pub fn exit_status(exit: &Position, fires: &[FireHazard], smoke: &[SmokeZone]) -> ExitStatus {
    let blocked = fires
        .iter()
        .any(|f| !f.is_suppressed && f.position.distance_to(exit) <= EXIT_BLOCK_RADIUS);
    if blocked {
        return ExitStatus::Blocked;
    }

    let risky = smoke
        .iter()
        .any(|z| z.center.distance_to(exit) <= EXIT_RISK_RADIUS);
    if risky {
        ExitStatus::Risky
    } else {
        ExitStatus::Safe
    }
}
