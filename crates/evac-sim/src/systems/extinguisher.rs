//! Extinguisher system: pickups, manual spraying and auto-suppression.

use hecs::World;

use evac_core::components::{Extinguisher, FireHazard};
use evac_core::constants::*;
use evac_core::events::FeedbackEvent;
use evac_core::types::Position;

use crate::player::PlayerState;

/// Spray at `point`: one charge, suppresses every burning fire within reach.
///
/// Returns the number of fires put out, or `None` if the player has no
/// charge. Smoke and exits are left to the caller.
pub fn apply(
    world: &mut World,
    player: &mut PlayerState,
    point: &Position,
    events: &mut Vec<FeedbackEvent>,
) -> Option<u32> {
    if !player.spend_charge() {
        return None;
    }

    let mut suppressed = 0u32;
    for (_entity, fire) in world.query_mut::<&mut FireHazard>() {
        if !fire.is_suppressed && fire.position.distance_to(point) <= SUPPRESSION_RADIUS {
            fire.is_suppressed = true;
            suppressed += 1;
        }
    }

    events.push(FeedbackEvent::FireSuppressed {
        fires: suppressed,
        charge_left: player.charge,
    });
    Some(suppressed)
}

/// Pick up any extinguisher within reach of the player. A pickup refills to
/// full charge.
pub fn auto_pickup(world: &mut World, player: &mut PlayerState, events: &mut Vec<FeedbackEvent>) {
    for (_entity, ext) in world.query_mut::<&mut Extinguisher>() {
        if !ext.is_picked_up && ext.position.distance_to(&player.position) <= PICKUP_RADIUS {
            ext.is_picked_up = true;
            player.has_extinguisher = true;
            player.charge = EXTINGUISHER_CHARGES;
            tracing::debug!(x = ext.position.x, y = ext.position.y, "extinguisher picked up");
            events.push(FeedbackEvent::ExtinguisherPickedUp {
                charge: player.charge,
            });
        }
    }
}

/// Knock down nearby fires one step each while charge lasts.
///
/// Returns how many fires were touched.
pub fn auto_suppress(world: &mut World, player: &mut PlayerState, events: &mut Vec<FeedbackEvent>) -> u32 {
    if !player.has_extinguisher {
        return 0;
    }

    let mut touched = 0u32;
    for (_entity, fire) in world.query_mut::<&mut FireHazard>() {
        if player.charge == 0 {
            break;
        }
        if fire.is_suppressed || fire.position.distance_to(&player.position) > SUPPRESSION_RADIUS {
            continue;
        }
        match fire.intensity.stepped_down() {
            Some(lower) => fire.intensity = lower,
            None => fire.is_suppressed = true,
        }
        player.spend_charge();
        touched += 1;
    }

    if touched > 0 {
        events.push(FeedbackEvent::FireSuppressed {
            fires: touched,
            charge_left: player.charge,
        });
    }
    touched
}
