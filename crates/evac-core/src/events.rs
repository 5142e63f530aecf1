//! Events emitted by the simulation for haptic, sound, and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete cues drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// A route was scored in planning.
    RouteScored {
        feedback: Feedback,
        safety_score: u32,
    },
    /// A submitted route failed the corridor or wall check.
    RouteRejected { reason: String },
    /// An extinguisher was collected (by the route or by walking past it).
    ExtinguisherPickedUp { charge: u32 },
    /// A spray or auto-suppression touched at least one fire.
    FireSuppressed { fires: u32, charge_left: u32 },
    /// Someone joined the evacuation.
    PersonRescued { follower_index: usize },
    /// Player is standing in heavy smoke.
    SmokeExposure { consecutive_ticks: u32 },
    /// The run is over.
    Completed { outcome: Outcome, grade: Grade },
}

impl FeedbackEvent {
    /// The haptic/sound level this event maps to.
    pub fn feedback(&self) -> Feedback {
        match self {
            FeedbackEvent::RouteScored { feedback, .. } => *feedback,
            FeedbackEvent::RouteRejected { .. } => Feedback::Error,
            FeedbackEvent::ExtinguisherPickedUp { .. }
            | FeedbackEvent::FireSuppressed { .. }
            | FeedbackEvent::PersonRescued { .. } => Feedback::Success,
            FeedbackEvent::SmokeExposure { .. } => Feedback::Warning,
            FeedbackEvent::Completed { outcome, .. } => {
                if outcome.is_failure() {
                    Feedback::Error
                } else {
                    Feedback::Success
                }
            }
        }
    }
}
