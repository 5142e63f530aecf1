//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Fire severity tier. Controls spread radius and spread/upgrade probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FireIntensity {
    #[default]
    Small,
    Medium,
    Large,
}

/// Smoke severity tier. Only `Heavy` impedes movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokeDensity {
    #[default]
    Light,
    Medium,
    Heavy,
}

/// Exit door safety, recomputed after every hazard change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitStatus {
    #[default]
    Safe,
    Risky,
    Blocked,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Briefing screen; the engine only gates input here.
    #[default]
    Tutorial,
    /// Drawing and scoring an evacuation route. Hazards are live.
    Planning,
    /// The player walks the route.
    Executing,
    /// Terminal until reset.
    Completed,
}

/// Final letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

/// Discrete feedback level for haptic/sound collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Success,
    Warning,
    Error,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Reached an open exit.
    Escaped,
    /// Walked off the end of the drawn route without reaching an exit.
    RouteExhausted,
    /// Countdown hit zero.
    TimedOut,
    /// Too long in heavy smoke.
    SmokeOverwhelmed,
}

/// Building type the map represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Office,
    School,
    Hospital,
    Mall,
    Factory,
}

/// Map difficulty. Sets the default countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FireIntensity {
    /// Radius (map units) inside which a point counts as "in fire".
    pub fn spread_radius(self) -> f64 {
        match self {
            FireIntensity::Small => FIRE_RADIUS_SMALL,
            FireIntensity::Medium => FIRE_RADIUS_MEDIUM,
            FireIntensity::Large => FIRE_RADIUS_LARGE,
        }
    }

    /// Base per-tick spread probability before the elapsed-time bonus.
    pub fn base_spread_probability(self) -> f64 {
        match self {
            FireIntensity::Small => SPREAD_BASE_SMALL,
            FireIntensity::Medium => SPREAD_BASE_MEDIUM,
            FireIntensity::Large => SPREAD_BASE_LARGE,
        }
    }

    /// One step up; `Large` is the ceiling.
    pub fn upgraded(self) -> Self {
        match self {
            FireIntensity::Small => FireIntensity::Medium,
            FireIntensity::Medium | FireIntensity::Large => FireIntensity::Large,
        }
    }

    /// One step down; `None` means the fire is put out.
    pub fn stepped_down(self) -> Option<Self> {
        match self {
            FireIntensity::Large => Some(FireIntensity::Medium),
            FireIntensity::Medium => Some(FireIntensity::Small),
            FireIntensity::Small => None,
        }
    }

    /// Density of the smoke an unsuppressed fire of this intensity produces.
    pub fn smoke_density(self) -> SmokeDensity {
        match self {
            FireIntensity::Small => SmokeDensity::Light,
            FireIntensity::Medium => SmokeDensity::Medium,
            FireIntensity::Large => SmokeDensity::Heavy,
        }
    }
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= GRADE_S_THRESHOLD => Grade::S,
            s if s >= GRADE_A_THRESHOLD => Grade::A,
            s if s >= GRADE_B_THRESHOLD => Grade::B,
            s if s >= GRADE_C_THRESHOLD => Grade::C,
            s if s >= GRADE_D_THRESHOLD => Grade::D,
            _ => Grade::F,
        }
    }
}

impl Feedback {
    /// Feedback for a freshly scored route.
    pub fn for_safety_score(score: u32) -> Self {
        if score >= FEEDBACK_SUCCESS_THRESHOLD {
            Feedback::Success
        } else if score >= FEEDBACK_WARNING_THRESHOLD {
            Feedback::Warning
        } else {
            Feedback::Error
        }
    }
}

impl Difficulty {
    /// Default countdown for maps of this difficulty.
    pub fn time_limit_secs(self) -> u32 {
        match self {
            Difficulty::Easy => 90,
            Difficulty::Medium => 60,
            Difficulty::Hard => 45,
        }
    }
}

impl Outcome {
    pub fn is_failure(self) -> bool {
        matches!(self, Outcome::TimedOut | Outcome::SmokeOverwhelmed)
    }
}
