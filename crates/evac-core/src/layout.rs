//! Static map templates.
//!
//! A `MapLayout` is authored outside the engine (JSON file or built-in
//! scenario) and never mutated. The engine re-seeds its runtime entities
//! from it on every start and reset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{Difficulty, Environment};
use crate::types::{Position, Rect};

/// A named room. Rooms are not walkable; only hallways are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub bounds: Rect,
}

/// A traversable corridor rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hallway {
    pub bounds: Rect,
}

/// A wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Position,
    pub end: Position,
}

/// Immutable map description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    pub environment: Environment,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
    pub hallways: Vec<Hallway>,
    #[serde(default)]
    pub walls: Vec<Wall>,
    pub start_position: Position,
    pub exits: Vec<Position>,
    #[serde(default)]
    pub fire_starts: Vec<Position>,
    #[serde(default)]
    pub trapped_people: Vec<Position>,
    #[serde(default)]
    pub extinguishers: Vec<Position>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Errors that can occur when loading a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout '{0}' has no hallways")]
    NoHallways(String),
    #[error("layout '{0}' has no exits")]
    NoExits(String),
    #[error("layout '{name}': hallway {index} has non-positive size")]
    DegenerateHallway { name: String, index: usize },
    #[error("layout '{0}': start position is outside every hallway")]
    StartOutsideCorridors(String),
}

impl Hallway {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
        }
    }

    pub fn contains(&self, p: &Position) -> bool {
        self.bounds.contains(p)
    }
}

impl Wall {
    pub fn new(start: impl Into<Position>, end: impl Into<Position>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Room {
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

impl MapLayout {
    /// Parse and validate a layout from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        let layout: MapLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load and validate a layout from a JSON file on disk.
    pub fn from_file(path: &Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject layouts the engine cannot run.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.hallways.is_empty() {
            return Err(LayoutError::NoHallways(self.name.clone()));
        }
        if self.exits.is_empty() {
            return Err(LayoutError::NoExits(self.name.clone()));
        }
        if let Some(index) = self
            .hallways
            .iter()
            .position(|h| h.bounds.width <= 0.0 || h.bounds.height <= 0.0)
        {
            return Err(LayoutError::DegenerateHallway {
                name: self.name.clone(),
                index,
            });
        }
        if !self.is_in_corridor(&self.start_position) {
            return Err(LayoutError::StartOutsideCorridors(self.name.clone()));
        }
        Ok(())
    }

    pub fn is_in_corridor(&self, p: &Position) -> bool {
        self.hallways.iter().any(|h| h.contains(p))
    }
}
