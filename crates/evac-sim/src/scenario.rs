//! Built-in map layouts.
//!
//! Authored maps normally arrive as JSON; these two ship with the engine so
//! it can run (and be tested) without any content files.

use evac_core::enums::{Difficulty, Environment};
use evac_core::layout::{Hallway, MapLayout, Room, Wall};
use evac_core::types::{Position, Rect};

/// Office floor: one east-west hall joining two north-south wings.
/// The fire starts in the open-plan office north of the main hall.
pub fn training_office() -> MapLayout {
    MapLayout {
        environment: Environment::Office,
        name: "Training Office".to_string(),
        rooms: vec![
            Room::new("Open Office", Rect::new(85.0, 20.0, 150.0, 115.0)),
            Room::new("Conference", Rect::new(85.0, 185.0, 150.0, 115.0)),
        ],
        hallways: vec![
            Hallway::new(20.0, 140.0, 280.0, 40.0),
            Hallway::new(40.0, 20.0, 40.0, 280.0),
            Hallway::new(240.0, 20.0, 40.0, 280.0),
        ],
        walls: vec![
            Wall::new((160.0, 20.0), (160.0, 135.0)),
            Wall::new((160.0, 185.0), (160.0, 300.0)),
            Wall::new((85.0, 135.0), (235.0, 135.0)),
            Wall::new((85.0, 185.0), (235.0, 185.0)),
        ],
        start_position: Position::new(160.0, 160.0),
        exits: vec![Position::new(60.0, 290.0), Position::new(260.0, 30.0)],
        fire_starts: vec![Position::new(160.0, 80.0)],
        trapped_people: vec![Position::new(60.0, 80.0), Position::new(260.0, 250.0)],
        extinguishers: vec![Position::new(100.0, 160.0)],
        difficulty: Difficulty::Medium,
    }
}

/// School wing: two long halls joined by a central stair corridor, with
/// the fire already large at the east end of the upper hall.
pub fn school_wing() -> MapLayout {
    MapLayout {
        environment: Environment::School,
        name: "School Wing".to_string(),
        rooms: vec![
            Room::new("Classroom A", Rect::new(20.0, 65.0, 115.0, 190.0)),
            Room::new("Classroom B", Rect::new(185.0, 65.0, 115.0, 190.0)),
        ],
        hallways: vec![
            Hallway::new(20.0, 20.0, 280.0, 40.0),
            Hallway::new(140.0, 20.0, 40.0, 280.0),
            Hallway::new(20.0, 260.0, 280.0, 40.0),
        ],
        walls: vec![
            Wall::new((135.0, 65.0), (135.0, 255.0)),
            Wall::new((185.0, 65.0), (185.0, 255.0)),
            Wall::new((80.0, 65.0), (80.0, 255.0)),
            Wall::new((240.0, 65.0), (240.0, 255.0)),
        ],
        start_position: Position::new(100.0, 40.0),
        exits: vec![Position::new(30.0, 280.0), Position::new(290.0, 280.0)],
        fire_starts: vec![Position::new(240.0, 40.0)],
        trapped_people: vec![Position::new(40.0, 40.0), Position::new(160.0, 200.0)],
        extinguishers: vec![Position::new(160.0, 150.0)],
        difficulty: Difficulty::Hard,
    }
}
