//! Projects drawing-surface points into the walkable corridors.

use evac_core::layout::Hallway;
use evac_core::types::Position;

/// Snap `point` into the nearest hallway.
///
/// A point already inside a hallway (borders included) is returned unchanged.
/// Otherwise the point is clamped into every hallway and the clamp closest to
/// the original point wins; ties go to the earlier hallway. With no hallways
/// the point is returned as-is.
pub fn snap(point: Position, hallways: &[Hallway]) -> Position {
    if hallways.iter().any(|h| h.contains(&point)) {
        return point;
    }

    hallways
        .iter()
        .map(|h| {
            let clamped = h.bounds.clamp(&point);
            (clamped, clamped.distance_to(&point))
        })
        .fold(None, |best: Option<(Position, f64)>, candidate| match best {
            Some(b) if b.1 <= candidate.1 => Some(b),
            _ => Some(candidate),
        })
        .map(|(clamped, _)| clamped)
        .unwrap_or(point)
}
