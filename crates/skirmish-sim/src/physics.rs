//! Collision resolution: the "simple physics" step.
//!
//! Axis-separated move-and-clamp of an agent's intended delta against
//! blocking shapes, plus overlap queries for projectile impacts. Hit
//! shapes are treated as their conservative axis-aligned bounding boxes.

use skirmish_core::components::HitBox;
use skirmish_core::types::Position;

/// Axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    /// Bounding box of a hit box placed at `center`. An empty hit box
    /// degenerates to the center point.
    pub fn from_hit_box(hit: &HitBox, center: Position) -> Self {
        let mut aabb = Self {
            min_x: center.x,
            min_y: center.y,
            max_x: center.x,
            max_y: center.y,
        };
        for p in &hit.points {
            let x = center.x + p.x;
            let y = center.y + p.y;
            aabb.min_x = aabb.min_x.min(x);
            aabb.min_y = aabb.min_y.min(y);
            aabb.max_x = aabb.max_x.max(x);
            aabb.max_y = aabb.max_y.max(y);
        }
        aabb
    }

    /// Strict interpenetration test: shapes merely touching do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}

/// Resolve an intended move against blocking shapes, one axis at a time.
/// An axis move that would overlap a blocker is reverted; the other axis
/// still applies, so agents slide along walls instead of sticking to them.
pub fn resolve_move(
    hit: &HitBox,
    position: Position,
    dx: f64,
    dy: f64,
    blockers: &[Aabb],
) -> Position {
    let mut resolved = position;

    let try_x = Position::new(resolved.x + dx, resolved.y);
    if !collides(hit, try_x, blockers) {
        resolved = try_x;
    }

    let try_y = Position::new(resolved.x, resolved.y + dy);
    if !collides(hit, try_y, blockers) {
        resolved = try_y;
    }

    resolved
}

fn collides(hit: &HitBox, at: Position, blockers: &[Aabb]) -> bool {
    let aabb = Aabb::from_hit_box(hit, at);
    blockers.iter().any(|b| aabb.overlaps(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(x0: f64, y0: f64, x1: f64, y1: f64) -> Aabb {
        Aabb {
            min_x: x0,
            min_y: y0,
            max_x: x1,
            max_y: y1,
        }
    }

    #[test]
    fn test_free_move_applies_both_axes() {
        let hit = HitBox::square(10.0);
        let resolved = resolve_move(&hit, Position::new(0.0, 0.0), 5.0, -3.0, &[]);
        assert_eq!(resolved, Position::new(5.0, -3.0));
    }

    #[test]
    fn test_blocked_axis_reverts_other_slides() {
        let hit = HitBox::square(10.0);
        // Wall to the east; moving north-east slides north along it.
        let blockers = [wall(15.0, -100.0, 30.0, 100.0)];
        let resolved = resolve_move(&hit, Position::new(0.0, 0.0), 10.0, 10.0, &blockers);
        assert_eq!(resolved.x, 0.0, "Eastward component must be clamped");
        assert_eq!(resolved.y, 10.0, "Northward component still applies");
    }

    #[test]
    fn test_fully_blocked_move_halts() {
        let hit = HitBox::square(10.0);
        let blockers = [wall(15.0, -100.0, 30.0, 100.0), wall(-100.0, 15.0, 100.0, 30.0)];
        let resolved = resolve_move(&hit, Position::new(0.0, 0.0), 10.0, 10.0, &blockers);
        assert_eq!(resolved, Position::new(0.0, 0.0));
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let a = wall(0.0, 0.0, 10.0, 10.0);
        let b = wall(10.0, 0.0, 20.0, 10.0);
        assert!(!a.overlaps(&b), "Shared edge is contact, not collision");
        let c = wall(9.0, 0.0, 20.0, 10.0);
        assert!(a.overlaps(&c));
    }
}
