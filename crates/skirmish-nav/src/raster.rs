//! Polygon rasterizer: maps a hit polygon onto the cells of a uniform grid.

use std::collections::HashSet;

use glam::DVec2;

use skirmish_core::types::Position;

use crate::barrier::GridCell;

/// Tolerance for the point-on-edge test, in world units of perpendicular
/// distance from the edge line.
const EDGE_EPS: f64 = 1e-6;

/// Rasterize a closed polygon into the set of grid cells it occupies.
///
/// Candidate cells come from the polygon's grid-space bounding box. A cell
/// is occupied when any of its four corner points lies inside or on the
/// polygon (even-odd crossing test, boundary inclusive), unioned with the
/// cells directly containing the polygon's own vertices — the latter covers
/// thin polygons whose corner test under-covers. A polygon flush with a
/// cell edge also claims the neighboring cell.
///
/// Deterministic for a fixed polygon and cell size. Polygons with fewer
/// than 3 vertices rasterize to the empty set.
pub fn rasterize_polygon(polygon: &[Position], cell_size: f64) -> HashSet<GridCell> {
    let mut cells = HashSet::new();
    if polygon.len() < 3 || cell_size <= 0.0 {
        return cells;
    }

    let points: Vec<DVec2> = polygon.iter().map(|p| DVec2::new(p.x, p.y)).collect();

    // Cells touched directly by the polygon's own vertices.
    for p in &points {
        cells.insert(cell_of(*p, cell_size));
    }

    // Scan the bounding box in grid units, floor(min)..=floor(max) per axis.
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min = min.min(*p);
        max = max.max(*p);
    }
    let (gx0, gy0) = cell_of(min, cell_size);
    let (gx1, gy1) = cell_of(max, cell_size);

    for gx in gx0..=gx1 {
        for gy in gy0..=gy1 {
            let x = gx as f64 * cell_size;
            let y = gy as f64 * cell_size;
            let corners = [
                DVec2::new(x, y),
                DVec2::new(x + cell_size, y),
                DVec2::new(x, y + cell_size),
                DVec2::new(x + cell_size, y + cell_size),
            ];
            if corners.iter().any(|c| polygon_contains(&points, *c)) {
                cells.insert((gx, gy));
            }
        }
    }

    cells
}

fn cell_of(p: DVec2, cell_size: f64) -> GridCell {
    (
        (p.x / cell_size).floor() as i32,
        (p.y / cell_size).floor() as i32,
    )
}

/// Point-in-polygon test, boundary inclusive.
fn polygon_contains(points: &[DVec2], p: DVec2) -> bool {
    on_boundary(points, p) || interior_even_odd(points, p)
}

/// Whether `p` lies on any polygon edge segment (within EDGE_EPS of the
/// edge line and inside the segment's extent).
fn on_boundary(points: &[DVec2], p: DVec2) -> bool {
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let edge = b - a;
        let len = edge.length();
        if len == 0.0 {
            if p.distance(a) <= EDGE_EPS {
                return true;
            }
            continue;
        }
        // Perpendicular distance from the edge line.
        if (p - a).perp_dot(edge).abs() > EDGE_EPS * len {
            continue;
        }
        let t = (p - a).dot(edge) / (len * len);
        if (-EDGE_EPS..=1.0 + EDGE_EPS).contains(&t) {
            return true;
        }
    }
    false
}

/// Even-odd crossing test against a ray cast toward +X.
fn interior_even_odd(points: &[DVec2], p: DVec2) -> bool {
    let n = points.len();
    let mut inside = false;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Axis-aligned square from (64,64) to (192,192): side 2 cells at
    /// cell size 64, flush with cell boundaries.
    fn aligned_square() -> Vec<Position> {
        vec![
            Position::new(64.0, 64.0),
            Position::new(192.0, 64.0),
            Position::new(192.0, 192.0),
            Position::new(64.0, 192.0),
        ]
    }

    #[test]
    fn test_rasterizer_deterministic() {
        let square = aligned_square();
        let first = rasterize_polygon(&square, 64.0);
        let second = rasterize_polygon(&square, 64.0);
        assert_eq!(first, second, "Identical input must give identical sets");
    }

    /// A k-cell square flush with the grid claims its k*k footprint plus
    /// the boundary-touching cells inside its bounding box.
    #[test]
    fn test_rasterizer_square_coverage() {
        let cells = rasterize_polygon(&aligned_square(), 64.0);

        // The geometric footprint, cells (1,1)..(2,2), must all be present.
        for gx in 1..=2 {
            for gy in 1..=2 {
                assert!(
                    cells.contains(&(gx, gy)),
                    "Footprint cell ({gx},{gy}) missing"
                );
            }
        }
        // Nothing outside the grid-space bounding box.
        for cell in &cells {
            assert!(
                (1..=3).contains(&cell.0) && (1..=3).contains(&cell.1),
                "Cell {cell:?} outside the bounding box"
            );
        }
        // Boundary-inclusive: the full 3x3 box is claimed.
        assert_eq!(cells.len(), 9);
    }

    /// An unaligned square claims exactly the cells its interior reaches.
    #[test]
    fn test_rasterizer_interior_square() {
        let square = vec![
            Position::new(70.0, 70.0),
            Position::new(120.0, 70.0),
            Position::new(120.0, 120.0),
            Position::new(70.0, 120.0),
        ];
        let cells = rasterize_polygon(&square, 64.0);
        // The square sits strictly inside cell (1,1): no cell corner falls
        // in its interior, so the vertex union alone claims the cell.
        assert!(cells.contains(&(1, 1)), "Vertex cell must be claimed");
        assert_eq!(cells.len(), 1, "Fully in-cell square claims one cell");
    }

    /// Degenerate polygons rasterize to the empty set without panicking.
    #[test]
    fn test_rasterizer_degenerate_polygon() {
        assert!(rasterize_polygon(&[], 64.0).is_empty());
        assert!(rasterize_polygon(&[Position::new(10.0, 10.0)], 64.0).is_empty());
        let segment = vec![Position::new(0.0, 0.0), Position::new(100.0, 0.0)];
        assert!(rasterize_polygon(&segment, 64.0).is_empty());
    }

    /// A zero-area (collinear) polygon still claims its vertex cells.
    #[test]
    fn test_rasterizer_zero_area_polygon() {
        let sliver = vec![
            Position::new(10.0, 10.0),
            Position::new(150.0, 10.0),
            Position::new(300.0, 10.0),
        ];
        let cells = rasterize_polygon(&sliver, 64.0);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(2, 0)));
        assert!(cells.contains(&(4, 0)));
    }

    /// A thin triangle is covered through the vertex union even where no
    /// cell corner falls inside it.
    #[test]
    fn test_rasterizer_thin_triangle() {
        let thin = vec![
            Position::new(10.0, 30.0),
            Position::new(50.0, 30.0),
            Position::new(30.0, 34.0),
        ];
        let cells = rasterize_polygon(&thin, 64.0);
        assert!(
            cells.contains(&(0, 0)),
            "Thin polygon must claim its vertex cell"
        );
    }
}
