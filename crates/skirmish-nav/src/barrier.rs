//! BarrierGrid: the set of impassable grid cells derived from obstacle geometry.

use std::collections::HashSet;

use skirmish_core::types::Position;

use crate::raster::rasterize_polygon;

/// Integer grid coordinate: `(floor(x / cell_size), floor(y / cell_size))`.
pub type GridCell = (i32, i32);

/// Rectangular world bounds of the traversable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Barrier cell set with bounds queries, rebuilt from scratch whenever
/// obstacle geometry changes. After a completed [`BarrierGrid::rebuild`]
/// the set is fully consistent with the obstacle list it was given; there
/// is no incremental add/remove.
#[derive(Debug, Clone)]
pub struct BarrierGrid {
    cell_size: f64,
    cells: HashSet<GridCell>,
    bounds: FieldBounds,
    // Traversable cell range: the field rectangle with a one-cell inward
    // margin per side, keeping searches strictly inside the level border.
    min_cell: GridCell,
    max_cell: GridCell,
}

impl BarrierGrid {
    pub fn new(cell_size: f64, bounds: FieldBounds) -> Self {
        let min_cell = (
            (bounds.left / cell_size).floor() as i32 + 1,
            (bounds.bottom / cell_size).floor() as i32 + 1,
        );
        let max_cell = (
            (bounds.right / cell_size).floor() as i32 - 1,
            (bounds.top / cell_size).floor() as i32 - 1,
        );
        Self {
            cell_size,
            cells: HashSet::new(),
            bounds,
            min_cell,
            max_cell,
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    /// The cell containing a world position.
    pub fn cell_at(&self, pos: Position) -> GridCell {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    /// World position of a cell's center.
    pub fn cell_center(&self, cell: GridCell) -> Position {
        Position::new(
            (cell.0 as f64 + 0.5) * self.cell_size,
            (cell.1 as f64 + 0.5) * self.cell_size,
        )
    }

    /// Clear the set and re-rasterize every blocking polygon.
    pub fn rebuild(&mut self, polygons: &[Vec<Position>]) {
        self.cells.clear();
        for polygon in polygons {
            self.cells
                .extend(rasterize_polygon(polygon, self.cell_size));
        }
    }

    /// Mark a single cell impassable. Level scripting and test hook; a
    /// later `rebuild` discards it.
    pub fn block(&mut self, cell: GridCell) {
        self.cells.insert(cell);
    }

    pub fn is_blocked(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    /// Whether a cell lies within the traversable field (one grid cell of
    /// inward margin on each side).
    pub fn within_bounds(&self, cell: GridCell) -> bool {
        cell.0 >= self.min_cell.0
            && cell.0 <= self.max_cell.0
            && cell.1 >= self.min_cell.1
            && cell.1 <= self.max_cell.1
    }

    pub fn cells(&self) -> &HashSet<GridCell> {
        &self.cells
    }
}
