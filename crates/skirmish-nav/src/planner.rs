//! Grid A* path planner over a [`BarrierGrid`].

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::f64::consts::SQRT_2;

use skirmish_core::types::Position;

use crate::barrier::{BarrierGrid, GridCell};

const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_STEPS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Frontier entry ordered by estimated total cost, then by insertion
/// sequence. The sequence tie-break makes equal-cost expansions pop in
/// insertion order, so identical queries return identical paths.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    estimate: f64,
    seq: u64,
    cell: GridCell,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.estimate == other.estimate && self.seq == other.seq
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.estimate
            .total_cmp(&other.estimate)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Find the minimum-cost path between two world positions.
///
/// Orthogonal steps cost 1, diagonal steps cost sqrt(2) when `diagonal` is
/// enabled; a diagonal step is forbidden when either adjacent orthogonal
/// neighbor is blocked or out of bounds (no cutting obstacle corners).
/// Waypoints are cell centers, start and goal inclusive.
///
/// Returns an empty path — never an error — when the start and goal share a
/// cell, when either endpoint cell is blocked or out of bounds, or when the
/// goal is unreachable.
pub fn find_path(
    start: Position,
    goal: Position,
    barrier: &BarrierGrid,
    diagonal: bool,
) -> Vec<Position> {
    let start_cell = barrier.cell_at(start);
    let goal_cell = barrier.cell_at(goal);

    if start_cell == goal_cell {
        return Vec::new();
    }
    if !traversable(barrier, start_cell) || !traversable(barrier, goal_cell) {
        return Vec::new();
    }

    let heuristic = |cell: GridCell| estimate_cost(cell, goal_cell, diagonal);

    let mut open: BinaryHeap<Reverse<Frontier>> = BinaryHeap::new();
    let mut g_score: HashMap<GridCell, f64> = HashMap::new();
    let mut came_from: HashMap<GridCell, GridCell> = HashMap::new();
    let mut closed: HashSet<GridCell> = HashSet::new();
    let mut seq = 0u64;

    let mut steps: Vec<(i32, i32)> = ORTHOGONAL_STEPS.to_vec();
    if diagonal {
        steps.extend(DIAGONAL_STEPS);
    }

    g_score.insert(start_cell, 0.0);
    open.push(Reverse(Frontier {
        estimate: heuristic(start_cell),
        seq,
        cell: start_cell,
    }));

    while let Some(Reverse(node)) = open.pop() {
        let cell = node.cell;
        if !closed.insert(cell) {
            continue;
        }
        if cell == goal_cell {
            return reconstruct(barrier, &came_from, start_cell, goal_cell);
        }

        let g = g_score[&cell];
        for &(dx, dy) in &steps {
            let next = (cell.0 + dx, cell.1 + dy);
            if !traversable(barrier, next) {
                continue;
            }
            let is_diagonal = dx != 0 && dy != 0;
            if is_diagonal
                && (!traversable(barrier, (cell.0 + dx, cell.1))
                    || !traversable(barrier, (cell.0, cell.1 + dy)))
            {
                continue;
            }
            let step_cost = if is_diagonal { SQRT_2 } else { 1.0 };
            let tentative = g + step_cost;
            if tentative < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative);
                came_from.insert(next, cell);
                seq += 1;
                open.push(Reverse(Frontier {
                    estimate: tentative + heuristic(next),
                    seq,
                    cell: next,
                }));
            }
        }
    }

    Vec::new()
}

fn traversable(barrier: &BarrierGrid, cell: GridCell) -> bool {
    barrier.within_bounds(cell) && !barrier.is_blocked(cell)
}

/// Admissible, consistent heuristic: octile distance under diagonal
/// movement, Euclidean otherwise.
fn estimate_cost(from: GridCell, to: GridCell, diagonal: bool) -> f64 {
    let dx = (to.0 - from.0).abs() as f64;
    let dy = (to.1 - from.1).abs() as f64;
    if diagonal {
        dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy)
    } else {
        (dx * dx + dy * dy).sqrt()
    }
}

fn reconstruct(
    barrier: &BarrierGrid,
    came_from: &HashMap<GridCell, GridCell>,
    start: GridCell,
    goal: GridCell,
) -> Vec<Position> {
    let mut cells = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                cells.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    cells.reverse();
    cells
        .into_iter()
        .map(|cell| barrier.cell_center(cell))
        .collect()
}
