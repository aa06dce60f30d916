//! Navigation for SKIRMISH.
//!
//! Converts polygonal obstacle geometry into a coarse barrier grid and
//! runs grid A* path queries over it.

pub mod barrier;
pub mod planner;
pub mod raster;

pub use skirmish_core as core;

pub use barrier::{BarrierGrid, FieldBounds, GridCell};
pub use planner::find_path;
