//! Player input snapshot produced by the windowing layer once per tick.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Per-key boolean state plus the world-space cursor, sampled at the tick
/// boundary. Up/down drive the chassis along its heading; left/right
/// rotate it. The cursor aims the turret, and `fire` holds the trigger.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub cursor: Position,
}
