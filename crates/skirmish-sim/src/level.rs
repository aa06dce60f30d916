//! Level data supplied by the level loader.
//!
//! The loader itself (tile-map parsing, asset pipeline) is an external
//! collaborator; the core consumes this plain-data description.

use skirmish_core::enums::ObstacleCategory;
use skirmish_core::types::Position;
use skirmish_nav::FieldBounds;

/// One obstacle as authored: a closed world-space polygon plus category.
#[derive(Debug, Clone)]
pub struct ObstacleSpec {
    pub category: ObstacleCategory,
    pub polygon: Vec<Position>,
}

/// Complete level description: field bounds, spawn points, obstacles.
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub bounds: FieldBounds,
    pub player_spawn: Position,
    /// Candidate hunter spawn markers; one is chosen per game.
    pub hunter_spawns: Vec<Position>,
    pub obstacles: Vec<ObstacleSpec>,
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Position> {
    vec![
        Position::new(x0, y0),
        Position::new(x1, y0),
        Position::new(x1, y1),
        Position::new(x0, y1),
    ]
}

/// Built-in 20x20-cell arena: border walls, a few destructible crates,
/// and a decorative terrain patch. Used by headless runs and tests.
pub fn default_arena() -> LevelLayout {
    let obstacles = vec![
        // Border walls, one cell thick.
        ObstacleSpec {
            category: ObstacleCategory::Boundary,
            polygon: rect(0.0, 0.0, 1280.0, 64.0),
        },
        ObstacleSpec {
            category: ObstacleCategory::Boundary,
            polygon: rect(0.0, 1216.0, 1280.0, 1280.0),
        },
        ObstacleSpec {
            category: ObstacleCategory::Boundary,
            polygon: rect(0.0, 64.0, 64.0, 1216.0),
        },
        ObstacleSpec {
            category: ObstacleCategory::Boundary,
            polygon: rect(1216.0, 64.0, 1280.0, 1216.0),
        },
        // Destructible crates.
        ObstacleSpec {
            category: ObstacleCategory::Crate,
            polygon: rect(384.0, 384.0, 512.0, 512.0),
        },
        ObstacleSpec {
            category: ObstacleCategory::Crate,
            polygon: rect(768.0, 640.0, 896.0, 768.0),
        },
        ObstacleSpec {
            category: ObstacleCategory::Crate,
            polygon: rect(320.0, 832.0, 448.0, 960.0),
        },
        // Decorative terrain: drawn, never collided with.
        ObstacleSpec {
            category: ObstacleCategory::Terrain,
            polygon: rect(576.0, 192.0, 704.0, 320.0),
        },
    ];

    LevelLayout {
        bounds: FieldBounds {
            left: 0.0,
            right: 1280.0,
            bottom: 0.0,
            top: 1280.0,
        },
        player_spawn: Position::new(160.0, 160.0),
        hunter_spawns: vec![
            Position::new(1120.0, 1120.0),
            Position::new(160.0, 1120.0),
            Position::new(1120.0, 160.0),
        ],
        obstacles,
    }
}
