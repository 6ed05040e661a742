use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Chebyshev distance to another position (used for spawn safety checks).
    pub fn chebyshev_distance(&self, other: &Position) -> usize {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stay,
}

impl Direction {
    /// The four movement directions, for shuffled enemy walks and blast rays.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid delta for this direction. `Stay` maps to (0, 0).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Stay => (0, 0),
        }
    }
}

/// What occupies a single grid cell. The grid is a cache of entity positions;
/// every write goes through `GameState::set_tile` to keep it consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Player,
    Enemy,
    Destructible,
    Indestructible,
    Bomb,
    Explosion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Position,
    /// Remaining fuse in milliseconds. The bomb detonates when this hits zero.
    pub timer_ms: u32,
}

/// One burning cell left behind by a detonation. Reverts to empty when the
/// timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplosionCell {
    pub pos: Position,
    pub timer_ms: u32,
}

#[derive(Debug, Error)]
pub enum GameError {
    /// The board has too few free cells to host the requested enemies, even
    /// after dropping the spawn safety radius.
    #[error("cannot place enemies: {requested} requested but only {available} free cells")]
    EnemyPlacement { requested: usize, available: usize },
}
