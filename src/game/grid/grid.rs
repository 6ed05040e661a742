use rand::Rng;

use crate::config::game::DESTRUCTIBLE_DENSITY;
use crate::game::types::{Position, Tile};

/// Cells kept clear of blocks so the player can always leave the start.
pub const START_ZONE: [Position; 3] = [
    Position { x: 0, y: 0 },
    Position { x: 1, y: 0 },
    Position { x: 0, y: 1 },
];

pub fn generate_grid(size: usize) -> Vec<Vec<Tile>> {
    vec![vec![Tile::Empty; size]; size]
}

/// A tile the player or an enemy may step onto.
pub fn is_walkable(tile: Tile) -> bool {
    matches!(tile, Tile::Empty | Tile::Explosion)
}

/// Lay the fixed wall lattice: indestructible blocks on every even-even
/// coordinate pair except the origin.
pub fn place_indestructible_lattice(grid: &mut [Vec<Tile>]) {
    for (y, row) in grid.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            if x % 2 == 0 && y % 2 == 0 && !(x == 0 && y == 0) {
                *cell = Tile::Indestructible;
            }
        }
    }
}

/// Scatter destructible blocks over the remaining empty cells, sparing the
/// start zone so the opening moves are never walled in.
pub fn place_destructible_blocks(grid: &mut [Vec<Tile>], rng: &mut impl Rng) {
    for (y, row) in grid.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            if *cell != Tile::Empty || !rng.random_bool(DESTRUCTIBLE_DENSITY) {
                continue;
            }
            if START_ZONE.contains(&Position { x, y }) {
                continue;
            }
            *cell = Tile::Destructible;
        }
    }
}

/// Step `pos` by a signed delta, returning `None` when the result leaves the
/// `size`-by-`size` board.
pub fn offset(pos: Position, dx: i32, dy: i32, size: usize) -> Option<Position> {
    let x = pos.x as i64 + dx as i64;
    let y = pos.y as i64 + dy as i64;
    if x < 0 || y < 0 || x >= size as i64 || y >= size as i64 {
        return None;
    }
    Some(Position { x: x as usize, y: y as usize })
}
