//! Enemy entity logic.
//!
//! Enemies spawn on random free cells kept clear of the player's start area.
//! Placement samples from the set of valid cells directly instead of
//! retrying random coordinates, so it terminates on any board.

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::config::game::SPAWN_SAFETY_RADIUS;
use crate::game::types::{Enemy, GameError, Position, Tile};

/// Spawn `count` enemies on distinct empty cells.
///
/// Cells inside the Chebyshev safety radius of the player are excluded so a
/// fresh board never starts with an enemy on the player's doorstep. When the
/// board is too crowded to honor the radius, it is dropped; when even that
/// leaves too few free cells, placement fails.
pub fn spawn_enemies(
    grid: &[Vec<Tile>],
    player: Position,
    count: usize,
    next_id: &mut u32,
    rng: &mut impl Rng,
) -> Result<Vec<Enemy>, GameError> {
    let mut candidates = free_cells(grid, player, SPAWN_SAFETY_RADIUS);

    if candidates.len() < count {
        log::warn!(
            "only {} cells outside the safety radius for {} enemies, relaxing",
            candidates.len(),
            count
        );
        candidates = free_cells(grid, player, 0);
    }

    if candidates.len() < count {
        return Err(GameError::EnemyPlacement {
            requested: count,
            available: candidates.len(),
        });
    }

    let enemies = candidates
        .into_iter()
        .choose_multiple(rng, count)
        .into_iter()
        .map(|pos| {
            let id = *next_id;
            *next_id += 1;
            Enemy { id, pos }
        })
        .collect();

    Ok(enemies)
}

/// Empty cells at least `min_distance` away from the player.
fn free_cells(grid: &[Vec<Tile>], player: Position, min_distance: usize) -> Vec<Position> {
    grid.iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                let pos = Position { x, y };
                if *cell == Tile::Empty
                    && pos != player
                    && pos.chebyshev_distance(&player) >= min_distance
                {
                    Some(pos)
                } else {
                    None
                }
            })
        })
        .collect()
}
