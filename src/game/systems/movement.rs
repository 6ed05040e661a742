//! Movement system.
//!
//! Player steps and the periodic enemy walk, including the collision checks
//! that end the game.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::grid::{is_walkable, offset};
use crate::game::state::GameState;
use crate::game::types::{Direction, Tile};

/// Move the player one cell in the given direction.
///
/// The move is legal only when the target is in bounds and its tile is empty
/// or a live explosion; anything else is silently ignored. Stepping into an
/// explosion or onto an enemy ends the game.
pub fn move_player(game_state: &mut GameState, direction: Direction) {
    if game_state.is_game_over() {
        return;
    }

    let (dx, dy) = direction.delta();
    if dx == 0 && dy == 0 {
        return;
    }

    let size = game_state.grid_size();
    let Some(target) = offset(game_state.player, dx, dy, size) else {
        return;
    };
    if !game_state.tile(target.x, target.y).is_some_and(is_walkable) {
        return;
    }

    let old = game_state.player;
    game_state.set_tile(old.x, old.y, Tile::Empty);
    game_state.player = target;
    game_state.set_tile(target.x, target.y, Tile::Player);

    if game_state.explosion_at(target) {
        game_state.trigger_game_over("You were caught in an explosion!");
    }
    if game_state.enemies.iter().any(|e| e.pos == game_state.player) {
        game_state.trigger_game_over("You were caught by an enemy!");
    }
}

/// Advance every enemy by one randomized step.
///
/// Each enemy tries the four cardinal directions in shuffled order and takes
/// the first walkable one; a boxed-in enemy stays put and its tile is
/// re-asserted in case an expired explosion cleared it. Any enemy ending up
/// on the player's cell ends the game.
pub fn move_enemies(game_state: &mut GameState, rng: &mut impl Rng) {
    if game_state.is_game_over() {
        return;
    }

    let size = game_state.grid_size();
    for i in 0..game_state.enemies.len() {
        let current = game_state.enemies[i].pos;

        let mut directions = Direction::CARDINALS;
        directions.shuffle(rng);

        let mut moved = false;
        for direction in directions {
            let (dx, dy) = direction.delta();
            let Some(target) = offset(current, dx, dy, size) else {
                continue;
            };
            if !game_state.tile(target.x, target.y).is_some_and(is_walkable) {
                continue;
            }

            game_state.set_tile(current.x, current.y, Tile::Empty);
            game_state.enemies[i].pos = target;
            game_state.set_tile(target.x, target.y, Tile::Enemy);
            moved = true;
            break;
        }

        if !moved {
            game_state.set_tile(current.x, current.y, Tile::Enemy);
        }
    }

    if game_state.enemies.iter().any(|e| e.pos == game_state.player) {
        game_state.trigger_game_over("You were caught by an enemy!");
    }
}
