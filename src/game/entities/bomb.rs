//! Bomb entity logic.
//!
//! Placement only; detonation lives in the explosion system.

use crate::config::game::BOMB_FUSE_MS;
use crate::game::state::GameState;
use crate::game::types::{Bomb, Tile};

/// Drop a bomb on the player's cell.
///
/// At most one bomb may be live at a time; the request is silently ignored
/// while one is ticking, or after the game has ended.
pub fn place_bomb(game_state: &mut GameState) {
    if game_state.is_game_over() || game_state.active_bomb {
        return;
    }

    let pos = game_state.player;
    game_state.bombs.push(Bomb { pos, timer_ms: BOMB_FUSE_MS });
    game_state.active_bomb = true;
    game_state.set_tile(pos.x, pos.y, Tile::Bomb);
}
