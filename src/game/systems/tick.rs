//! Timer advancement system.
//!
//! The frame driver calls this with the elapsed step; the engine itself
//! holds no clock. Bombs whose fuse runs out detonate within the same call,
//! and expired explosion cells revert to empty.

use crate::game::state::GameState;
use crate::game::systems::explosion::explode_bomb;
use crate::game::types::Tile;

/// Advance every bomb and explosion countdown by `delta_ms`.
pub fn advance_timers(game_state: &mut GameState, delta_ms: u32) {
    if game_state.is_game_over() {
        return;
    }

    // Reverse index order so removal while iterating stays sound, including
    // explosions appended mid-loop by a detonation.
    let mut i = game_state.bombs.len();
    while i > 0 {
        i -= 1;
        let timer = game_state.bombs[i].timer_ms.saturating_sub(delta_ms);
        game_state.bombs[i].timer_ms = timer;
        if timer == 0 {
            let bomb = game_state.bombs.remove(i);
            explode_bomb(game_state, bomb);
        }
    }

    let mut i = game_state.explosions.len();
    while i > 0 {
        i -= 1;
        let timer = game_state.explosions[i].timer_ms.saturating_sub(delta_ms);
        game_state.explosions[i].timer_ms = timer;
        if timer == 0 {
            let cell = game_state.explosions.remove(i);
            game_state.set_tile(cell.pos.x, cell.pos.y, Tile::Empty);
        }
    }
}
