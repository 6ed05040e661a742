//! Explosion resolution system.
//!
//! A detonation burns its center cell and sweeps four independent cardinal
//! rays outward up to the blast radius. Indestructible blocks stop a ray
//! untouched; destructible blocks burn and stop it; everything else burns
//! and lets the ray continue. Player and enemy hits are resolved here, at
//! detonation time — entities wandering into a live explosion tile later are
//! handled by the movement system.

use crate::config::game::{BLAST_RADIUS, ENEMY_KILL_SCORE, EXPLOSION_LIFETIME_MS};
use crate::game::events::SoundCue;
use crate::game::grid::offset;
use crate::game::state::GameState;
use crate::game::types::{Bomb, ExplosionCell, Position, Tile};

/// Whether a blast ray keeps going past the cell it just burned.
enum RayEffect {
    Continue,
    Stop,
}

/// Resolve a bomb whose fuse has run out.
pub fn explode_bomb(game_state: &mut GameState, bomb: Bomb) {
    let size = game_state.grid_size();

    // The center is always affected, whatever the blast radius.
    burn_cell(game_state, bomb.pos);

    for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
        for step in 1..=BLAST_RADIUS {
            let Some(pos) = offset(bomb.pos, dx * step as i32, dy * step as i32, size) else {
                break;
            };
            match burn_cell(game_state, pos) {
                RayEffect::Continue => {}
                RayEffect::Stop => break,
            }
        }
    }

    game_state.push_sound(SoundCue::Explosion);
    game_state.active_bomb = false;
}

fn burn_cell(game_state: &mut GameState, pos: Position) -> RayEffect {
    match game_state.tile(pos.x, pos.y) {
        None | Some(Tile::Indestructible) => return RayEffect::Stop,
        Some(Tile::Destructible) => {
            mark_explosion(game_state, pos);
            game_state.push_sound(SoundCue::BlockBreak);
            return RayEffect::Stop;
        }
        Some(_) => {}
    }

    if pos == game_state.player {
        game_state.trigger_game_over("You were caught in an explosion!");
    }

    if let Some(index) = game_state.enemies.iter().position(|e| e.pos == pos) {
        game_state.enemies.remove(index);
        game_state.add_score(ENEMY_KILL_SCORE);
        game_state.note_enemy_count();
        if game_state.enemies.is_empty() {
            game_state.trigger_game_over("You win! All enemies defeated!");
        }
    }

    mark_explosion(game_state, pos);
    RayEffect::Continue
}

fn mark_explosion(game_state: &mut GameState, pos: Position) {
    game_state.set_tile(pos.x, pos.y, Tile::Explosion);
    game_state.explosions.push(ExplosionCell {
        pos,
        timer_ms: EXPLOSION_LIFETIME_MS,
    });
}
