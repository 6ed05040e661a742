//! Terminal renderer for the demo.
//!
//! This module prints the grid and a status line; it reads the engine but
//! never mutates it.

use crate::game::state::GameState;
use crate::game::types::Tile;

/// Print the whole board with one glyph pair per tile.
pub fn print_grid(game_state: &GameState) {
    for row in &game_state.grid {
        for cell in row {
            let symbol = match cell {
                Tile::Empty => "· ",
                Tile::Player => "P ",
                Tile::Enemy => "E ",
                Tile::Destructible => "▒▒",
                Tile::Indestructible => "██",
                Tile::Bomb => "()",
                Tile::Explosion => "**",
            };
            print!("{:<3}", symbol);
        }
        println!();
    }
}

/// Print score and remaining enemy count.
pub fn print_status(game_state: &GameState) {
    println!(
        "Score: {}   Enemies left: {}",
        game_state.score(),
        game_state.enemy_count()
    );
    println!();
}
