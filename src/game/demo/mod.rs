// Demo module for the game. Provides the terminal renderer and the
// interactive loop that drives the engine from stdin.
pub mod game_loop;
pub mod render;

pub use game_loop::run_game_loop;
