//! Main entry point for the grid bomber demo.
//!
//! Initializes logging and hands control to the interactive terminal loop.
//! The simulation engine itself lives under `game` and is driven purely by
//! the loop's tick calls; it owns no timers of its own.

pub mod config;
mod game;

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    game::demo::run_game_loop();
}
