//! Interactive terminal loop for playing the game locally.
//!
//! Each accepted command simulates half a second of frame ticks, and an
//! enemy turn fires every second of simulated time, mirroring the cadence a
//! real frontend would drive. The loop checks for game over before driving
//! further ticks, as external drivers are expected to.

use std::io::{self, Write};

use crate::config::game::{ENEMY_COUNT, ENEMY_TURN_INTERVAL_MS, FRAME_STEP_MS, GRID_SIZE};
use crate::game::demo::render::{print_grid, print_status};
use crate::game::events::{Event, SoundCue};
use crate::game::state::GameState;
use crate::game::types::Direction;

/// Simulated milliseconds that pass per accepted command.
const TURN_SIM_MS: u32 = 500;

enum Command {
    Move(Direction),
    Bomb,
    Quit,
}

/// Prompt the user for the next command. Anything unrecognized waits in
/// place (the turn still advances the clocks).
fn get_player_input() -> Command {
    print!("Move (← ↑ ↓ → or wasd), b/space = bomb, Enter = wait, q = quit: ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return Command::Quit;
    }

    match input.trim_end_matches(['\r', '\n']) {
        "\x1b[D" | "a" => Command::Move(Direction::Left),
        "\x1b[C" | "d" => Command::Move(Direction::Right),
        "\x1b[A" | "w" => Command::Move(Direction::Up),
        "\x1b[B" | "s" => Command::Move(Direction::Down),
        "b" | " " => Command::Bomb,
        "q" => Command::Quit,
        _ => Command::Move(Direction::Stay),
    }
}

/// Report the drained engine notifications as terminal lines.
fn report_events(events: Vec<Event>) {
    for event in events {
        match event {
            Event::SoundCue(SoundCue::Explosion) => println!("BOOM!"),
            Event::SoundCue(SoundCue::BlockBreak) => println!("A block crumbles."),
            // The demo repaints the whole board every turn and shows the
            // game-over message on the restart screen.
            Event::GameOver { .. }
            | Event::TileChanged { .. }
            | Event::ScoreChanged { .. }
            | Event::EnemyCountChanged { .. } => {}
        }
    }
}

/// Run the interactive game loop until the player quits.
pub fn run_game_loop() {
    let mut game = match GameState::new(GRID_SIZE, ENEMY_COUNT) {
        Ok(game) => game,
        Err(err) => {
            log::error!("could not start a game: {err}");
            return;
        }
    };
    let mut since_enemy_turn = 0u32;

    println!("Game start! Clear all enemies, stay out of the blast.");

    loop {
        print_grid(&game);
        print_status(&game);

        if game.is_game_over() {
            if let Some(message) = game.game_over_message() {
                println!("{message}");
            }
            println!("Final score: {}", game.score());
            print!("Play again? (r = restart, anything else quits): ");
            let _ = io::stdout().flush();
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() || input.trim() != "r" {
                break;
            }
            if let Err(err) = game.reset() {
                log::error!("could not restart: {err}");
                break;
            }
            since_enemy_turn = 0;
            continue;
        }

        match get_player_input() {
            Command::Move(direction) => game.move_player(direction),
            Command::Bomb => game.place_bomb(),
            Command::Quit => break,
        }

        // Drive the engine's two external clocks: frame ticks at 16 ms, an
        // enemy turn every 1000 ms of simulated time.
        let mut elapsed = 0u32;
        while elapsed < TURN_SIM_MS {
            game.advance_frame(FRAME_STEP_MS);
            elapsed += FRAME_STEP_MS;
        }
        since_enemy_turn += TURN_SIM_MS;
        if since_enemy_turn >= ENEMY_TURN_INTERVAL_MS {
            since_enemy_turn = 0;
            if !game.is_game_over() {
                game.advance_enemy_turn();
            }
        }

        report_events(game.drain_events());
    }
}
