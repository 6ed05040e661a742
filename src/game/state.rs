use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::game::types::{Position, Direction, Tile, Enemy, Bomb, ExplosionCell, GameError};
use crate::game::events::{Event, SoundCue};
use crate::game::grid::{generate_grid, place_indestructible_lattice, place_destructible_blocks};
use crate::game::entities::{bomb, enemy};
use crate::game::systems::{movement, tick};

/// The whole simulation: grid, entities, timers, score, and the pending
/// notification queue.
///
/// The grid is a cache of entity positions. Layout writes happen once during
/// construction; after that every cell mutation goes through [`set_tile`]
/// (which also queues the tile-changed notification), so the cache and the
/// entity lists stay consistent at every observable point.
///
/// The engine holds no clock. External drivers call [`advance_frame`] per
/// rendered frame and [`advance_enemy_turn`] on a slower fixed interval; all
/// operations are synchronous and become no-ops once the game ends.
///
/// [`set_tile`]: GameState::set_tile
/// [`advance_frame`]: GameState::advance_frame
/// [`advance_enemy_turn`]: GameState::advance_enemy_turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Vec<Vec<Tile>>,
    pub player: Position,
    pub enemies: Vec<Enemy>,
    pub bombs: Vec<Bomb>,
    pub explosions: Vec<ExplosionCell>,
    pub score: u32,
    pub active_bomb: bool,
    game_over: Option<String>,
    spawn_count: usize,
    next_enemy_id: u32,
    events: Vec<Event>,
}

impl GameState {
    /// Build a fresh board: wall lattice, random destructible blocks, player
    /// at the origin, and `enemy_count` enemies on safe cells.
    pub fn new(grid_size: usize, enemy_count: usize) -> Result<Self, GameError> {
        Self::with_rng(grid_size, enemy_count, &mut rand::rng())
    }

    /// Same as [`GameState::new`] with a caller-supplied RNG, so seeded
    /// boards are reproducible.
    pub fn with_rng(
        grid_size: usize,
        enemy_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        let mut grid = generate_grid(grid_size);
        place_indestructible_lattice(&mut grid);
        place_destructible_blocks(&mut grid, rng);

        let player = Position { x: 0, y: 0 };
        grid[player.y][player.x] = Tile::Player;

        let mut next_enemy_id = 0;
        let enemies = enemy::spawn_enemies(&grid, player, enemy_count, &mut next_enemy_id, rng)?;
        for e in &enemies {
            grid[e.pos.y][e.pos.x] = Tile::Enemy;
        }

        Ok(GameState {
            grid,
            player,
            enemies,
            bombs: Vec::new(),
            explosions: Vec::new(),
            score: 0,
            active_bomb: false,
            game_over: None,
            spawn_count: enemy_count,
            next_enemy_id,
            events: Vec::new(),
        })
    }

    /// Blank board holding only the player, for adapters and tests that lay
    /// out cells by hand.
    pub fn empty(grid_size: usize) -> Self {
        let mut grid = generate_grid(grid_size);
        let player = Position { x: 0, y: 0 };
        grid[player.y][player.x] = Tile::Player;

        GameState {
            grid,
            player,
            enemies: Vec::new(),
            bombs: Vec::new(),
            explosions: Vec::new(),
            score: 0,
            active_bomb: false,
            game_over: None,
            spawn_count: 0,
            next_enemy_id: 0,
            events: Vec::new(),
        }
    }

    /// Throw away the whole board and start over with the same dimensions
    /// and enemy count.
    pub fn reset(&mut self) -> Result<(), GameError> {
        *self = Self::new(self.grid_size(), self.spawn_count)?;
        Ok(())
    }

    // --- commands -----------------------------------------------------

    /// Move the player one cell; illegal moves are silent no-ops.
    pub fn move_player(&mut self, direction: Direction) {
        movement::move_player(self, direction);
    }

    /// Drop a bomb on the player's cell, if none is live.
    pub fn place_bomb(&mut self) {
        bomb::place_bomb(self);
    }

    /// Advance bomb and explosion countdowns by `delta_ms` of simulated time.
    pub fn advance_frame(&mut self, delta_ms: u32) {
        tick::advance_timers(self, delta_ms);
    }

    /// Give every enemy one randomized step. Called by the slow periodic
    /// driver, independently of the frame tick.
    pub fn advance_enemy_turn(&mut self) {
        movement::move_enemies(self, &mut rand::rng());
    }

    // --- grid access --------------------------------------------------

    pub fn grid_size(&self) -> usize {
        self.grid.len()
    }

    /// Bounds-checked tile read; `None` outside the board.
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    /// The single cell-write path. Out-of-range writes are ignored; valid
    /// ones queue a tile-changed notification.
    pub fn set_tile(&mut self, x: usize, y: usize, tile: Tile) {
        if x >= self.grid_size() || y >= self.grid_size() {
            return;
        }
        self.grid[y][x] = tile;
        self.events.push(Event::TileChanged { x, y, tile });
    }

    // --- queries ------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_message(&self) -> Option<&str> {
        self.game_over.as_deref()
    }

    /// Whether a live explosion entry covers `pos` (distinct from the tile
    /// being `Explosion`, which an enemy may be standing over).
    pub fn explosion_at(&self, pos: Position) -> bool {
        self.explosions.iter().any(|e| e.pos == pos)
    }

    /// Hand the queued notifications to the adapter, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // --- internal mutation helpers ------------------------------------

    /// One-way transition; repeated calls keep the first message.
    pub(crate) fn trigger_game_over(&mut self, message: &str) {
        if self.game_over.is_some() {
            return;
        }
        self.game_over = Some(message.to_string());
        self.events.push(Event::GameOver {
            message: message.to_string(),
        });
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
        self.events.push(Event::ScoreChanged { score: self.score });
    }

    pub(crate) fn note_enemy_count(&mut self) {
        self.events.push(Event::EnemyCountChanged {
            count: self.enemies.len(),
        });
    }

    pub(crate) fn push_sound(&mut self, cue: SoundCue) {
        self.events.push(Event::SoundCue(cue));
    }
}
