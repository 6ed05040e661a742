/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid dimension,
/// bomb timing, blast reach, and enemy spawning rules.

/// Side length of the square game grid, in tiles.
pub const GRID_SIZE: usize = 15;

/// Number of enemies placed on a fresh board.
pub const ENEMY_COUNT: usize = 4;

/// Milliseconds between bomb placement and detonation.
pub const BOMB_FUSE_MS: u32 = 2000;

/// Milliseconds an explosion tile stays on the board before reverting to empty.
pub const EXPLOSION_LIFETIME_MS: u32 = 500;

/// Maximum reach of an explosion along each cardinal direction, in tiles.
pub const BLAST_RADIUS: usize = 2;

/// Nominal timer step per frame tick, in milliseconds (~60 fps).
pub const FRAME_STEP_MS: u32 = 16;

/// Milliseconds of simulated time between enemy movement turns.
pub const ENEMY_TURN_INTERVAL_MS: u32 = 1000;

/// Probability that a free cell receives a destructible block during layout.
pub const DESTRUCTIBLE_DENSITY: f64 = 0.3;

/// Minimum Chebyshev distance between an enemy spawn point and the player start.
pub const SPAWN_SAFETY_RADIUS: usize = 3;

/// Score awarded per enemy killed by an explosion.
pub const ENEMY_KILL_SCORE: u32 = 100;
