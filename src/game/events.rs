//! Engine notifications for adapters.
//!
//! The engine never calls into rendering or audio code directly. It queues
//! [`Event`] values as side effects of its operations; adapters drain the
//! queue after each command or tick and react (repaint a tile, play a sound,
//! show the game-over screen).

use serde::{Serialize, Deserialize};

use crate::game::types::Tile;

/// Audio cue kinds the presentation layer may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Explosion,
    BlockBreak,
}

/// Side-effect notifications emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A grid cell changed content.
    TileChanged { x: usize, y: usize, tile: Tile },
    /// The score changed (only ever upward).
    ScoreChanged { score: u32 },
    /// The number of live enemies changed.
    EnemyCountChanged { count: usize },
    /// An audio cue should play.
    SoundCue(SoundCue),
    /// The game ended, with the terminal message to display.
    GameOver { message: String },
}
