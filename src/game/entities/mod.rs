//! Game entities module.
//!
//! This module organizes enemy and bomb entity logic. The player is a bare
//! position owned by the game state; it always starts at the origin and
//! needs no placement logic of its own.

pub mod enemy;
pub mod bomb;

pub use enemy::*;
pub use bomb::*;
