//! Grid module.
//!
//! Board generation, block layout, and cell helpers.

pub mod grid;

pub use grid::*;
