pub mod types;
pub mod events;
pub mod grid;
pub mod entities;
pub mod systems;
pub mod state;
pub mod demo;
