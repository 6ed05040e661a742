pub mod movement;
pub mod explosion;
pub mod tick;

pub use movement::*;
pub use explosion::*;
pub use tick::*;
