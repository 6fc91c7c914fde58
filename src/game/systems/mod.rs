pub mod movement;
pub mod strike;
pub mod wander;

pub use movement::*;
pub use strike::*;
pub use wander::*;
