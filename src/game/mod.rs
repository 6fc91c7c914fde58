pub mod types;
pub mod events;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;
pub mod demo;
