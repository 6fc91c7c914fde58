//! Terminal demo shell.
//!
//! The engine treats its shell as an external collaborator; this module is
//! that collaborator, kept minimal: it issues commands, paces the time
//! methods and renders the drained notifications.

pub mod game_loop;
pub mod render;

pub use game_loop::*;
