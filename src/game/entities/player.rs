use serde::{Serialize, Deserialize};

use crate::game::types::{Position, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pub facing: Direction,
    /// Terminal flag: once true it never goes back to false.
    pub died: bool,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            facing: Direction::Right,
            died: false,
        }
    }
}
