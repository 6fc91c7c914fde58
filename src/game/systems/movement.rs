//! Player movement system.
//!
//! This module validates and applies a single player step.

use crate::game::state::ArenaState;
use crate::game::types::{Direction, Tile};

/// Try to move the player one step in `dir`.
///
/// A step onto Wall or WallUnderExplosion is rejected: position and facing
/// stay as they were. Any other tile accepts the step and updates both the
/// position and the facing; arriving on a live explosion or on an enemy's
/// cell kills the player as a side effect of the otherwise successful move.
pub fn step_player(state: &mut ArenaState, dir: Direction) {
    let dest = state.player.pos.step(dir);

    match state.grid[dest.row][dest.col] {
        Tile::Wall | Tile::WallUnderExplosion => return,
        Tile::FloorUnderExplosion => state.player.died = true,
        _ => {}
    }
    if state.enemies.iter().any(|e| e.pos == dest) {
        state.player.died = true;
    }

    state.player.pos = dest;
    state.player.facing = dir;
}
