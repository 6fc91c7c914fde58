//! Enemy wander system.
//!
//! Enemies walk straight in their facing direction until blocked, then pick
//! a new random facing.

use crate::game::entities::random_turn;
use crate::game::state::ArenaState;
use crate::game::types::{Position, Tile};

/// Move every enemy one step in its facing direction.
///
/// A destination under a live explosion kills the enemy. A free destination
/// (no wall, no other enemy) is taken, and reaching the player's cell kills
/// the player (the enemy survives). A blocked destination makes the enemy
/// re-face instead of moving.
pub fn sweep_enemies(state: &mut ArenaState) {
    // Suppression différée à la fin du balayage, pour ne pas invalider les index.
    let mut dead: Vec<usize> = Vec::new();

    for i in 0..state.enemies.len() {
        let enemy = state.enemies[i];
        let dest = enemy.pos.step(enemy.facing);

        if state.grid[dest.row][dest.col] == Tile::FloorUnderExplosion {
            dead.push(i);
        } else if !blocked(state, dest) {
            if dest == state.player.pos {
                state.player.died = true;
            }
            state.enemies[i].pos = dest;
        } else {
            state.enemies[i].facing = random_turn(enemy.facing, &mut state.rng);
        }
    }

    for i in dead.into_iter().rev() {
        state.enemies.remove(i);
    }
}

/// A cell blocks an enemy if it holds a wall (exploding or not) or another
/// enemy. The player's cell does not block.
fn blocked(state: &ArenaState, dest: Position) -> bool {
    matches!(
        state.grid[dest.row][dest.col],
        Tile::Wall | Tile::WallUnderExplosion
    ) || state.enemies.iter().any(|e| e.pos == dest)
}
