//! Airstrike blast system.
//!
//! Applies and clears the explosion footprint around the strike target and
//! resolves the casualties.

use log::info;

use crate::config::game::BLAST_RADIUS;
use crate::game::state::ArenaState;
use crate::game::types::{Position, Tile};

/// An entity is caught when strictly inside the blast radius on both axes.
fn caught_in_blast(pos: Position, target: Position) -> bool {
    pos.row.abs_diff(target.row) < BLAST_RADIUS && pos.col.abs_diff(target.col) < BLAST_RADIUS
}

/// Mark the footprint around `target` as under explosion and resolve the
/// casualties. Walls survive as WallUnderExplosion unless the match was
/// configured with destructible walls. Enemies inside the radius are removed;
/// a player inside the radius dies and the match auto-pauses.
pub fn apply_blast(state: &mut ArenaState, target: Position) {
    if state.paused {
        return;
    }

    let size = state.config.size;
    for row in target.row.saturating_sub(BLAST_RADIUS)..=target.row + BLAST_RADIUS {
        for col in target.col.saturating_sub(BLAST_RADIUS)..=target.col + BLAST_RADIUS {
            // The border ring stays out of the footprint.
            if row > 0 && row < size - 1 && col > 0 && col < size - 1 {
                let tile = state.grid[row][col];
                state.grid[row][col] = if state.config.walls_destructible
                    || tile == Tile::Floor
                    || tile == Tile::TargetFloor
                {
                    Tile::FloorUnderExplosion
                } else {
                    Tile::WallUnderExplosion
                };
            }
        }
    }

    if caught_in_blast(state.player.pos, target) {
        state.player.died = true;
        state.paused = true;
        state.push_state_changed();
    }

    let before = state.enemies.len();
    state.enemies.retain(|e| !caught_in_blast(e.pos, target));
    if state.enemies.len() < before {
        info!(
            "[Arena] Blast at ({}, {}) eliminated {} enemies",
            target.row,
            target.col,
            before - state.enemies.len()
        );
    }
}

/// Revert the footprint around `target` to its base tiles, one tick after
/// the blast applied.
pub fn clear_blast(state: &mut ArenaState, target: Position) {
    if state.paused {
        return;
    }

    let size = state.config.size;
    for row in target.row.saturating_sub(BLAST_RADIUS)..=target.row + BLAST_RADIUS {
        for col in target.col.saturating_sub(BLAST_RADIUS)..=target.col + BLAST_RADIUS {
            if row > 0 && row < size - 1 && col > 0 && col < size - 1 {
                match state.grid[row][col] {
                    Tile::FloorUnderExplosion => state.grid[row][col] = Tile::Floor,
                    Tile::WallUnderExplosion => state.grid[row][col] = Tile::Wall,
                    _ => {}
                }
            }
        }
    }
}
