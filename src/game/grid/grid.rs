use rand::Rng;
use rand::seq::IteratorRandom;

use crate::config::game::{PLAYER_START, START_CLEAR_ZONE};
use crate::game::types::{Position, Tile};

/// Build the bordered arena: a `size` x `size` matrix whose outer ring is
/// Wall and whose interior is Floor. The border is never mutated afterwards.
pub fn generate_grid(size: usize) -> Vec<Vec<Tile>> {
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    if row == 0 || col == 0 || row == size - 1 || col == size - 1 {
                        Tile::Wall
                    } else {
                        Tile::Floor
                    }
                })
                .collect()
        })
        .collect()
}

/// Scatter `count` walls uniformly over eligible interior floor cells.
/// Walls are kept out of the zone around the player's start, and off the
/// start cell itself. Eligibility was already checked by the config
/// validation, so exactly `count` cells are always available.
pub fn scatter_walls<R: Rng>(grid: &mut Vec<Vec<Tile>>, count: usize, rng: &mut R) {
    let size = grid.len();
    let candidates: Vec<Position> = (1..size - 1)
        .flat_map(|row| (1..size - 1).map(move |col| Position { row, col }))
        .filter(|p| {
            !(p.row == PLAYER_START.0 && p.col == PLAYER_START.1)
                && grid[p.row][p.col] == Tile::Floor
                && !(p.row < START_CLEAR_ZONE && p.col < START_CLEAR_ZONE)
        })
        .collect();

    for pos in candidates.into_iter().choose_multiple(rng, count) {
        grid[pos.row][pos.col] = Tile::Wall;
    }
}
