//! Enemy entity logic.
//!
//! This module handles spawning enemies and the wander AI's re-facing.

use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Serialize, Deserialize};

use crate::game::types::{Position, Direction, Tile, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Position,
    pub facing: Direction,
}

/// Scatter `count` enemies uniformly over the free cells of the far quadrant,
/// each with a random facing. Enemies never share a cell and never start on a
/// wall; the player's cell is deliberately not checked (the quadrant keeps
/// them apart anyway).
///
/// Fails when the quadrant does not hold enough free cells, so construction
/// errors out instead of hunting for cells that are not there.
pub fn spawn_enemies<R: Rng>(
    grid: &Vec<Vec<Tile>>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Enemy>, ConfigError> {
    let size = grid.len();
    let lo = 1 + size / 4;
    let hi = size - 2;

    let free_cells: Vec<Position> = (lo..=hi)
        .flat_map(|row| (lo..=hi).map(move |col| Position { row, col }))
        .filter(|p| grid[p.row][p.col] == Tile::Floor)
        .collect();

    if free_cells.len() < count {
        return Err(ConfigError::TooManyEnemies {
            requested: count,
            capacity: free_cells.len(),
        });
    }

    let mut enemies = Vec::with_capacity(count);
    for pos in free_cells.into_iter().choose_multiple(rng, count) {
        enemies.push(Enemy {
            pos,
            facing: Direction::ALL[rng.random_range(0..4)],
        });
    }
    Ok(enemies)
}

/// New facing for an enemy whose step was blocked: uniform over the 3
/// directions other than the exact reverse (enemies never double back on a
/// blocked step).
pub fn random_turn<R: Rng>(facing: Direction, rng: &mut R) -> Direction {
    let options: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|d| *d != facing.reverse())
        .collect();
    options[rng.random_range(0..options.len())]
}
