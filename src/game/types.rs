use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::config::game::{MIN_ARENA_SIZE, START_CLEAR_ZONE};
use crate::config::game::{DEFAULT_SIZE, DEFAULT_WALL_COUNT, DEFAULT_ENEMY_COUNT, DEFAULT_ENEMY_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// The adjacent cell one step in `dir`. Callers only ever step from
    /// interior cells, so the result is always a valid grid index.
    pub fn step(self, dir: Direction) -> Position {
        match dir {
            Direction::Up => Position { row: self.row - 1, col: self.col },
            Direction::Right => Position { row: self.row, col: self.col + 1 },
            Direction::Down => Position { row: self.row + 1, col: self.col },
            Direction::Left => Position { row: self.row, col: self.col - 1 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// One cell of the arena. Cells flip between their base kind (Floor/Wall)
/// and an under-explosion kind while a blast is live; TargetFloor marks the
/// cell queued for detonation during the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Floor,
    Wall,
    FloorUnderExplosion,
    WallUnderExplosion,
    TargetFloor,
}

/// Match configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Side length of the square arena, border included.
    pub size: usize,
    /// Number of walls scattered on interior floor cells.
    pub wall_count: usize,
    /// Number of enemies scattered in the far quadrant.
    pub enemy_count: usize,
    /// Enemy pacing rate (sweeps per second). The engine only stores it;
    /// the shell owns the timer that calls `move_enemies`.
    pub enemy_speed: u32,
    /// Whether walls caught in a blast turn into floor-under-explosion
    /// instead of surviving as wall-under-explosion.
    pub walls_destructible: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            size: DEFAULT_SIZE,
            wall_count: DEFAULT_WALL_COUNT,
            enemy_count: DEFAULT_ENEMY_COUNT,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            walls_destructible: true,
        }
    }
}

impl ArenaConfig {
    /// Cells eligible for a scattered wall: the interior minus the cleared
    /// zone around the player's start.
    pub fn wall_capacity(&self) -> usize {
        let interior = self.size - 2;
        let zone = (START_CLEAR_ZONE - 1).min(interior);
        interior * interior - zone * zone
    }

    /// Side length of the far quadrant enemies spawn in.
    pub fn enemy_zone_side(&self) -> usize {
        self.size - 2 - self.size / 4
    }

    /// Rejects configurations that could never be placed, so construction
    /// fails fast instead of searching for cells that do not exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_ARENA_SIZE {
            return Err(ConfigError::ArenaTooSmall { size: self.size, min: MIN_ARENA_SIZE });
        }
        if self.enemy_speed == 0 {
            return Err(ConfigError::ZeroEnemySpeed);
        }
        if self.enemy_count == 0 {
            return Err(ConfigError::NoEnemies);
        }
        if self.wall_count > self.wall_capacity() {
            return Err(ConfigError::TooManyWalls {
                requested: self.wall_count,
                capacity: self.wall_capacity(),
            });
        }
        let zone = self.enemy_zone_side();
        if self.enemy_count > zone * zone {
            return Err(ConfigError::TooManyEnemies {
                requested: self.enemy_count,
                capacity: zone * zone,
            });
        }
        Ok(())
    }
}

/// Construction-time configuration errors. Everything else the engine
/// refuses (invalid moves, redundant strikes, unpausing a lost match) is
/// silently ignored rather than reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("arena size {size} is below the minimum of {min}")]
    ArenaTooSmall { size: usize, min: usize },
    #[error("enemy speed must be at least 1")]
    ZeroEnemySpeed,
    #[error("a match needs at least one enemy")]
    NoEnemies,
    #[error("{requested} walls requested but only {capacity} cells are eligible")]
    TooManyWalls { requested: usize, capacity: usize },
    #[error("{requested} enemies requested but only {capacity} cells are eligible")]
    TooManyEnemies { requested: usize, capacity: usize },
}
