/// Game configuration constants.
///
/// This module defines the main gameplay parameters: strike countdown,
/// blast radius, the player's starting cell, and the bounds and defaults
/// for match configuration.
pub const STRIKE_COUNTDOWN: u8 = 4; // Ticks between calling a strike and the blast.

/// Chebyshev radius of the blast: tiles within `target ± BLAST_RADIUS` on both
/// axes are marked under explosion; entities strictly inside the radius die.
pub const BLAST_RADIUS: usize = 3;

/// The player's fixed starting cell (row, col).
pub const PLAYER_START: (usize, usize) = (1, 1);

/// Walls are never scattered where both row and col are below this bound,
/// keeping the area around the player's start open.
pub const START_CLEAR_ZONE: usize = 6;

/// Smallest supported arena side length.
pub const MIN_ARENA_SIZE: usize = 10;

/// Default arena side length.
pub const DEFAULT_SIZE: usize = 20;

/// Default number of interior walls.
pub const DEFAULT_WALL_COUNT: usize = 20;

/// Default number of enemies.
pub const DEFAULT_ENEMY_COUNT: usize = 5;

/// Default enemy pacing rate (sweeps per second, consumed by the shell).
pub const DEFAULT_ENEMY_SPEED: u32 = 3;
