use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::game::{PLAYER_START, STRIKE_COUNTDOWN};
use crate::game::entities::{Enemy, Player, spawn_enemies};
use crate::game::events::ArenaEvent;
use crate::game::grid::{generate_grid, scatter_walls};
use crate::game::systems::{apply_blast, clear_blast, step_player, sweep_enemies};
use crate::game::types::{ArenaConfig, ConfigError, Direction, Position, Tile};

/// The one strike in flight: its target cell and the ticks left before the
/// blast. A countdown of 0 means the blast applied on the previous tick and
/// the footprint is waiting to be cleared.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Strike {
    pub(crate) target: Position,
    pub(crate) countdown: u8,
}

/// The arena engine: owns the whole match state and applies every command.
///
/// All time progression is driven from outside: the shell calls
/// `advance_tick` (nominally once per second) and `move_enemies` (at
/// `enemy_speed` calls per second) on its own cadence. The engine never
/// schedules anything itself.
pub struct ArenaState {
    pub(crate) config: ArenaConfig,
    pub(crate) grid: Vec<Vec<Tile>>,
    pub(crate) player: Player,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) strike: Option<Strike>,
    pub(crate) paused: bool,
    pub(crate) elapsed_ticks: u32,
    pub(crate) events: Vec<ArenaEvent>,
    pub(crate) rng: StdRng,
}

impl ArenaState {
    /// Build a match from `config` with an OS-seeded random source.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Build a match from `config` with a caller-supplied random source.
    /// Seeding the source makes placement and wander AI deterministic.
    pub fn with_rng(config: ArenaConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut grid = generate_grid(config.size);
        scatter_walls(&mut grid, config.wall_count, &mut rng);

        let player = Player::new(Position { row: PLAYER_START.0, col: PLAYER_START.1 });
        let enemies = spawn_enemies(&grid, config.enemy_count, &mut rng)?;

        info!(
            "[Arena] New match: {0}x{0} grid, {1} walls, {2} enemies",
            config.size, config.wall_count, config.enemy_count
        );

        Ok(ArenaState {
            config,
            grid,
            player,
            enemies,
            strike: None,
            paused: false,
            elapsed_ticks: 0,
            events: Vec::new(),
            rng,
        })
    }

    /// One-time pull of the initial state, called by the shell once its own
    /// surface is ready to render.
    pub fn request_snapshot(&mut self) {
        self.push_state_changed();
    }

    /// Drain the notifications produced since the last poll.
    pub fn poll_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }

    /// Try to move the player one step. Ignored while paused. A rejected
    /// step leaves position and facing untouched; an accepted step can kill
    /// the player (live explosion, enemy cell), which auto-pauses the match.
    pub fn move_player(&mut self, dir: Direction) {
        if self.paused {
            return;
        }

        step_player(self, dir);

        if self.player.died {
            self.paused = true;
            info!("[Arena] Player down, match over");
            self.events.push(ArenaEvent::MatchEnded { player_won: false });
        }
        self.push_state_changed();
    }

    /// Queue an airstrike on the player's current cell. At most one strike
    /// is in flight: while one is pending this is a no-op.
    pub fn call_strike(&mut self) {
        if self.strike.is_none() {
            let target = self.player.pos;
            self.grid[target.row][target.col] = Tile::TargetFloor;
            self.strike = Some(Strike { target, countdown: STRIKE_COUNTDOWN });
            debug!("[Arena] Airstrike called on ({}, {})", target.row, target.col);
        }
    }

    /// Advance one tick. Ignored while paused. Drives the strike countdown
    /// (blast on the 1 -> 0 transition, footprint cleared the tick after),
    /// bumps the elapsed-time counter and emits the status notification.
    pub fn advance_tick(&mut self) {
        if self.paused {
            return;
        }

        if let Some(Strike { target, countdown }) = self.strike {
            if countdown > 1 {
                self.strike = Some(Strike { target, countdown: countdown - 1 });
            } else if countdown == 1 {
                apply_blast(self, target);
                self.strike = Some(Strike { target, countdown: 0 });
            } else {
                clear_blast(self, target);
                self.strike = None;
            }
        }

        self.elapsed_ticks += 1;

        let (strike_pending, ticks_remaining) = match &self.strike {
            Some(strike) => (true, strike.countdown),
            None => (false, STRIKE_COUNTDOWN),
        };
        self.events.push(ArenaEvent::StatusChanged {
            enemies_eliminated: self.config.enemy_count - self.enemies.len(),
            elapsed_ticks: self.elapsed_ticks,
            strike_pending,
            ticks_remaining,
        });

        if self.player.died {
            self.events.push(ArenaEvent::MatchEnded { player_won: false });
        }
    }

    /// Run one enemy sweep. Ignored while paused. Ends the match when the
    /// sweep killed the player or eliminated the last enemy.
    pub fn move_enemies(&mut self) {
        if self.paused {
            return;
        }

        sweep_enemies(self);
        self.push_state_changed();

        if self.player.died {
            self.paused = true;
            info!("[Arena] Player down, match over");
            self.events.push(ArenaEvent::MatchEnded { player_won: false });
        } else if self.enemies.is_empty() {
            self.paused = true;
            info!("[Arena] All enemies eliminated, match won");
            self.events.push(ArenaEvent::MatchEnded { player_won: true });
        }
    }

    /// Flip between paused and running. A lost match stays paused: once the
    /// player died the pause can no longer be lifted.
    pub fn pause_toggle(&mut self) {
        if self.paused && !self.player.died {
            self.paused = false;
        } else {
            self.paused = true;
        }
    }

    pub fn grid(&self) -> &Vec<Vec<Tile>> {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &Vec<Enemy> {
        &self.enemies
    }

    pub fn player_died(&self) -> bool {
        self.player.died
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Pacing hint for the shell's enemy timer, in sweeps per second. The
    /// engine itself never consumes it.
    pub fn enemy_speed(&self) -> u32 {
        self.config.enemy_speed
    }

    pub(crate) fn push_state_changed(&mut self) {
        self.events.push(ArenaEvent::StateChanged {
            grid: self.grid.clone(),
            player: self.player,
            enemies: self.enemies.clone(),
        });
    }
}
