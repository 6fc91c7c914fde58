//! Notifications pushed by the engine to its shell.
//!
//! Change notifications are queued rather than delivered through callbacks:
//! each mutating command pushes the events it produced, and the shell drains
//! them with `ArenaState::poll_events` to redraw and to detect the end of
//! the match.

use serde::{Serialize, Deserialize};

use crate::game::types::Tile;
use crate::game::entities::{Player, Enemy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    /// Full snapshot of the arena, fired after every state mutation.
    StateChanged {
        grid: Vec<Vec<Tile>>,
        player: Player,
        enemies: Vec<Enemy>,
    },
    /// Counters for the shell's status panel, fired once per tick.
    StatusChanged {
        enemies_eliminated: usize,
        elapsed_ticks: u32,
        strike_pending: bool,
        ticks_remaining: u8,
    },
    /// Terminal outcome. The match is auto-paused when this fires.
    MatchEnded { player_won: bool },
}
