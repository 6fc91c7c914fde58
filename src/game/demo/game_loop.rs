//! Standalone game loop for local testing/demo.
//!
//! This module provides an interactive loop for playing the game in the
//! terminal. Each accepted input stands for one second of play: the enemy
//! timer fires `enemy_speed` times and the tick timer once, so the two
//! pacing timers of a real shell collapse into a fixed per-turn sequence.

use std::io::{self, Write};

use crate::game::demo::render::{print_grid, print_status};
use crate::game::events::ArenaEvent;
use crate::game::state::ArenaState;
use crate::game::types::{ArenaConfig, Direction};

enum Command {
    Move(Direction),
    Strike,
    Pause,
    Quit,
    Wait,
}

/// Prompt the user for the next command.
fn get_player_input() -> Command {
    print!("w/a/s/d to move, SPACE for airstrike, p to pause, q to quit: ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    if input.starts_with(' ') {
        return Command::Strike;
    }
    match input.trim() {
        "w" => Command::Move(Direction::Up),
        "a" => Command::Move(Direction::Left),
        "s" => Command::Move(Direction::Down),
        "d" => Command::Move(Direction::Right),
        "p" => Command::Pause,
        "q" => Command::Quit,
        _ => Command::Wait,
    }
}

/// Run the interactive match with the default configuration.
pub fn run_game_loop() {
    let mut arena = match ArenaState::new(ArenaConfig::default()) {
        Ok(arena) => arena,
        Err(err) => {
            println!("[WARN] Cannot start the match: {}", err);
            return;
        }
    };

    println!("Greetings, soldier! Mission start!");
    arena.request_snapshot();
    render_events(&mut arena);

    loop {
        match get_player_input() {
            Command::Move(dir) => arena.move_player(dir),
            Command::Strike => arena.call_strike(),
            Command::Pause => arena.pause_toggle(),
            Command::Quit => break,
            Command::Wait => {}
        }

        for _ in 0..arena.enemy_speed() {
            arena.move_enemies();
        }
        arena.advance_tick();

        if render_events(&mut arena) {
            break;
        }
    }
}

/// Drain and render the engine's notifications.
/// Returns true once the match has ended.
fn render_events(arena: &mut ArenaState) -> bool {
    let mut over = false;
    let mut last_snapshot = None;

    for event in arena.poll_events() {
        match event {
            ArenaEvent::StateChanged { grid, player, enemies } => {
                // Only the freshest snapshot is worth drawing.
                last_snapshot = Some((grid, player, enemies));
            }
            ArenaEvent::StatusChanged {
                enemies_eliminated,
                elapsed_ticks,
                strike_pending,
                ticks_remaining,
            } => print_status(enemies_eliminated, elapsed_ticks, strike_pending, ticks_remaining),
            ArenaEvent::MatchEnded { player_won } => {
                if player_won {
                    println!("All enemies eliminated. Mission accomplished!");
                } else {
                    println!("You were caught. Game Over!");
                }
                over = true;
            }
        }
    }

    if let Some((grid, player, enemies)) = last_snapshot {
        print_grid(&grid, &player, &enemies);
    }
    over
}
