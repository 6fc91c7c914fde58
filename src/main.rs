//! Main entry point for the terminal shell.
//!
//! Initializes logging and runs the interactive demo loop with the default
//! match configuration. The game-state engine itself lives under `game/`
//! and is driven purely through commands and polled notifications.

pub mod config;
mod game;

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    game::demo::run_game_loop();
}
