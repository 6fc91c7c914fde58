/// Main configuration module.
///
/// Re-exports the gameplay constants.
pub mod game;
