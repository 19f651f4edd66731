//! Beat them all: a console beat 'em all with a trivia twist.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod logging;

pub use crate::config::GameConfig;
pub use crate::game_loop::{Game, Outcome};
pub use crate::input::Console;
