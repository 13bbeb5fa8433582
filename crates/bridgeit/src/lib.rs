//! Terminal front end for the Bridge-it connection game.
//!
//! Settings come from defaults, an optional TOML file and command-line
//! flags. The [`Console`] drives matches over any reader and writer, so
//! the whole loop can be exercised with in-memory buffers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod input;

pub use cli::Cli;
pub use config::{
    validate_board_size, ConfigError, GameSettings, PlayerSettings, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};
pub use console::{Console, GameEnd};
pub use input::{are_adjacent, describe_move, format_move, parse_move, Command, InputError, HELP_TEXT};
