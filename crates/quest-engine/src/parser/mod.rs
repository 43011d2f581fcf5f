//! Command parsing.

mod command;

pub use command::{Command, action_key, parse_command};
