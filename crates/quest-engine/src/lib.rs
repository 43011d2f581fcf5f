//! Room and state-transition engine for a small Russian-language text
//! adventure.
//!
//! The player wakes up at home and has to pack a backpack, find the keys and
//! get out to the street. Input lines are parsed into [`Command`]s, handed to
//! the player's current [`Room`], and answered with a narration string.
//! Rejected actions are narrated too, so a session never fails mid-game.

/// Game configuration.
pub mod config;
/// Refusals and the handler result type.
pub mod error;
/// Game controller.
pub mod game;
/// Command parsing.
pub mod parser;
/// Player state management.
pub mod player;
/// Rooms and action dispatch.
pub mod room;

pub use config::{DoorPolicy, GameConfig};
pub use error::{QuestResult, Refusal};
pub use game::{Game, PROMPT, WELCOME, handle_command, init_game};
pub use parser::{Command, action_key, parse_command};
pub use player::{Player, PlayerState, Progress};
pub use room::{Room, Step};
