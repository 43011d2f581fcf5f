//! Game controller: owns the player and routes commands to rooms.

use tracing::debug;

use crate::config::GameConfig;
use crate::parser::parse_command;
use crate::player::Player;

/// Banner printed before the first command.
pub const WELCOME: &str = "Добро пожаловать в текстовую игру! \nОсмотритесь.";

/// Marker printed after each narration.
pub const PROMPT: &str = "> ";

/// A single-player game session.
#[derive(Debug, Clone, Default)]
pub struct Game {
    player: Player,
    config: GameConfig,
}

impl Game {
    /// Start a game in the kitchen with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a game in the kitchen with the given configuration.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            player: init_game(),
            config,
        }
    }

    /// The welcome banner.
    pub fn welcome(&self) -> &'static str {
        WELCOME
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Process one line of player input and return the narration.
    pub fn handle_command(&mut self, input: &str) -> String {
        let command = parse_command(input);
        debug!("parsed {input:?} as {command:?}");
        self.player.act(&command, &self.config)
    }
}

/// Create a fresh player: kitchen, empty inventory, no progress.
pub fn init_game() -> Player {
    Player::new()
}

/// Process one line of input for a player under the default configuration.
pub fn handle_command(player: &mut Player, input: &str) -> String {
    player.act(&parse_command(input), &GameConfig::default())
}
