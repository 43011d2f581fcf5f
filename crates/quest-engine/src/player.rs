//! Player state management.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::parser::Command;
use crate::room::Room;

/// One-way progress flags. Once set, a flag stays set for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// The backpack has been put on.
    pub wearing_backpack: bool,
    /// The keys have been picked up.
    pub keys_taken: bool,
    /// The notes have been picked up.
    pub notes_taken: bool,
}

/// Everything the player carries and has achieved, apart from the room.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    inventory: Vec<String>,
    progress: Progress,
    door_unlocked: bool,
}

impl PlayerState {
    /// Create an empty state: nothing carried, no progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items carried, in pickup order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Add an item to inventory. Already carried items are not duplicated.
    pub fn add_item(&mut self, item: impl Into<String>) {
        let item = item.into();
        if !self.has_item(&item) {
            info!("inventory: + {item}");
            self.inventory.push(item);
        }
    }

    /// Current progress flags.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Mark the backpack as worn.
    pub fn put_on_backpack(&mut self) {
        info!("progress: wearing backpack");
        self.progress.wearing_backpack = true;
    }

    /// Mark the keys as taken.
    pub fn mark_keys_taken(&mut self) {
        info!("progress: keys taken");
        self.progress.keys_taken = true;
    }

    /// Mark the notes as taken.
    pub fn mark_notes_taken(&mut self) {
        info!("progress: notes taken");
        self.progress.notes_taken = true;
    }

    /// Whether the corridor door has ever been unlocked this session.
    pub fn door_unlocked(&self) -> bool {
        self.door_unlocked
    }

    /// Remember that the corridor door was unlocked.
    pub fn mark_door_unlocked(&mut self) {
        info!("world: door unlocked");
        self.door_unlocked = true;
    }
}

/// The player: the room they are in plus their state.
#[derive(Debug, Clone)]
pub struct Player {
    room: Room,
    state: PlayerState,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a player in the kitchen with nothing carried.
    pub fn new() -> Self {
        Self::at(Room::kitchen())
    }

    /// Create a player with empty state in the given room.
    pub fn at(room: Room) -> Self {
        Self {
            room,
            state: PlayerState::new(),
        }
    }

    /// The room the player is in.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The player's carried items and flags.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Items carried, in pickup order.
    pub fn inventory(&self) -> &[String] {
        self.state.inventory()
    }

    /// Current progress flags.
    pub fn progress(&self) -> Progress {
        self.state.progress()
    }

    /// Hand a command to the current room and return the narration.
    ///
    /// When the room answers with a transition, the new room replaces the
    /// current one.
    pub fn act(&mut self, command: &Command, config: &GameConfig) -> String {
        match self.room.handle(command, &mut self.state, config) {
            Ok(step) => {
                if let Some(next) = step.next {
                    info!("room: {} -> {}", self.room.name(), next.name());
                    self.room = next;
                }
                step.narration
            }
            Err(refusal) => {
                debug!("{} refused {:?}: {refusal}", self.room.name(), command);
                refusal.to_string()
            }
        }
    }
}
