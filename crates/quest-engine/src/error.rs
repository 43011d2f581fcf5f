//! Refusals: actions the current room rejects.
//!
//! A refusal is never fatal. Its `Display` output is the narration the
//! player sees, so the line loop treats it exactly like a successful reply.

use thiserror::Error;

/// Result type for room handlers.
pub type QuestResult<T> = Result<T, Refusal>;

/// Reasons a command could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Refusal {
    /// The input did not map to any action of the current room.
    #[error("неизвестная команда")]
    UnknownCommand,

    /// The item is not here, or is already taken.
    #[error("нет такого")]
    NoSuchItem,

    /// No exit leads to the named place.
    #[error("нет пути в {0}")]
    NoPath(String),

    /// The player does not carry the item they tried to apply.
    #[error("нет предмета в инвентаре - {0}")]
    NotInInventory(String),

    /// The carried item has no use on that target here.
    #[error("не к чему применить")]
    NothingToApply,

    /// The corridor door is still locked.
    #[error("дверь закрыта")]
    DoorLocked,

    /// Unlocking was attempted without keys.
    #[error("у вас нет ключей")]
    NoKeys,

    /// Taking requires the backpack to be worn.
    #[error("некуда класть")]
    NowhereToPut,
}
