//! The street outside the flat.

use crate::error::QuestResult;

use super::names::HOME;
use super::{Room, Step};

pub(super) const DESCRIPTION: &str = "на улице весна. можно пройти - домой";

const GOING_HOME: &str = "вы идете домой";

/// Going home leads straight to the bedroom.
pub(super) fn go(target: &str) -> Option<QuestResult<Step>> {
    match target {
        HOME => Some(Ok(Step::enter(Room::bedroom(), GOING_HOME))),
        _ => None,
    }
}
