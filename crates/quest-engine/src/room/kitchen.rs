//! The kitchen, where the game starts.

use crate::config::GameConfig;
use crate::error::QuestResult;
use crate::player::{PlayerState, Progress};

use super::names::CORRIDOR;
use super::{Room, Step};

pub(super) const DESCRIPTION: &str =
    "ты находишься на кухне, на столе: чай, надо собрать рюкзак и идти в универ. можно пройти - коридор";

const PACKED: &str = "ты находишься на кухне, на столе: чай, надо идти в универ. можно пройти - коридор";

/// Once the backpack is on, there is nothing left to pack.
pub(super) fn look(progress: Progress) -> &'static str {
    if progress.wearing_backpack {
        PACKED
    } else {
        DESCRIPTION
    }
}

pub(super) fn go(
    target: &str,
    state: &PlayerState,
    config: &GameConfig,
) -> Option<QuestResult<Step>> {
    match target {
        CORRIDOR => {
            let next = Room::corridor(state, config);
            let narration = next.describe();
            Some(Ok(Step::enter(next, narration)))
        }
        _ => None,
    }
}
