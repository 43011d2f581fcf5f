//! The bedroom: keys, notes and the backpack.

use crate::config::GameConfig;
use crate::error::{QuestResult, Refusal};
use crate::player::{PlayerState, Progress};

use super::names::{BACKPACK, CORRIDOR, KEYS, NOTES};
use super::{Room, Step};

pub(super) const DESCRIPTION: &str = "ты в своей комнате. можно пройти - коридор";

/// Items that can be named in a take command here. The list never shrinks;
/// progress flags decide what is still on the table.
pub(super) const ITEMS: &[&str] = &[BACKPACK, KEYS, NOTES];

const WORN: &str = "вы надели: рюкзак";

/// Lists what is still lying around.
///
/// Without the backpack nothing can have been taken. The `(false, true, _)`
/// row covers `keys_taken` without the backpack whatever the notes flag says.
pub(super) fn look(progress: Progress) -> &'static str {
    let Progress {
        wearing_backpack,
        keys_taken,
        notes_taken,
    } = progress;

    match (wearing_backpack, keys_taken, notes_taken) {
        (true, true, true) => "пустая комната. можно пройти - коридор",
        (true, true, false) => "на столе: конспекты. можно пройти - коридор",
        (true, false, true) => "на столе: ключи. можно пройти - коридор",
        (true, false, false) => "на столе: ключи, конспекты. можно пройти - коридор",
        (false, true, _) => "на столе: конспекты, на стуле: рюкзак. можно пройти - коридор",
        (false, false, true) => "на столе: ключи, на стуле: рюкзак. можно пройти - коридор",
        (false, false, false) => {
            "на столе: ключи, конспекты, на стуле: рюкзак. можно пройти - коридор"
        }
    }
}

pub(super) fn take(item: &str, state: &mut PlayerState) -> Option<QuestResult<Step>> {
    match item {
        KEYS => Some(take_keys(state)),
        NOTES => Some(take_notes(state)),
        _ => None,
    }
}

fn take_keys(state: &mut PlayerState) -> QuestResult<Step> {
    let progress = state.progress();
    if !progress.wearing_backpack {
        return Err(Refusal::NowhereToPut);
    }
    if progress.keys_taken {
        return Err(Refusal::NoSuchItem);
    }

    state.mark_keys_taken();
    state.add_item(KEYS);
    Ok(Step::stay(format!("предмет добавлен в инвентарь: {KEYS}")))
}

/// Notes only set their flag; they never show up in the inventory.
fn take_notes(state: &mut PlayerState) -> QuestResult<Step> {
    let progress = state.progress();
    if !progress.wearing_backpack {
        return Err(Refusal::NowhereToPut);
    }
    if progress.notes_taken {
        return Err(Refusal::NoSuchItem);
    }

    state.mark_notes_taken();
    Ok(Step::stay(format!("предмет добавлен в инвентарь: {NOTES}")))
}

pub(super) fn wear(item: &str, state: &mut PlayerState) -> Option<QuestResult<Step>> {
    match item {
        BACKPACK if state.progress().wearing_backpack => Some(Err(Refusal::NoSuchItem)),
        BACKPACK => {
            state.put_on_backpack();
            Some(Ok(Step::stay(WORN)))
        }
        _ => None,
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
