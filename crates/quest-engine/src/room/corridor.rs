//! The corridor: hub room with the locked front door.

use crate::config::{DoorPolicy, GameConfig};
use crate::error::{QuestResult, Refusal};
use crate::player::PlayerState;

use super::names::{BEDROOM, DOOR, KEYS, KITCHEN, STREET};
use super::{Room, Step};

pub(super) const DESCRIPTION: &str = "ничего интересного. можно пройти - кухня, комната, улица";

const KITCHEN_ARRIVAL: &str = "кухня, ничего интересного. можно пройти - коридор";
const DOOR_OPENED: &str = "дверь открыта";

/// Whether a newly built corridor should start with the door open.
pub(super) fn remembers_unlock(state: &PlayerState, config: &GameConfig) -> bool {
    config.door == DoorPolicy::Persistent && state.door_unlocked()
}

pub(super) fn go(target: &str, door_locked: bool) -> Option<QuestResult<Step>> {
    let step = match target {
        KITCHEN => Step::enter(Room::kitchen(), KITCHEN_ARRIVAL),
        BEDROOM => {
            let next = Room::bedroom();
            let narration = next.describe();
            Step::enter(next, narration)
        }
        STREET if door_locked => return Some(Err(Refusal::DoorLocked)),
        STREET => {
            let next = Room::street();
            let narration = next.describe();
            Step::enter(next, narration)
        }
        _ => return None,
    };
    Some(Ok(step))
}

/// Keys on the door unlock it for the rest of this visit.
pub(super) fn apply(
    item: &str,
    target: &str,
    door_locked: &mut bool,
    state: &mut PlayerState,
) -> Option<QuestResult<Step>> {
    match (item, target) {
        (KEYS, DOOR) => {
            if !state.has_item(KEYS) {
                return Some(Err(Refusal::NoKeys));
            }
            *door_locked = false;
            state.mark_door_unlocked();
            Some(Ok(Step::stay(DOOR_OPENED)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_blocked_while_locked() {
        assert_eq!(go(STREET, true), Some(Err(Refusal::DoorLocked)));
    }

    #[test]
    fn street_open_once_unlocked() {
        let step = go(STREET, false).unwrap().unwrap();
        assert_eq!(step.next, Some(Room::Street));
        assert_eq!(step.narration, "на улице весна. можно пройти - домой");
    }

    #[test]
    fn kitchen_arrival_text() {
        let step = go(KITCHEN, true).unwrap().unwrap();
        assert_eq!(step.next, Some(Room::Kitchen));
        assert_eq!(step.narration, KITCHEN_ARRIVAL);
    }

    #[test]
    fn bedroom_arrival_text() {
        let step = go(BEDROOM, true).unwrap().unwrap();
        assert_eq!(step.next, Some(Room::Bedroom));
        assert_eq!(step.narration, "ты в своей комнате. можно пройти - коридор");
    }

    #[test]
    fn keys_unlock_door() {
        let mut locked = true;
        let mut state = PlayerState::new();
        state.add_item(KEYS);

        let step = apply(KEYS, DOOR, &mut locked, &mut state).unwrap().unwrap();
        assert_eq!(step.narration, DOOR_OPENED);
        assert!(!locked);
        assert!(state.door_unlocked());
    }

    #[test]
    fn keys_required_for_door() {
        let mut locked = true;
        let mut state = PlayerState::new();

        assert_eq!(
            apply(KEYS, DOOR, &mut locked, &mut state),
            Some(Err(Refusal::NoKeys))
        );
        assert!(locked);
    }

    #[test]
    fn keys_do_nothing_to_walls() {
        let mut locked = true;
        let mut state = PlayerState::new();
        state.add_item(KEYS);
        assert!(apply(KEYS, "стена", &mut locked, &mut state).is_none());
    }

    #[test]
    fn unlock_remembered_only_when_persistent() {
        let mut state = PlayerState::new();
        state.mark_door_unlocked();

        assert!(!remembers_unlock(&state, &GameConfig::default()));
        let persistent = GameConfig::new().with_door(DoorPolicy::Persistent);
        assert!(remembers_unlock(&state, &persistent));
        assert!(!remembers_unlock(&PlayerState::new(), &persistent));
    }
}
