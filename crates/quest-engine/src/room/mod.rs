//! Rooms and their action handling.
//!
//! Every room shares one dispatch routine ([`Room::handle`]) and differs only
//! in the content functions of its submodule. A room value is built fresh on
//! each entry, so anything stored in the variant itself (the corridor's door
//! lock) lasts for one visit.

mod bedroom;
mod corridor;
mod kitchen;
mod street;

use tracing::debug;

use crate::config::GameConfig;
use crate::error::{QuestResult, Refusal};
use crate::parser::Command;
use crate::player::{PlayerState, Progress};

/// Item and place names of the command surface.
pub mod names {
    /// Keys, needed for the corridor door.
    pub const KEYS: &str = "ключи";
    /// Lecture notes.
    pub const NOTES: &str = "конспекты";
    /// The backpack. Worn, never carried.
    pub const BACKPACK: &str = "рюкзак";
    /// The front door in the corridor.
    pub const DOOR: &str = "дверь";
    /// Kitchen, as a go target.
    pub const KITCHEN: &str = "кухня";
    /// Corridor, as a go target.
    pub const CORRIDOR: &str = "коридор";
    /// Bedroom, as a go target.
    pub const BEDROOM: &str = "комната";
    /// Street, as a go target.
    pub const STREET: &str = "улица";
    /// Way back from the street.
    pub const HOME: &str = "домой";
}

/// Outcome of a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Text shown to the player.
    pub narration: String,
    /// Room the player moves into, if any.
    pub next: Option<Room>,
}

impl Step {
    /// Stay in the current room.
    pub fn stay(narration: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            next: None,
        }
    }

    /// Move into another room.
    pub fn enter(next: Room, narration: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            next: Some(next),
        }
    }
}

/// A room the player can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Room {
    /// Starting room.
    Kitchen,
    /// Hub between kitchen, bedroom and street.
    Corridor {
        /// Whether the front door is locked for this visit.
        door_locked: bool,
    },
    /// The player's own room, where the items are.
    Bedroom,
    /// Outside, past the corridor door.
    Street,
}

impl Room {
    /// Build the kitchen.
    pub fn kitchen() -> Self {
        Self::Kitchen
    }

    /// Build a corridor for a new visit.
    ///
    /// The door starts locked unless the policy keeps an earlier unlock.
    pub fn corridor(state: &PlayerState, config: &GameConfig) -> Self {
        Self::Corridor {
            door_locked: !corridor::remembers_unlock(state, config),
        }
    }

    /// Build the bedroom.
    pub fn bedroom() -> Self {
        Self::Bedroom
    }

    /// Build the street.
    pub fn street() -> Self {
        Self::Street
    }

    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::Corridor { .. } => "corridor",
            Self::Bedroom => "bedroom",
            Self::Street => "street",
        }
    }

    /// The text shown when the room is entered.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Kitchen => kitchen::DESCRIPTION,
            Self::Corridor { .. } => corridor::DESCRIPTION,
            Self::Bedroom => bedroom::DESCRIPTION,
            Self::Street => street::DESCRIPTION,
        }
    }

    /// The text for looking around, given the player's progress.
    pub fn look(&self, progress: Progress) -> &'static str {
        match self {
            Self::Kitchen => kitchen::look(progress),
            Self::Corridor { .. } => corridor::DESCRIPTION,
            Self::Bedroom => bedroom::look(progress),
            Self::Street => street::DESCRIPTION,
        }
    }

    /// Items this room offers for taking.
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Self::Bedroom => bedroom::ITEMS,
            _ => &[],
        }
    }

    /// Carry out a command in this room.
    ///
    /// Multi-word verbs are tried first (take, go, apply), each with its own
    /// refusal when the room has no matching handler. Single actions (look,
    /// wear) come next, and anything else is an unknown command.
    pub fn handle(
        &mut self,
        command: &Command,
        state: &mut PlayerState,
        config: &GameConfig,
    ) -> QuestResult<Step> {
        debug!("{}: {}", self.name(), command.action_key());

        match command {
            Command::Take { item } => self.take(item, state),
            Command::Go { target } => self.go(target, state, config),
            Command::Apply { item, target } => self.apply(item, target, state),
            Command::Look => Ok(Step::stay(self.look(state.progress()))),
            Command::Wear { item } => self.wear(item, state),
            Command::Unknown { .. } => Err(Refusal::UnknownCommand),
        }
    }

    fn take(&self, item: &str, state: &mut PlayerState) -> QuestResult<Step> {
        if !self.items().contains(&item) {
            return Err(Refusal::NoSuchItem);
        }

        let handler = match self {
            Self::Bedroom => bedroom::take(item, state),
            _ => None,
        };
        handler.unwrap_or(Err(Refusal::NoSuchItem))
    }

    fn go(&self, target: &str, state: &PlayerState, config: &GameConfig) -> QuestResult<Step> {
        let handler = match self {
            Self::Kitchen => kitchen::go(target, state, config),
            Self::Corridor { door_locked } => corridor::go(target, *door_locked),
            Self::Bedroom => bedroom::go(target, state, config),
            Self::Street => street::go(target),
        };
        handler.unwrap_or_else(|| Err(Refusal::NoPath(target.to_string())))
    }

    fn apply(&mut self, item: &str, target: &str, state: &mut PlayerState) -> QuestResult<Step> {
        if !state.has_item(item) {
            return Err(Refusal::NotInInventory(item.to_string()));
        }

        let handler = match self {
            Self::Corridor { door_locked } => corridor::apply(item, target, door_locked, state),
            _ => None,
        };
        handler.unwrap_or(Err(Refusal::NothingToApply))
    }

    fn wear(&self, item: &str, state: &mut PlayerState) -> QuestResult<Step> {
        let handler = match self {
            Self::Bedroom => bedroom::wear(item, state),
            _ => None,
        };
        handler.unwrap_or(Err(Refusal::UnknownCommand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_rooms() -> Vec<Room> {
        vec![
            Room::kitchen(),
            Room::Corridor { door_locked: true },
            Room::Corridor { door_locked: false },
            Room::bedroom(),
            Room::street(),
        ]
    }

    fn arb_room() -> impl Strategy<Value = Room> {
        prop::sample::select(all_rooms())
    }

    fn arb_progress() -> impl Strategy<Value = Progress> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(wearing_backpack, keys_taken, notes_taken)| Progress {
                wearing_backpack,
                keys_taken,
                notes_taken,
            },
        )
    }

    fn handle(room: &mut Room, state: &mut PlayerState, input: &str) -> QuestResult<Step> {
        let command = crate::parser::parse_command(input);
        room.handle(&command, state, &GameConfig::default())
    }

    #[test]
    fn descriptions_are_stable() {
        for room in all_rooms() {
            assert_eq!(room.describe(), room.describe());
            let progress = Progress::default();
            assert_eq!(room.look(progress), room.look(progress));
        }
    }

    #[test]
    fn unknown_command_in_every_room() {
        for mut room in all_rooms() {
            let mut state = PlayerState::new();
            assert_eq!(
                handle(&mut room, &mut state, "танцевать"),
                Err(Refusal::UnknownCommand)
            );
            assert_eq!(handle(&mut room, &mut state, ""), Err(Refusal::UnknownCommand));
        }
    }

    #[test]
    fn listed_item_without_handler_is_no_such_item() {
        let mut room = Room::bedroom();
        let mut state = PlayerState::new();
        state.put_on_backpack();

        assert_eq!(
            handle(&mut room, &mut state, "взять рюкзак"),
            Err(Refusal::NoSuchItem)
        );
    }

    #[test]
    fn go_without_path_names_target() {
        let mut room = Room::kitchen();
        let mut state = PlayerState::new();
        assert_eq!(
            handle(&mut room, &mut state, "идти на   крышу"),
            Err(Refusal::NoPath("на крышу".to_string()))
        );
    }

    #[test]
    fn apply_without_handler() {
        let mut room = Room::kitchen();
        let mut state = PlayerState::new();
        state.add_item(names::KEYS);
        assert_eq!(
            handle(&mut room, &mut state, "применить ключи дверь"),
            Err(Refusal::NothingToApply)
        );
    }

    #[test]
    fn wear_outside_bedroom_is_unknown() {
        let mut room = Room::kitchen();
        let mut state = PlayerState::new();
        assert_eq!(
            handle(&mut room, &mut state, "надеть рюкзак"),
            Err(Refusal::UnknownCommand)
        );
        assert!(!state.progress().wearing_backpack);
    }

    #[test]
    fn look_never_moves() {
        for mut room in all_rooms() {
            let mut state = PlayerState::new();
            let step = handle(&mut room, &mut state, "осмотреться").unwrap();
            assert_eq!(step.next, None);
        }
    }

    proptest! {
        #[test]
        fn prop_take_absent_item_is_no_such_item(
            mut room in arb_room(),
            progress in arb_progress(),
            item in "[а-я]{1,10}",
        ) {
            prop_assume!(!room.items().contains(&item.as_str()));
            let mut state = PlayerState::new();
            if progress.wearing_backpack {
                state.put_on_backpack();
            }
            if progress.keys_taken {
                state.mark_keys_taken();
                state.add_item(names::KEYS);
            }
            if progress.notes_taken {
                state.mark_notes_taken();
            }

            let result = handle(&mut room, &mut state, &format!("взять {item}"));
            prop_assert_eq!(result, Err(Refusal::NoSuchItem));
        }

        #[test]
        fn prop_apply_uncarried_item_names_it(
            mut room in arb_room(),
            item in "[а-я]{1,10}",
            target in "[а-я]{1,10}",
        ) {
            let mut state = PlayerState::new();
            let result = handle(&mut room, &mut state, &format!("применить {item} {target}"));
            prop_assert_eq!(result, Err(Refusal::NotInInventory(item)));
        }

        #[test]
        fn prop_look_is_pure(room in arb_room(), progress in arb_progress()) {
            prop_assert_eq!(room.look(progress), room.look(progress));
        }
    }
}
