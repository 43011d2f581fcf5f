//! Command parsing for player input.

const TAKE_VERB: &str = "взять";
const GO_VERB: &str = "идти";
const APPLY_VERB: &str = "применить";
const LOOK_VERB: &str = "осмотреться";
const WEAR_VERB: &str = "надеть";

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look around the current room.
    Look,
    /// Go to a named place.
    Go {
        /// The place name, possibly several words.
        target: String,
    },
    /// Take an item from the room.
    Take {
        /// The item name.
        item: String,
    },
    /// Put on a wearable item.
    Wear {
        /// The item name.
        item: String,
    },
    /// Apply a carried item to a target.
    Apply {
        /// The item name.
        item: String,
        /// What the item is applied to.
        target: String,
    },
    /// Anything the parser does not recognize.
    Unknown {
        /// The normalized input, empty for blank lines.
        input: String,
    },
}

impl Command {
    /// The canonical action key for this command.
    ///
    /// `Take` and `Apply` keep only their leading arguments, so
    /// `взять ключи сейчас` renders as `взять ключи`.
    pub fn action_key(&self) -> String {
        match self {
            Self::Look => LOOK_VERB.to_string(),
            Self::Go { target } => format!("{GO_VERB} {target}"),
            Self::Take { item } => format!("{TAKE_VERB} {item}"),
            Self::Wear { item } => format!("{WEAR_VERB} {item}"),
            Self::Apply { item, target } => format!("{APPLY_VERB} {item} {target}"),
            Self::Unknown { input } => input.clone(),
        }
    }
}

/// Normalize raw input into an action key.
///
/// Runs of whitespace collapse to single spaces. Returns `None` when the
/// input holds no words.
pub fn action_key(input: &str) -> Option<String> {
    let words: Vec<&str> = input.split_whitespace().collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();

    match words.as_slice() {
        [verb, item, ..] if *verb == TAKE_VERB => Command::Take {
            item: (*item).to_string(),
        },
        [verb, rest @ ..] if *verb == GO_VERB && !rest.is_empty() => Command::Go {
            target: rest.join(" "),
        },
        [verb, item, target, ..] if *verb == APPLY_VERB => Command::Apply {
            item: (*item).to_string(),
            target: (*target).to_string(),
        },
        [verb] if *verb == LOOK_VERB => Command::Look,
        [verb, item] if *verb == WEAR_VERB => Command::Wear {
            item: (*item).to_string(),
        },
        _ => Command::Unknown {
            input: action_key(input).unwrap_or_default(),
        },
    }
}
