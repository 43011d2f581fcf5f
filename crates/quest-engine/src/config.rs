//! Game configuration.

/// How long an unlocked corridor door stays unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorPolicy {
    /// The lock belongs to the corridor visit. Leaving the corridor and
    /// coming back finds the door locked again.
    #[default]
    PerVisit,
    /// Unlocking is remembered for the rest of the session.
    Persistent,
}

impl DoorPolicy {
    /// Parse a policy name as accepted on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "per-visit" => Some(Self::PerVisit),
            "persistent" => Some(Self::Persistent),
            _ => None,
        }
    }

    /// Get the command-line name for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PerVisit => "per-visit",
            Self::Persistent => "persistent",
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Door-lock policy for the corridor.
    pub door: DoorPolicy,
}

impl GameConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the door-lock policy.
    pub fn with_door(mut self, door: DoorPolicy) -> Self {
        self.door = door;
        self
    }
}
