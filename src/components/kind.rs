use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Which combatant archetype an entity is.
///
/// The kind selects per-entity conventions that are configuration, not
/// behavior: which animation set the entity draws from and whether its
/// rendered asset is mirrored relative to the others (the red player's
/// sheets face the opposite way, so its flip convention is inverted).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    PlayerBlue,
    PlayerRed,
    /// Non-controlled training target. Shares the physics routine, has no
    /// controller state.
    Dummy,
}

impl EntityKind {
    /// Whether this kind's source art faces left, inverting the flip rule.
    pub fn mirrored(&self) -> bool {
        matches!(self, EntityKind::PlayerRed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::PlayerBlue => "player_blue",
            EntityKind::PlayerRed => "player_red",
            EntityKind::Dummy => "dummy",
        }
    }
}
