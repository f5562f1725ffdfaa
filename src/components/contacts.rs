use bevy_ecs::prelude::Component;

/// Per-side collision flags for the current tick.
///
/// Reset at the start of every physics update and set only during that tick's
/// axis passes. Values never persist across ticks; systems that need ground
/// contact must read them after the physics system and before the next reset.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Contacts {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
