use bevy_ecs::prelude::Component;

/// Horizontal facing of an entity's rendered sprite.
///
/// `flip` is the raw mirror bit handed to the renderer. Kinds whose source
/// art faces the opposite way set `mirrored`, which inverts how movement
/// direction maps onto `flip`. The facing only changes on nonzero horizontal
/// intent; standing still keeps the last direction.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Facing {
    pub flip: bool,
    pub mirrored: bool,
}

impl Facing {
    pub fn new(mirrored: bool) -> Self {
        Self {
            flip: false,
            mirrored,
        }
    }

    /// Update the flip bit from the sign of horizontal movement intent.
    pub fn update_from(&mut self, movement_x: f32) {
        if movement_x > 0.0 {
            self.flip = !self.mirrored;
        } else if movement_x < 0.0 {
            self.flip = self.mirrored;
        }
    }

    /// World-space direction the entity faces: +1.0 right, -1.0 left.
    pub fn direction(&self) -> f32 {
        if self.flip != self.mirrored { 1.0 } else { -1.0 }
    }
}
