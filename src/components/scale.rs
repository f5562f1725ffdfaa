use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Render scale factor forwarded in draw requests.
#[derive(Component, Clone, Copy, Debug)]
pub struct Scale {
    pub scale: Vec2,
}

impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vec2::new(sx, sy),
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
