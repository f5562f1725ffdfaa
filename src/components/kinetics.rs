//! Kinematic state for entities moved by the physics system.
//!
//! [`Kinetics`] stores the residual velocity carried between ticks (gravity
//! pull, jump impulses, dash bursts) and the per-entity speed constant that
//! scales the whole frame movement. Intent movement is not stored here; it is
//! recomputed every tick by the controller.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity plus per-entity speed scaling, in pixels per tick.
#[derive(Component, Clone, Copy, Debug)]
pub struct Kinetics {
    /// Residual velocity added to the movement intent each tick.
    pub velocity: Vec2,
    /// Per-entity speed constant multiplying the combined frame movement.
    pub speed: f32,
}

impl Default for Kinetics {
    fn default() -> Self {
        Self::new()
    }
}

impl Kinetics {
    /// Zero velocity, unit speed.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            speed: 1.0,
        }
    }

    pub fn with_speed(speed: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            speed,
        }
    }

    /// Relax horizontal velocity toward zero by `drag`, never overshooting.
    pub fn settle_horizontal(&mut self, drag: f32) {
        if self.velocity.x > 0.0 {
            self.velocity.x = (self.velocity.x - drag).max(0.0);
        } else {
            self.velocity.x = (self.velocity.x + drag).min(0.0);
        }
    }
}
