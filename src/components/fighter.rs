//! Controller state for player-driven combatants.
//!
//! [`FightIntent`] is the per-tick input handed to the core by the external
//! input glue: a movement axis plus button states. [`Fighter`] is everything
//! the controller tracks across ticks: jump charge, action lockout timers,
//! intent flags, and health. Both sit next to the shared physics components;
//! entities without them are plain physics bodies.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::facing::Facing;
use crate::components::kinetics::Kinetics;

/// State of one action button for the current tick.
///
/// `held` is level-triggered (block, crouch), `pressed` is the edge for
/// one-shot triggers (jump, attack, dash).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub held: bool,
    pub pressed: bool,
}

impl ButtonState {
    /// A button going down this tick.
    pub fn press() -> Self {
        Self {
            held: true,
            pressed: true,
        }
    }

    /// A button held from a previous tick.
    pub fn hold() -> Self {
        Self {
            held: true,
            pressed: false,
        }
    }
}

/// Movement intent and button states for one controlled entity, one tick.
///
/// Written once per tick by the input source; the core never reads raw
/// device state.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FightIntent {
    /// Movement axis, roughly [-1, 1] per component.
    pub axis: Vec2,
    pub jump: ButtonState,
    pub attack: ButtonState,
    pub dash: ButtonState,
    pub block: ButtonState,
    pub crouch: ButtonState,
}

impl FightIntent {
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Per-fighter controller state layered on top of the physics components.
#[derive(Component, Debug, Clone)]
pub struct Fighter {
    /// Jumps available before requiring ground contact. Always 0 or 1.
    pub jumps: u8,
    /// Remaining ticks of attack lockout; `attacking` clears when it hits 0.
    pub attack_timer: u32,
    /// Remaining ticks of jump action display; `jumping` clears when it hits 0.
    pub jump_timer: u32,
    pub blocking: bool,
    pub crouching: bool,
    pub attacking: bool,
    pub jumping: bool,
    pub health: i32,
    /// Gated movement vector for the current tick, consumed by physics.
    pub movement: Vec2,
}

impl Fighter {
    pub fn new(health: i32) -> Self {
        Self {
            jumps: 1,
            attack_timer: 0,
            jump_timer: 0,
            blocking: false,
            crouching: false,
            attacking: false,
            jumping: false,
            health,
            movement: Vec2::ZERO,
        }
    }

    /// Count down the action timers, clearing their intent flags at zero.
    pub fn tick_timers(&mut self) {
        if self.attack_timer > 0 {
            self.attack_timer -= 1;
            if self.attack_timer == 0 {
                self.attacking = false;
            }
        }
        if self.jump_timer > 0 {
            self.jump_timer -= 1;
            if self.jump_timer == 0 {
                self.jumping = false;
            }
        }
    }

    /// Issue a jump: apply the upward impulse and spend the jump charge.
    ///
    /// No-op when no charge is left. The charge only comes back through
    /// [`Fighter::land`].
    pub fn jump(&mut self, kinetics: &mut Kinetics, impulse: f32, lockout_ticks: u32) -> bool {
        if self.jumps == 0 {
            return false;
        }
        kinetics.velocity.y = impulse;
        self.jumps -= 1;
        self.jumping = true;
        self.jump_timer = lockout_ticks;
        true
    }

    /// Arm the attack timer. No-op while blocking or jumping.
    pub fn attack(&mut self, duration_ticks: u32) -> bool {
        if self.blocking || self.jumping {
            return false;
        }
        self.attacking = true;
        self.attack_timer = duration_ticks;
        true
    }

    /// Horizontal burst along the current facing. No-op while attacking or
    /// blocking. The burst decays through the regular horizontal drag.
    pub fn dash(&mut self, kinetics: &mut Kinetics, facing: &Facing, impulse: f32) -> bool {
        if self.attacking || self.blocking {
            return false;
        }
        kinetics.velocity.x = impulse * facing.direction();
        true
    }

    /// Confirmed ground contact: restore the jump charge and end the jump.
    pub fn land(&mut self) {
        self.jumps = 1;
        self.jumping = false;
        self.jump_timer = 0;
    }

    /// Apply incoming damage. Blocked hits are absorbed entirely. Returns
    /// whether the hit connected.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.blocking {
            return false;
        }
        self.health = (self.health - amount).max(0);
        true
    }
}
