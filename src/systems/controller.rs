//! Fighter controller systems.
//!
//! Two passes bracket the physics update each tick:
//! - [`apply_intents`] runs before physics: it counts down action timers,
//!   consumes button edges (jump, attack, dash), refreshes the held intents,
//!   and turns the raw movement axis into the tick's gated movement vector.
//! - [`select_actions`] runs after physics: it clamps positions to the
//!   arena, restores the jump charge on confirmed ground contact, relaxes
//!   horizontal velocity, and re-derives the single visible action from the
//!   post-physics state.
//!
//! Exactly one action is active per tick; switching restarts the entity's
//! animation from its first frame.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::error;

use crate::components::animation::{ActionKind, AnimationPlayer};
use crate::components::contacts::Contacts;
use crate::components::facing::Facing;
use crate::components::fighter::{FightIntent, Fighter};
use crate::components::kind::EntityKind;
use crate::components::kinetics::Kinetics;
use crate::components::mapposition::MapPosition;
use crate::resources::animationstore::AnimationStore;
use crate::resources::simconfig::SimConfig;

/// Interpret each fighter's intent into triggers and a gated movement vector.
pub fn apply_intents(
    mut query: Query<(&FightIntent, &mut Fighter, &mut Kinetics, &Facing)>,
    config: Res<SimConfig>,
) {
    for (intent, mut fighter, mut kinetics, facing) in query.iter_mut() {
        fighter.tick_timers();

        fighter.crouching = intent.crouch.held;
        // Crouching cancels block at the intent level.
        fighter.blocking = intent.block.held && !fighter.crouching;

        if intent.jump.pressed {
            fighter.jump(&mut kinetics, config.jump_impulse, config.jump_ticks);
        }
        if intent.attack.pressed {
            fighter.attack(config.attack_ticks);
        }
        if intent.dash.pressed {
            fighter.dash(&mut kinetics, facing, config.dash_impulse);
        }

        let mut movement = intent.axis;
        if movement.length_squared() > 1.0 {
            movement = movement.normalize();
        }
        // Attacking, blocking, and crouching all suppress movement intent.
        if fighter.attacking || fighter.blocking || fighter.crouching {
            movement = Vec2::ZERO;
        }
        fighter.movement = movement;
    }
}

/// Clamp to the arena, restore jump charge, decay horizontal velocity, and
/// pick the tick's action by strict priority.
pub fn select_actions(
    mut query: Query<(
        &EntityKind,
        &mut Fighter,
        &mut MapPosition,
        &mut Kinetics,
        &Contacts,
        &mut AnimationPlayer,
    )>,
    store: Res<AnimationStore>,
    config: Res<SimConfig>,
) {
    for (kind, mut fighter, mut position, mut kinetics, contacts, mut player) in query.iter_mut() {
        let mut grounded = contacts.down;

        // Bound the fighter to the arena.
        position.pos.x = position.pos.x.clamp(0.0, config.arena_width);
        position.pos.y = position.pos.y.clamp(0.0, config.arena_height);

        // The world floor line (which the arena bottom always lies on or
        // below) counts as ground contact when configured.
        if config.floor_restores_jump && position.pos.y >= config.floor_y() {
            grounded = true;
        }

        if grounded {
            fighter.land();
        }

        kinetics.settle_horizontal(config.drag);

        // Strict priority, highest first. Exactly one action per tick.
        let action = if fighter.attacking {
            ActionKind::Attack
        } else if fighter.jumping && fighter.jumps == 0 {
            ActionKind::Jump
        } else if fighter.blocking {
            ActionKind::Block
        } else if fighter.crouching {
            ActionKind::Crouch
        } else if fighter.movement.x != 0.0 {
            ActionKind::Run
        } else {
            ActionKind::Idle
        };

        // Store coverage is validated at spawn, so this only fires when a
        // kind slipped past setup with an incomplete animation set.
        if let Err(err) = store.set_action(*kind, &mut player, action) {
            error!("action switch failed: {err}");
        }
    }
}
