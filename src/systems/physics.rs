//! Axis-separated physics integration against the tile arena.
//!
//! One system owns the whole per-tick physics sequence for every entity:
//! contact reset, frame movement, the X pass, the Y pass, facing, gravity,
//! and velocity zeroing. Horizontal displacement is resolved fully before
//! vertical; this prevents tunneling through tile corners and makes the
//! outcome of a diagonal move deterministic, with horizontal correction
//! taking priority within a tick.
//!
//! Contract
//! - Reads [`Arena`] twice per entity, once per axis, at the already-moved
//!   position; the Y-pass query depends on X having been corrected first.
//! - Mutates position, velocity, contacts, and facing; never animation.
//! - Contacts reflect only this tick's movement; there is no cross-tick
//!   collision state.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::contacts::Contacts;
use crate::components::facing::Facing;
use crate::components::fighter::Fighter;
use crate::components::hitbox::Hitbox;
use crate::components::kinetics::Kinetics;
use crate::components::mapposition::MapPosition;
use crate::resources::arena::Arena;
use crate::resources::simconfig::SimConfig;
use crate::resources::tickclock::TickClock;

/// Integrate movement and resolve tile collisions for every physics entity.
pub fn physics(
    mut query: Query<(
        &mut MapPosition,
        &Hitbox,
        &mut Kinetics,
        &mut Contacts,
        &mut Facing,
        Option<&Fighter>,
    )>,
    arena: Res<Arena>,
    clock: Res<TickClock>,
    config: Res<SimConfig>,
) {
    for (mut position, hitbox, mut kinetics, mut contacts, mut facing, fighter) in query.iter_mut()
    {
        contacts.reset();

        let movement = fighter.map(|f| f.movement).unwrap_or(Vec2::ZERO);
        let frame_movement = (movement + kinetics.velocity) * clock.time_scale * kinetics.speed;

        // X pass: move, then push back out of any overlapped solid. The
        // corrected x is written back immediately so the Y pass queries the
        // arena at the resolved position.
        position.pos.x += frame_movement.x;
        let mut rect = hitbox.aabb(position.pos);
        for solid in arena.solids_near(position.pos) {
            if rect.overlaps(&solid) {
                if frame_movement.x > 0.0 {
                    rect.set_right(solid.left());
                    contacts.right = true;
                }
                if frame_movement.x < 0.0 {
                    rect.set_left(solid.right());
                    contacts.left = true;
                }
                position.pos.x = rect.x;
            }
        }

        // Y pass, strictly after the X pass.
        position.pos.y += frame_movement.y;
        let mut rect = hitbox.aabb(position.pos);
        for solid in arena.solids_near(position.pos) {
            if rect.overlaps(&solid) {
                if frame_movement.y > 0.0 {
                    rect.set_bottom(solid.top());
                    contacts.down = true;
                }
                if frame_movement.y < 0.0 {
                    rect.set_top(solid.bottom());
                    contacts.up = true;
                }
                position.pos.y = rect.y;
            }
        }

        facing.update_from(movement.x);

        // Gravity, capped at terminal velocity, then zeroed on vertical
        // contact or at the world floor line. The order matters: zeroing must
        // see the post-gravity velocity of this same tick.
        kinetics.velocity.y = (kinetics.velocity.y + config.gravity).min(config.terminal_velocity);
        if contacts.down || contacts.up || position.pos.y > config.floor_y() {
            kinetics.velocity.y = 0.0;
        }
    }
}
