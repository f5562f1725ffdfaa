//! Tick advancement.
//!
//! Advances the shared [`TickClock`](crate::resources::tickclock::TickClock)
//! once per simulation step. The core has no internal timer; the external
//! driver calls this before running the match schedule, once per rendered
//! frame.

use bevy_ecs::prelude::*;

use crate::resources::tickclock::TickClock;

/// Bump the tick counter by one.
pub fn advance_tick(world: &mut World) {
    let mut clock = world.resource_mut::<TickClock>();
    clock.tick += 1;
}
