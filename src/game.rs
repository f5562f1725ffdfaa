//! Match setup and tick driving.
//!
//! Gathers the pieces into a runnable match: a [`World`] with the simulation
//! resources, validated entity spawning, and the fixed-order tick schedule.
//! The external clock/driver calls [`run_tick`] exactly once per rendered
//! frame; everything inside runs to completion synchronously.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::animation::{ActionKind, AnimationPlayer};
use crate::components::contacts::Contacts;
use crate::components::facing::Facing;
use crate::components::fighter::{FightIntent, Fighter};
use crate::components::hitbox::Hitbox;
use crate::components::kind::EntityKind;
use crate::components::kinetics::Kinetics;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::error::SimError;
use crate::resources::animationstore::{AnimationStore, SequenceDef};
use crate::resources::arena::Arena;
use crate::resources::drawqueue::DrawQueue;
use crate::resources::simconfig::SimConfig;
use crate::resources::tickclock::TickClock;
use crate::systems::animation::animation;
use crate::systems::controller::{apply_intents, select_actions};
use crate::systems::physics::physics;
use crate::systems::render::queue_draw_requests;
use crate::systems::time::advance_tick;

/// Build a world holding the match resources.
pub fn setup_world(config: SimConfig, arena: Arena, store: AnimationStore) -> World {
    let mut world = World::new();
    world.insert_resource(TickClock::default());
    world.insert_resource(DrawQueue::default());
    world.insert_resource(config);
    world.insert_resource(arena);
    world.insert_resource(store);
    world
}

/// Spawn a plain physics entity.
///
/// Construction is the only fallible moment of an entity's life: a negative
/// size or non-finite position is rejected here so the per-tick systems can
/// assume valid state.
pub fn spawn_entity(
    world: &mut World,
    kind: EntityKind,
    pos: Vec2,
    size: Vec2,
    speed: f32,
) -> Result<Entity, SimError> {
    if !pos.is_finite() {
        return Err(SimError::InvalidEntity(format!(
            "non-finite position {pos}"
        )));
    }
    if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
        return Err(SimError::InvalidEntity(format!(
            "negative or non-finite size {size}"
        )));
    }

    let entity = world
        .spawn((
            kind,
            MapPosition { pos },
            Hitbox::new(size.x, size.y),
            Kinetics::with_speed(speed),
            Contacts::default(),
            Facing::new(kind.mirrored()),
            AnimationPlayer::new(ActionKind::Idle),
            Scale::default(),
        ))
        .id();
    Ok(entity)
}

/// Spawn a player-controlled fighter with the configured hitbox and tuning.
///
/// The animation store must cover every action for `kind`; an incomplete set
/// fails here, before the first tick, instead of at the tick that first
/// requests the missing sequence.
pub fn spawn_fighter(world: &mut World, kind: EntityKind, pos: Vec2) -> Result<Entity, SimError> {
    world.resource::<AnimationStore>().validate(kind)?;

    let (size, speed, health) = {
        let config = world.resource::<SimConfig>();
        (
            Vec2::new(config.fighter_width, config.fighter_height),
            config.fighter_speed,
            config.health,
        )
    };

    let entity = spawn_entity(world, kind, pos, size, speed)?;
    world
        .entity_mut(entity)
        .insert((Fighter::new(health), FightIntent::neutral()));
    info!("Spawned fighter {} at {}", kind.as_str(), pos);
    Ok(entity)
}

/// The fixed per-tick system order.
///
/// The chain is the whole concurrency story: systems run one after another,
/// and entities inside each system are visited in stable spawn order, so
/// order-sensitive overlap resolution plays out the same way every tick.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            apply_intents,
            physics,
            select_actions,
            animation,
            queue_draw_requests,
        )
            .chain(),
    );
    schedule
}

/// Advance the match by one tick.
pub fn run_tick(world: &mut World, schedule: &mut Schedule) {
    advance_tick(world);
    schedule.run(world);
}

/// Built-in animation set for the two player kinds, used by the demo driver
/// and tests when no definition file is given.
pub fn demo_animations() -> AnimationStore {
    let mut store = AnimationStore::new();
    for kind in [EntityKind::PlayerBlue, EntityKind::PlayerRed] {
        for (action, frame_count, ticks_per_frame, looped) in [
            (ActionKind::Idle, 4, 4, true),
            (ActionKind::Run, 6, 4, true),
            (ActionKind::Jump, 3, 5, false),
            (ActionKind::Attack, 5, 5, false),
            (ActionKind::Block, 2, 6, true),
            (ActionKind::Crouch, 2, 6, true),
        ] {
            store.insert(
                kind,
                action,
                SequenceDef {
                    tex_key: format!("{}/{}", kind.as_str(), action.as_str()).into(),
                    offset: Vec2::new(-50.0, -100.0),
                    frame_count,
                    ticks_per_frame,
                    looped,
                },
            );
        }
    }
    store
}
