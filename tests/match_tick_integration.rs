//! Whole-tick integration tests for physics, controller, and animation.

use bevy_ecs::prelude::*;
use glam::Vec2;

use brawlcore::components::animation::{ActionKind, AnimationPlayer};
use brawlcore::components::contacts::Contacts;
use brawlcore::components::fighter::{ButtonState, FightIntent, Fighter};
use brawlcore::components::kind::EntityKind;
use brawlcore::components::kinetics::Kinetics;
use brawlcore::components::mapposition::MapPosition;
use brawlcore::game;
use brawlcore::resources::arena::Arena;
use brawlcore::resources::drawqueue::DrawQueue;
use brawlcore::resources::simconfig::SimConfig;
use brawlcore::resources::tickclock::TickClock;
use brawlcore::systems::physics::physics;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Unit fighter speed keeps the physics arithmetic readable in tests.
fn unit_speed_config() -> SimConfig {
    let mut config = SimConfig::new();
    config.fighter_speed = 1.0;
    config
}

fn make_world(config: SimConfig, arena: Arena) -> World {
    game::setup_world(config, arena, game::demo_animations())
}

/// Floor strip with its top edge at y = 32.
fn floor_arena() -> Arena {
    let mut arena = Arena::new(16.0);
    for x in -2..24 {
        arena.insert_solid(x, 2, 1);
    }
    arena
}

fn tick_physics(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(physics);
    schedule.run(world);
}

fn spawn_body(world: &mut World, pos: Vec2, size: Vec2) -> Entity {
    game::spawn_entity(world, EntityKind::Dummy, pos, size, 1.0).unwrap()
}

fn set_intent(world: &mut World, entity: Entity, intent: FightIntent) {
    *world.get_mut::<FightIntent>(entity).unwrap() = intent;
}

fn position_of(world: &World, entity: Entity) -> Vec2 {
    world.get::<MapPosition>(entity).unwrap().pos
}

fn velocity_of(world: &World, entity: Entity) -> Vec2 {
    world.get::<Kinetics>(entity).unwrap().velocity
}

fn contacts_of(world: &World, entity: Entity) -> Contacts {
    *world.get::<Contacts>(entity).unwrap()
}

fn action_of(world: &World, entity: Entity) -> ActionKind {
    world.get::<AnimationPlayer>(entity).unwrap().action
}

// ==================== PHYSICS CORE ====================

#[test]
fn gravity_lands_in_velocity_before_position() {
    // Entity at (0, 0), size 24x24, no solids, zero intent. Movement
    // integrates the pre-gravity velocity, so the first tick only
    // accelerates; the position follows one tick later.
    let mut world = make_world(unit_speed_config(), Arena::new(16.0));
    let entity = spawn_body(&mut world, Vec2::ZERO, Vec2::new(24.0, 24.0));

    tick_physics(&mut world);
    assert!(approx_eq(velocity_of(&world, entity).y, 0.1));
    assert!(approx_eq(position_of(&world, entity).y, 0.0));

    tick_physics(&mut world);
    assert!(approx_eq(velocity_of(&world, entity).y, 0.2));
    assert!(approx_eq(position_of(&world, entity).y, 0.1));
}

#[test]
fn gravity_is_monotonic_until_terminal_velocity() {
    let mut world = make_world(unit_speed_config(), Arena::new(16.0));
    let entity = spawn_body(&mut world, Vec2::new(0.0, -6000.0), Vec2::new(24.0, 24.0));

    let mut previous = 0.0;
    for _ in 0..80 {
        tick_physics(&mut world);
        let vy = velocity_of(&world, entity).y;
        assert!(vy >= previous);
        assert!(vy <= 5.0 + EPSILON);
        previous = vy;
    }
    assert!(approx_eq(previous, 5.0));
}

#[test]
fn moving_right_snaps_to_the_solid_left_edge() {
    let mut world = make_world(unit_speed_config(), Arena::new(16.0));
    world
        .resource_mut::<Arena>()
        .insert_solid(3, 0, 1); // box [48, 64) x [0, 16)

    let entity = spawn_body(&mut world, Vec2::new(43.0, 4.0), Vec2::new(8.0, 8.0));
    world.get_mut::<Kinetics>(entity).unwrap().velocity.x = 1.0;

    tick_physics(&mut world);

    let contacts = contacts_of(&world, entity);
    assert!(contacts.right);
    assert!(!contacts.left && !contacts.up && !contacts.down);
    // Right edge exactly on the solid's left edge.
    assert!(approx_eq(position_of(&world, entity).x, 40.0));
}

#[test]
fn moving_left_snaps_to_the_solid_right_edge() {
    let mut world = make_world(unit_speed_config(), Arena::new(16.0));
    world.resource_mut::<Arena>().insert_solid(0, 0, 1); // box [0, 16) x [0, 16)

    let entity = spawn_body(&mut world, Vec2::new(17.0, 4.0), Vec2::new(8.0, 8.0));
    world.get_mut::<Kinetics>(entity).unwrap().velocity.x = -2.0;

    tick_physics(&mut world);

    assert!(contacts_of(&world, entity).left);
    assert!(approx_eq(position_of(&world, entity).x, 16.0));
}

#[test]
fn contacts_never_persist_across_ticks() {
    let mut world = make_world(unit_speed_config(), Arena::new(16.0));
    world.resource_mut::<Arena>().insert_solid(3, 0, 1);

    let entity = spawn_body(&mut world, Vec2::new(43.0, 4.0), Vec2::new(8.0, 8.0));
    world.get_mut::<Kinetics>(entity).unwrap().velocity.x = 1.0;

    tick_physics(&mut world);
    assert!(contacts_of(&world, entity).right);

    // Stop pushing; resting against the wall without moving into it leaves
    // every flag clear on the next tick.
    world.get_mut::<Kinetics>(entity).unwrap().velocity.x = 0.0;
    tick_physics(&mut world);
    assert_eq!(contacts_of(&world, entity), Contacts::default());
}

#[test]
fn diagonal_corner_resolves_x_before_y() {
    let mut world = make_world(unit_speed_config(), Arena::new(16.0));
    world
        .resource_mut::<Arena>()
        .insert_solid(3, 1, 1); // box [48, 64) x [16, 32)

    let entity = spawn_body(&mut world, Vec2::new(42.0, 10.0), Vec2::new(8.0, 8.0));
    world.get_mut::<Kinetics>(entity).unwrap().velocity = Vec2::new(1.0, 1.0);

    tick_physics(&mut world);

    // The X pass pushes the box clear of the tile, so the Y pass sees no
    // overlap: horizontal correction wins, never up+left or down+right from
    // a single tile.
    let contacts = contacts_of(&world, entity);
    assert!(contacts.right);
    assert!(!contacts.down && !contacts.up);
    let pos = position_of(&world, entity);
    assert!(approx_eq(pos.x, 40.0));
    assert!(approx_eq(pos.y, 11.0));
}

#[test]
fn falling_body_comes_to_rest_on_the_floor_strip() {
    let mut world = make_world(unit_speed_config(), floor_arena());
    let entity = spawn_body(&mut world, Vec2::new(20.0, 24.0), Vec2::new(8.0, 8.0));

    // Bottom edge starts touching the floor top (y = 32). Gravity pulls the
    // body a fraction into the floor, the Y pass snaps it back out; the
    // position never drifts.
    for _ in 0..10 {
        tick_physics(&mut world);
        let pos = position_of(&world, entity);
        assert!(approx_eq(pos.x, 20.0));
        assert!(approx_eq(pos.y, 24.0));
        let contacts = contacts_of(&world, entity);
        if contacts.down {
            assert!(approx_eq(velocity_of(&world, entity).y, 0.0));
        }
    }
}

#[test]
fn world_floor_line_is_a_stable_rest_state() {
    // No tiles at all: below the floor line the vertical velocity is zeroed
    // every tick after gravity, so position and velocity are idempotent.
    let mut world = make_world(unit_speed_config(), Arena::new(16.0));
    let entity = spawn_body(&mut world, Vec2::new(50.0, 200.0), Vec2::new(24.0, 24.0));

    for _ in 0..10 {
        tick_physics(&mut world);
        assert!(approx_eq(position_of(&world, entity).y, 200.0));
        assert!(approx_eq(velocity_of(&world, entity).y, 0.0));
    }
}

#[test]
fn time_scale_slows_integration_uniformly() {
    let mut world = make_world(unit_speed_config(), Arena::new(16.0));
    world.resource_mut::<TickClock>().time_scale = 0.5;

    let entity = spawn_body(&mut world, Vec2::ZERO, Vec2::new(8.0, 8.0));
    world.get_mut::<Kinetics>(entity).unwrap().velocity.x = 1.0;

    tick_physics(&mut world);
    assert!(approx_eq(position_of(&world, entity).x, 0.5));
}

// ==================== FIGHTER CONTROLLER ====================

#[test]
fn jump_applies_once_until_ground_is_touched_again() {
    // Default fighter speed (10) so the jump escapes the floor band in one
    // tick.
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    let fighter = game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0))
        .unwrap();
    let mut schedule = game::build_schedule();

    // Resting below the floor line keeps the charge topped up.
    game::run_tick(&mut world, &mut schedule);
    assert_eq!(world.get::<Fighter>(fighter).unwrap().jumps, 1);

    let mut intent = FightIntent::neutral();
    intent.jump = ButtonState::press();
    set_intent(&mut world, fighter, intent);
    game::run_tick(&mut world, &mut schedule);

    assert_eq!(world.get::<Fighter>(fighter).unwrap().jumps, 0);
    assert!(approx_eq(velocity_of(&world, fighter).y, -1.9)); // -2.0 + gravity
    assert_eq!(action_of(&world, fighter), ActionKind::Jump);

    // A second press mid-air is ignored: only gravity acts on the velocity.
    game::run_tick(&mut world, &mut schedule);
    assert!(approx_eq(velocity_of(&world, fighter).y, -1.8));
    assert_eq!(world.get::<Fighter>(fighter).unwrap().jumps, 0);

    // Let the arc finish; falling back through the floor line recharges.
    set_intent(&mut world, fighter, FightIntent::neutral());
    for _ in 0..200 {
        game::run_tick(&mut world, &mut schedule);
    }
    assert_eq!(world.get::<Fighter>(fighter).unwrap().jumps, 1);
    assert_eq!(action_of(&world, fighter), ActionKind::Idle);
}

#[test]
fn attack_is_rejected_while_blocking() {
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    let fighter = game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0))
        .unwrap();
    let mut schedule = game::build_schedule();

    let mut intent = FightIntent::neutral();
    intent.block = ButtonState::hold();
    intent.attack = ButtonState::press();
    set_intent(&mut world, fighter, intent);
    game::run_tick(&mut world, &mut schedule);

    let state = world.get::<Fighter>(fighter).unwrap();
    assert_eq!(state.attack_timer, 0);
    assert!(!state.attacking);
    assert_eq!(action_of(&world, fighter), ActionKind::Block);
}

#[test]
fn attack_locks_movement_for_its_whole_duration() {
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    let fighter = game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0))
        .unwrap();
    let mut schedule = game::build_schedule();

    let mut intent = FightIntent::neutral();
    intent.attack = ButtonState::press();
    set_intent(&mut world, fighter, intent);
    game::run_tick(&mut world, &mut schedule);
    assert_eq!(action_of(&world, fighter), ActionKind::Attack);

    // Pushing the stick during the lockout moves nothing.
    let mut intent = FightIntent::neutral();
    intent.axis.x = 1.0;
    set_intent(&mut world, fighter, intent);
    let x_before = position_of(&world, fighter).x;
    for _ in 0..24 {
        game::run_tick(&mut world, &mut schedule);
        assert_eq!(action_of(&world, fighter), ActionKind::Attack);
        assert!(approx_eq(position_of(&world, fighter).x, x_before));
    }

    // Timer expires; the same intent now runs.
    game::run_tick(&mut world, &mut schedule);
    assert_eq!(action_of(&world, fighter), ActionKind::Run);
    assert!(position_of(&world, fighter).x > x_before);
}

#[test]
fn crouch_cancels_block_and_zeroes_movement() {
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    let fighter = game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0))
        .unwrap();
    let mut schedule = game::build_schedule();

    let mut intent = FightIntent::neutral();
    intent.block = ButtonState::hold();
    intent.crouch = ButtonState::hold();
    intent.axis.x = 1.0;
    set_intent(&mut world, fighter, intent);
    let x_before = position_of(&world, fighter).x;
    game::run_tick(&mut world, &mut schedule);

    assert_eq!(action_of(&world, fighter), ActionKind::Crouch);
    assert!(!world.get::<Fighter>(fighter).unwrap().blocking);
    assert!(approx_eq(position_of(&world, fighter).x, x_before));
}

#[test]
fn run_and_idle_follow_horizontal_intent() {
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    let fighter = game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0))
        .unwrap();
    let mut schedule = game::build_schedule();

    let mut intent = FightIntent::neutral();
    intent.axis.x = 1.0;
    set_intent(&mut world, fighter, intent);
    game::run_tick(&mut world, &mut schedule);

    assert_eq!(action_of(&world, fighter), ActionKind::Run);
    assert!(approx_eq(position_of(&world, fighter).x, 60.0)); // 1.0 * speed 10

    set_intent(&mut world, fighter, FightIntent::neutral());
    game::run_tick(&mut world, &mut schedule);
    assert_eq!(action_of(&world, fighter), ActionKind::Idle);
    // Switching action restarted the animation from its first frame.
    assert_eq!(world.get::<AnimationPlayer>(fighter).unwrap().frame_index, 0);
}

#[test]
fn dash_burst_decays_through_drag_without_overshoot() {
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    let fighter = game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0))
        .unwrap();
    let mut schedule = game::build_schedule();

    // Face right first, then dash.
    let mut intent = FightIntent::neutral();
    intent.axis.x = 1.0;
    set_intent(&mut world, fighter, intent);
    game::run_tick(&mut world, &mut schedule);

    let mut intent = FightIntent::neutral();
    intent.dash = ButtonState::press();
    set_intent(&mut world, fighter, intent);
    game::run_tick(&mut world, &mut schedule);
    // 3.0 impulse minus one tick of drag.
    assert!(approx_eq(velocity_of(&world, fighter).x, 2.9));

    set_intent(&mut world, fighter, FightIntent::neutral());
    let mut previous = 2.9;
    for _ in 0..40 {
        game::run_tick(&mut world, &mut schedule);
        let vx = velocity_of(&world, fighter).x;
        assert!(vx <= previous + EPSILON);
        assert!(vx >= -EPSILON);
        previous = vx;
    }
    assert!(approx_eq(previous, 0.0));
}

#[test]
fn positions_clamp_to_the_arena_bounds() {
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    let fighter = game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(2.0, 200.0))
        .unwrap();
    let mut schedule = game::build_schedule();

    let mut intent = FightIntent::neutral();
    intent.axis.x = -1.0;
    set_intent(&mut world, fighter, intent);
    for _ in 0..5 {
        game::run_tick(&mut world, &mut schedule);
    }
    assert!(approx_eq(position_of(&world, fighter).x, 0.0));
    assert_eq!(action_of(&world, fighter), ActionKind::Run);
}

#[test]
fn floor_restore_can_be_disabled_by_config() {
    let mut config = SimConfig::new();
    config.floor_restores_jump = false;
    let mut world = make_world(config, Arena::new(16.0));
    let fighter = game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0))
        .unwrap();
    let mut schedule = game::build_schedule();

    let mut intent = FightIntent::neutral();
    intent.jump = ButtonState::press();
    set_intent(&mut world, fighter, intent);
    game::run_tick(&mut world, &mut schedule);
    assert_eq!(world.get::<Fighter>(fighter).unwrap().jumps, 0);

    // Without the floor rule (and with no tiles to land on) the charge
    // never comes back.
    set_intent(&mut world, fighter, FightIntent::neutral());
    for _ in 0..200 {
        game::run_tick(&mut world, &mut schedule);
    }
    assert_eq!(world.get::<Fighter>(fighter).unwrap().jumps, 0);
}

#[test]
fn landing_on_tiles_restores_the_jump_charge() {
    // Wider query window: 24px fighters span two 16px tile rows.
    let mut config = SimConfig::new();
    config.neighborhood_radius = 2;
    let mut world = make_world(config, floor_arena().with_radius(2));

    let fighter =
        game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 0.0)).unwrap();
    let mut schedule = game::build_schedule();

    let mut intent = FightIntent::neutral();
    intent.jump = ButtonState::press();
    set_intent(&mut world, fighter, intent);
    game::run_tick(&mut world, &mut schedule);
    assert_eq!(world.get::<Fighter>(fighter).unwrap().jumps, 0);

    // Fall onto the strip whose top edge is at y = 32.
    set_intent(&mut world, fighter, FightIntent::neutral());
    let mut landed = false;
    for _ in 0..300 {
        game::run_tick(&mut world, &mut schedule);
        if contacts_of(&world, fighter).down {
            landed = true;
            break;
        }
    }
    assert!(landed);
    assert_eq!(world.get::<Fighter>(fighter).unwrap().jumps, 1);
    assert!(approx_eq(position_of(&world, fighter).y, 8.0)); // 32 - 24
}

// ==================== RENDER SINK ====================

#[test]
fn draw_queue_carries_one_request_per_fighter() {
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0)).unwrap();
    game::spawn_fighter(&mut world, EntityKind::PlayerRed, Vec2::new(250.0, 200.0)).unwrap();
    let mut schedule = game::build_schedule();

    game::run_tick(&mut world, &mut schedule);

    let queue = world.resource::<DrawQueue>();
    assert_eq!(queue.len(), 2);
    let keys: Vec<&str> = queue.requests.iter().map(|r| r.tex_key.as_ref()).collect();
    assert!(keys.contains(&"player_blue/idle"));
    assert!(keys.contains(&"player_red/idle"));
}

#[test]
fn draw_queue_is_rebuilt_not_appended() {
    let mut world = make_world(SimConfig::new(), Arena::new(16.0));
    game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(50.0, 200.0)).unwrap();
    let mut schedule = game::build_schedule();

    for _ in 0..5 {
        game::run_tick(&mut world, &mut schedule);
    }
    assert_eq!(world.resource::<DrawQueue>().len(), 1);
}
