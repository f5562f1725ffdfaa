//! Brawlcore headless demo driver.
//!
//! A fixed-tick fighting-game simulation core using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for 2D vector math
//! - sparse tile-grid collision with axis-separated resolution
//!
//! This executable is the input-to-game-loop glue around the core: it loads
//! the tuning config and arena map, spawns the two fighters, feeds them a
//! scripted stream of intents, and runs the match schedule for a number of
//! ticks, logging positions, actions, and draw-request counts. A real
//! front end would replace the scripted intents with device input and drain
//! the draw queue into a renderer.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=info cargo run --release -- --ticks 600
//! ```

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use log::{debug, error, info, warn};

use brawlcore::components::animation::AnimationPlayer;
use brawlcore::components::fighter::{ButtonState, FightIntent, Fighter};
use brawlcore::components::kind::EntityKind;
use brawlcore::components::mapposition::MapPosition;
use brawlcore::game;
use brawlcore::resources::animationstore::AnimationStore;
use brawlcore::resources::arena::Arena;
use brawlcore::resources::drawqueue::DrawQueue;
use brawlcore::resources::simconfig::SimConfig;
use brawlcore::resources::tickclock::TickClock;

/// Brawlcore 2D
#[derive(Parser)]
#[command(version, about = "Headless demo match for the brawlcore simulation core")]
struct Cli {
    /// Tuning configuration INI file.
    #[arg(long, default_value = "./config.ini")]
    config: PathBuf,

    /// Arena map JSON file.
    #[arg(long, default_value = "./assets/maps/arena.json")]
    map: PathBuf,

    /// Animation set JSON file. The built-in demo set is used when omitted.
    #[arg(long)]
    animations: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Global game-speed scalar (1.0 normal, lower for slow motion).
    #[arg(long, default_value_t = 1.0)]
    time_scale: f32,
}

/// Canned input stream standing in for a device-reading front end.
fn scripted_intent(tick: u64, kind: EntityKind) -> FightIntent {
    let mut intent = FightIntent::neutral();
    match kind {
        EntityKind::PlayerBlue => {
            if tick < 120 {
                intent.axis.x = 1.0;
            }
            if tick == 140 {
                intent.jump = ButtonState::press();
            }
            if tick == 220 {
                intent.attack = ButtonState::press();
            }
            if (300..360).contains(&tick) {
                intent.block = ButtonState::hold();
            }
            if tick == 400 {
                intent.dash = ButtonState::press();
            }
        }
        EntityKind::PlayerRed => {
            if tick < 100 {
                intent.axis.x = -1.0;
            }
            if (150..200).contains(&tick) {
                intent.crouch = ButtonState::hold();
            }
            if tick == 260 {
                intent.jump = ButtonState::press();
            }
        }
        EntityKind::Dummy => {}
    }
    intent
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SimConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    let arena = match Arena::from_file(&cli.map, config.neighborhood_radius) {
        Ok(arena) => arena,
        Err(err) => {
            warn!("could not load arena map {:?}: {err}; running without solids", cli.map);
            Arena::new(16.0).with_radius(config.neighborhood_radius)
        }
    };

    let store = match &cli.animations {
        Some(path) => match AnimationStore::from_file(path) {
            Ok(store) => store,
            Err(err) => {
                error!("could not load animation set {path:?}: {err}");
                std::process::exit(1);
            }
        },
        None => game::demo_animations(),
    };

    let mut world = game::setup_world(config, arena, store);
    world.resource_mut::<TickClock>().time_scale = cli.time_scale;

    let blue = match game::spawn_fighter(&mut world, EntityKind::PlayerBlue, Vec2::new(100.0, 100.0))
    {
        Ok(entity) => entity,
        Err(err) => {
            error!("failed to spawn blue fighter: {err}");
            std::process::exit(1);
        }
    };
    let red = match game::spawn_fighter(&mut world, EntityKind::PlayerRed, Vec2::new(200.0, 100.0)) {
        Ok(entity) => entity,
        Err(err) => {
            error!("failed to spawn red fighter: {err}");
            std::process::exit(1);
        }
    };

    let mut schedule = game::build_schedule();

    for _ in 0..cli.ticks {
        let tick = world.resource::<TickClock>().tick;
        for (entity, kind) in [(blue, EntityKind::PlayerBlue), (red, EntityKind::PlayerRed)] {
            if let Some(mut intent) = world.get_mut::<FightIntent>(entity) {
                *intent = scripted_intent(tick, kind);
            }
        }

        game::run_tick(&mut world, &mut schedule);

        let now = world.resource::<TickClock>().tick;
        if now % 60 == 0 {
            for (entity, name) in [(blue, "blue"), (red, "red")] {
                let Some(position) = world.get::<MapPosition>(entity) else {
                    continue;
                };
                let action = world
                    .get::<AnimationPlayer>(entity)
                    .map(|p| p.action.as_str())
                    .unwrap_or("?");
                let health = world.get::<Fighter>(entity).map(|f| f.health).unwrap_or(0);
                info!(
                    "tick {now}: {name} at ({:.1}, {:.1}) action={action} health={health}",
                    position.pos.x, position.pos.y
                );
            }
            debug!(
                "tick {now}: {} draw requests queued",
                world.resource::<DrawQueue>().len()
            );
        }
    }

    info!("Simulated {} ticks", cli.ticks);
}
