//! Simulation tuning resource.
//!
//! Manages the physics and fighter tuning constants loaded from an INI
//! configuration file. Values like gravity, neighborhood size, and whether
//! the floor restores the jump charge are match tuning rather than engine
//! behavior, so all of them are configuration with safe defaults instead of
//! hardcoded constants.
//!
//! # Configuration File Format
//!
//! ```ini
//! [physics]
//! gravity = 0.1
//! terminal_velocity = 5.0
//! drag = 0.1
//! neighborhood_radius = 1
//!
//! [fighter]
//! speed = 10.0
//! width = 24.0
//! height = 24.0
//! jump_impulse = -2.0
//! dash_impulse = 3.0
//! attack_ticks = 25
//! jump_ticks = 25
//! health = 5
//!
//! [arena]
//! width = 320.0
//! height = 240.0
//! floor_margin = 50.0
//! floor_restores_jump = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_GRAVITY: f32 = 0.1;
const DEFAULT_TERMINAL_VELOCITY: f32 = 5.0;
const DEFAULT_DRAG: f32 = 0.1;
const DEFAULT_NEIGHBORHOOD_RADIUS: i32 = 1;
const DEFAULT_FIGHTER_SPEED: f32 = 10.0;
const DEFAULT_FIGHTER_WIDTH: f32 = 24.0;
const DEFAULT_FIGHTER_HEIGHT: f32 = 24.0;
const DEFAULT_JUMP_IMPULSE: f32 = -2.0;
const DEFAULT_DASH_IMPULSE: f32 = 3.0;
const DEFAULT_ATTACK_TICKS: u32 = 25;
const DEFAULT_JUMP_TICKS: u32 = 25;
const DEFAULT_HEALTH: i32 = 5;
const DEFAULT_ARENA_WIDTH: f32 = 320.0;
const DEFAULT_ARENA_HEIGHT: f32 = 240.0;
const DEFAULT_FLOOR_MARGIN: f32 = 50.0;
const DEFAULT_FLOOR_RESTORES_JUMP: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation tuning resource.
///
/// Stores gravity/velocity constants, fighter action tuning, and arena
/// bounds. Missing file or missing keys fall back to the defaults above.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Downward acceleration added to `velocity.y` every tick.
    pub gravity: f32,
    /// Cap on downward velocity.
    pub terminal_velocity: f32,
    /// Per-tick relaxation of horizontal velocity toward zero.
    pub drag: f32,
    /// Tile-neighborhood radius for collision queries (1 = 3x3).
    pub neighborhood_radius: i32,
    /// Per-fighter speed constant scaling the whole frame movement.
    pub fighter_speed: f32,
    /// Fighter hitbox width in pixels.
    pub fighter_width: f32,
    /// Fighter hitbox height in pixels.
    pub fighter_height: f32,
    /// Vertical velocity set by a jump (negative is up).
    pub jump_impulse: f32,
    /// Horizontal velocity burst set by a dash.
    pub dash_impulse: f32,
    /// Attack lockout duration in ticks.
    pub attack_ticks: u32,
    /// Jump action duration in ticks.
    pub jump_ticks: u32,
    /// Starting health per fighter.
    pub health: i32,
    /// Arena width in pixels; positions are clamped into it.
    pub arena_width: f32,
    /// Arena height in pixels; positions are clamped into it.
    pub arena_height: f32,
    /// Distance of the world floor line above the arena bottom.
    pub floor_margin: f32,
    /// Whether clamping at the arena bottom restores the jump charge.
    pub floor_restores_jump: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            terminal_velocity: DEFAULT_TERMINAL_VELOCITY,
            drag: DEFAULT_DRAG,
            neighborhood_radius: DEFAULT_NEIGHBORHOOD_RADIUS,
            fighter_speed: DEFAULT_FIGHTER_SPEED,
            fighter_width: DEFAULT_FIGHTER_WIDTH,
            fighter_height: DEFAULT_FIGHTER_HEIGHT,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            dash_impulse: DEFAULT_DASH_IMPULSE,
            attack_ticks: DEFAULT_ATTACK_TICKS,
            jump_ticks: DEFAULT_JUMP_TICKS,
            health: DEFAULT_HEALTH,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            floor_margin: DEFAULT_FLOOR_MARGIN,
            floor_restores_jump: DEFAULT_FLOOR_RESTORES_JUMP,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// World-space y of the floor line entities cannot fall through.
    pub fn floor_y(&self) -> f32 {
        self.arena_height - self.floor_margin
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [physics] section
        if let Some(v) = config.getfloat("physics", "gravity").ok().flatten() {
            self.gravity = v as f32;
        }
        if let Some(v) = config.getfloat("physics", "terminal_velocity").ok().flatten() {
            self.terminal_velocity = v as f32;
        }
        if let Some(v) = config.getfloat("physics", "drag").ok().flatten() {
            self.drag = v as f32;
        }
        if let Some(v) = config.getint("physics", "neighborhood_radius").ok().flatten() {
            self.neighborhood_radius = v as i32;
        }

        // [fighter] section
        if let Some(v) = config.getfloat("fighter", "speed").ok().flatten() {
            self.fighter_speed = v as f32;
        }
        if let Some(v) = config.getfloat("fighter", "width").ok().flatten() {
            self.fighter_width = v as f32;
        }
        if let Some(v) = config.getfloat("fighter", "height").ok().flatten() {
            self.fighter_height = v as f32;
        }
        if let Some(v) = config.getfloat("fighter", "jump_impulse").ok().flatten() {
            self.jump_impulse = v as f32;
        }
        if let Some(v) = config.getfloat("fighter", "dash_impulse").ok().flatten() {
            self.dash_impulse = v as f32;
        }
        if let Some(v) = config.getuint("fighter", "attack_ticks").ok().flatten() {
            self.attack_ticks = v as u32;
        }
        if let Some(v) = config.getuint("fighter", "jump_ticks").ok().flatten() {
            self.jump_ticks = v as u32;
        }
        if let Some(v) = config.getint("fighter", "health").ok().flatten() {
            self.health = v as i32;
        }

        // [arena] section
        if let Some(v) = config.getfloat("arena", "width").ok().flatten() {
            self.arena_width = v as f32;
        }
        if let Some(v) = config.getfloat("arena", "height").ok().flatten() {
            self.arena_height = v as f32;
        }
        if let Some(v) = config.getfloat("arena", "floor_margin").ok().flatten() {
            self.floor_margin = v as f32;
        }
        if let Some(v) = config
            .getbool("arena", "floor_restores_jump")
            .ok()
            .flatten()
        {
            self.floor_restores_jump = v;
        }

        info!(
            "Loaded config: gravity={}, terminal={}, drag={}, radius={}, arena={}x{}, floor_margin={}",
            self.gravity,
            self.terminal_velocity,
            self.drag,
            self.neighborhood_radius,
            self.arena_width,
            self.arena_height,
            self.floor_margin
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [physics] section
        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set(
            "physics",
            "terminal_velocity",
            Some(self.terminal_velocity.to_string()),
        );
        config.set("physics", "drag", Some(self.drag.to_string()));
        config.set(
            "physics",
            "neighborhood_radius",
            Some(self.neighborhood_radius.to_string()),
        );

        // [fighter] section
        config.set("fighter", "speed", Some(self.fighter_speed.to_string()));
        config.set("fighter", "width", Some(self.fighter_width.to_string()));
        config.set("fighter", "height", Some(self.fighter_height.to_string()));
        config.set(
            "fighter",
            "jump_impulse",
            Some(self.jump_impulse.to_string()),
        );
        config.set(
            "fighter",
            "dash_impulse",
            Some(self.dash_impulse.to_string()),
        );
        config.set(
            "fighter",
            "attack_ticks",
            Some(self.attack_ticks.to_string()),
        );
        config.set("fighter", "jump_ticks", Some(self.jump_ticks.to_string()));
        config.set("fighter", "health", Some(self.health.to_string()));

        // [arena] section
        config.set("arena", "width", Some(self.arena_width.to_string()));
        config.set("arena", "height", Some(self.arena_height.to_string()));
        config.set(
            "arena",
            "floor_margin",
            Some(self.floor_margin.to_string()),
        );
        config.set(
            "arena",
            "floor_restores_jump",
            Some(self.floor_restores_jump.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
