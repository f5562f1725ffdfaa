//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! read by systems during execution. Each submodule documents the semantics
//! and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – immutable sequence definitions shared across entities
//! - `arena` – sparse solid-tile grid and the collision neighborhood query
//! - `drawqueue` – per-tick draw requests handed to the external renderer
//! - `simconfig` – INI-loaded physics and fighter tuning
//! - `tickclock` – tick counter and the global game-speed scalar

pub mod animationstore;
pub mod arena;
pub mod drawqueue;
pub mod simconfig;
pub mod tickclock;
