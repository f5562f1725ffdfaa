//! Simulation systems.
//!
//! This module groups all ECS systems that advance the match. They are run
//! in a single chained schedule so the per-tick order is fixed:
//! intents, then physics, then action selection, then animation, then draw
//! requests. Entities within a system are visited in stable spawn order,
//! which keeps order-sensitive overlap resolution deterministic.
//!
//! Submodules overview
//! - [`animation`] – advance playback cursors over shared sequences
//! - [`controller`] – fighter intent interpretation and action selection
//! - [`physics`] – axis-separated integration against the tile arena
//! - [`render`] – produce per-tick draw requests for the external renderer
//! - [`time`] – advance the tick counter

pub mod animation;
pub mod controller;
pub mod physics;
pub mod render;
pub mod time;
