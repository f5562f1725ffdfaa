//! Brawlcore library.
//!
//! Fixed-tick simulation core for a 2D fighting game: sparse tile-grid
//! collision queries, axis-separated physics resolution, and action/animation
//! state selection. This module exposes the ECS components, resources, and
//! systems for use in integration tests and as a reusable library.

pub mod components;
pub mod error;
pub mod game;
pub mod resources;
pub mod systems;
