//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the simulation world. Components define data only; behavior lives in
//! [`crate::systems`].
//!
//! Submodules overview:
//! - [`animation`] – closed action set and per-entity playback cursor
//! - [`contacts`] – per-side collision flags for the current tick
//! - [`facing`] – horizontal sprite facing with per-kind mirror convention
//! - [`fighter`] – controller state and per-tick input intent for combatants
//! - [`hitbox`] – axis-aligned collision extents and box math
//! - [`kind`] – combatant archetype tag
//! - [`kinetics`] – velocity and per-entity speed constant
//! - [`mapposition`] – world-space position (top-left) for an entity
//! - [`scale`] – 2D scale factor forwarded to the render sink

pub mod animation;
pub mod contacts;
pub mod facing;
pub mod fighter;
pub mod hitbox;
pub mod kind;
pub mod kinetics;
pub mod mapposition;
pub mod scale;
