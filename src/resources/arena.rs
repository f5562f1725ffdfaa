//! Sparse tile arena and the collision neighborhood query.
//!
//! The arena maps integer grid cells to solid tiles. It is loaded once before
//! the match starts and is read-only for the whole simulation; the physics
//! system queries it once per axis pass through [`Arena::solids_near`].

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::components::hitbox::Aabb;
use crate::error::SimError;

/// Single solid tile placement in grid coordinates.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct TilePlacement {
    /// X coordinate in tiles.
    pub x: i32,
    /// Y coordinate in tiles.
    pub y: i32,
    /// Tile identifier (tileset-local).
    pub id: u32,
}

/// On-disk arena map format.
#[derive(Debug, Deserialize, Serialize)]
pub struct ArenaFile {
    /// Size of a tile in pixels.
    pub tile_size: u32,
    pub tiles: Vec<TilePlacement>,
}

/// Sparse grid of solid tiles.
#[derive(Resource, Debug, Clone)]
pub struct Arena {
    tile_size: f32,
    solids: FxHashMap<(i32, i32), u32>,
    neighborhood_radius: i32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(16.0)
    }
}

impl Arena {
    /// Create an empty arena with a 3x3 query neighborhood.
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            solids: FxHashMap::default(),
            neighborhood_radius: 1,
        }
    }

    pub fn with_radius(mut self, radius: i32) -> Self {
        self.neighborhood_radius = radius;
        self
    }

    /// Load an arena from a JSON map file.
    pub fn from_file(path: impl AsRef<Path>, radius: i32) -> Result<Self, SimError> {
        let file = File::open(path.as_ref())?;
        let map: ArenaFile = serde_json::from_reader(BufReader::new(file))?;

        let mut arena = Arena::new(map.tile_size as f32).with_radius(radius);
        for tile in &map.tiles {
            arena.insert_solid(tile.x, tile.y, tile.id);
        }
        info!(
            "Loaded arena map {:?}: {} solid tiles, tile size {}",
            path.as_ref(),
            arena.solids.len(),
            arena.tile_size
        );
        Ok(arena)
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn insert_solid(&mut self, cell_x: i32, cell_y: i32, id: u32) {
        self.solids.insert((cell_x, cell_y), id);
    }

    pub fn is_solid(&self, cell_x: i32, cell_y: i32) -> bool {
        self.solids.contains_key(&(cell_x, cell_y))
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// World-space boxes of every solid tile in the neighborhood of
    /// `position`.
    ///
    /// The neighborhood is the `(2r+1)^2` block of cells around the cell
    /// containing `position`. Cells are visited row-major from the lowest
    /// grid coordinate; when an entity overlaps solids on both sides within
    /// one axis pass, resolution order follows this sequence. An arena with
    /// no tiles returns an empty result, which simply means no collision.
    pub fn solids_near(&self, position: Vec2) -> SmallVec<[Aabb; 9]> {
        let mut found = SmallVec::new();
        if self.solids.is_empty() {
            return found;
        }

        let cell_x = (position.x / self.tile_size).floor() as i32;
        let cell_y = (position.y / self.tile_size).floor() as i32;
        let r = self.neighborhood_radius;

        for dy in -r..=r {
            for dx in -r..=r {
                let cell = (cell_x + dx, cell_y + dy);
                if self.solids.contains_key(&cell) {
                    found.push(Aabb::new(
                        cell.0 as f32 * self.tile_size,
                        cell.1 as f32 * self.tile_size,
                        self.tile_size,
                        self.tile_size,
                    ));
                }
            }
        }
        found
    }
}
