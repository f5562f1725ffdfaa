//! Animation resource registry.
//!
//! Central store of immutable sequence definitions shared by every entity of
//! a kind. Entities never mutate these; each carries its own playback cursor
//! in [`AnimationPlayer`](crate::components::animation::AnimationPlayer).
//! Lookups are by the closed `(EntityKind, ActionKind)` pair and are
//! validated once at match setup, so per-tick lookups cannot fail for a
//! validated kind.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::animation::{ActionKind, AnimationPlayer};
use crate::components::kind::EntityKind;
use crate::error::SimError;

/// Immutable data describing one image-sequence animation.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDef {
    /// Texture/asset key handed to the render sink.
    pub tex_key: Arc<str>,
    /// Render offset padding the animation frames against the hitbox.
    pub offset: Vec2,
    /// Number of frames in the sequence.
    pub frame_count: usize,
    /// Ticks each frame stays visible.
    pub ticks_per_frame: u32,
    /// Whether playback wraps to frame 0 after the last frame. Non-looping
    /// sequences hold their last frame (attack and jump poses).
    pub looped: bool,
}

/// On-disk form of one store entry.
#[derive(Debug, Deserialize, Serialize)]
pub struct SequenceEntry {
    pub kind: EntityKind,
    pub action: ActionKind,
    pub tex_key: String,
    #[serde(default)]
    pub offset: Vec2,
    pub frame_count: usize,
    pub ticks_per_frame: u32,
    pub looped: bool,
}

/// Registry of animation sequences keyed by entity kind and action.
#[derive(Resource, Default)]
pub struct AnimationStore {
    sequences: FxHashMap<(EntityKind, ActionKind), SequenceDef>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON definition file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let file = File::open(path.as_ref())?;
        let entries: Vec<SequenceEntry> = serde_json::from_reader(BufReader::new(file))?;

        let mut store = AnimationStore::new();
        for entry in entries {
            store.insert(
                entry.kind,
                entry.action,
                SequenceDef {
                    tex_key: entry.tex_key.into(),
                    offset: entry.offset,
                    frame_count: entry.frame_count,
                    ticks_per_frame: entry.ticks_per_frame,
                    looped: entry.looped,
                },
            );
        }
        info!(
            "Loaded animation store {:?}: {} sequences",
            path.as_ref(),
            store.sequences.len()
        );
        Ok(store)
    }

    pub fn insert(&mut self, kind: EntityKind, action: ActionKind, def: SequenceDef) {
        self.sequences.insert((kind, action), def);
    }

    /// Look up the sequence for a kind/action pair.
    pub fn sequence(&self, kind: EntityKind, action: ActionKind) -> Result<&SequenceDef, SimError> {
        self.sequences
            .get(&(kind, action))
            .ok_or(SimError::MissingAnimation { kind, action })
    }

    /// Switch an entity's active action, restarting playback on change.
    ///
    /// Fails with [`SimError::MissingAnimation`] when the pair has no
    /// registered sequence; nothing is substituted in its place.
    pub fn set_action(
        &self,
        kind: EntityKind,
        player: &mut AnimationPlayer,
        action: ActionKind,
    ) -> Result<(), SimError> {
        self.sequence(kind, action)?;
        player.set_action(action);
        Ok(())
    }

    /// Check that a kind has a usable sequence for every action.
    ///
    /// Run once at match setup so unknown names fail before the first tick.
    pub fn validate(&self, kind: EntityKind) -> Result<(), SimError> {
        for action in ActionKind::ALL {
            let def = self.sequence(kind, action)?;
            if def.frame_count == 0 || def.ticks_per_frame == 0 {
                return Err(SimError::Config(format!(
                    "degenerate animation sequence for {}/{}",
                    kind.as_str(),
                    action.as_str()
                )));
            }
        }
        Ok(())
    }
}
