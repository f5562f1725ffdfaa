use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// One frame of one entity, ready for the external renderer.
///
/// The core produces these but performs no rasterization; `tex_key` plus
/// `frame_index` identify the image, everything else is placement.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    pub tex_key: Arc<str>,
    pub frame_index: usize,
    /// World position already padded by the sequence's render offset.
    pub pos: Vec2,
    pub flip: bool,
    pub scale: Vec2,
}

/// Per-tick queue of draw requests, rebuilt from scratch every tick and
/// drained by the render sink.
#[derive(Resource, Debug, Default)]
pub struct DrawQueue {
    pub requests: Vec<DrawRequest>,
}

impl DrawQueue {
    pub fn clear(&mut self) {
        self.requests.clear();
    }

    pub fn push(&mut self, request: DrawRequest) {
        self.requests.push(request);
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
