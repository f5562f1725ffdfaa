//! Draw request production.
//!
//! The core's only rendering obligation is data: once per tick it rebuilds
//! the [`DrawQueue`] with one request per visible entity. The external
//! renderer drains the queue and does the actual drawing.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::error;

use crate::components::animation::AnimationPlayer;
use crate::components::facing::Facing;
use crate::components::kind::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::resources::animationstore::AnimationStore;
use crate::resources::drawqueue::{DrawQueue, DrawRequest};

/// Rebuild the draw queue from every renderable entity.
pub fn queue_draw_requests(
    query: Query<(
        &EntityKind,
        &MapPosition,
        &Facing,
        &AnimationPlayer,
        Option<&Scale>,
    )>,
    store: Res<AnimationStore>,
    mut queue: ResMut<DrawQueue>,
) {
    queue.clear();
    for (kind, position, facing, player, scale) in query.iter() {
        match store.sequence(*kind, player.action) {
            Ok(seq) => queue.push(DrawRequest {
                tex_key: seq.tex_key.clone(),
                frame_index: player.frame_index,
                pos: position.pos + seq.offset,
                flip: facing.flip,
                scale: scale.map(|s| s.scale).unwrap_or(Vec2::ONE),
            }),
            Err(err) => error!("draw request skipped: {err}"),
        }
    }
}
