//! Animation playback system.
//!
//! Advances every entity's playback cursor by one tick against the sequence
//! definitions in the [`AnimationStore`]. Looping sequences wrap to frame 0;
//! non-looping sequences hold their last frame and mark themselves finished,
//! so an in-progress attack or jump pose does not flicker back to the start.

use bevy_ecs::prelude::*;
use log::error;

use crate::components::animation::AnimationPlayer;
use crate::components::kind::EntityKind;
use crate::resources::animationstore::{AnimationStore, SequenceDef};

/// Advance a playback cursor by `dt_ticks` over `seq`.
///
/// Only mutates the cursor; the sequence definition is shared and immutable.
/// The frame index stays within `[0, frame_count)` throughout.
pub fn advance(player: &mut AnimationPlayer, seq: &SequenceDef, dt_ticks: u32) {
    if seq.frame_count == 0 || seq.ticks_per_frame == 0 {
        return;
    }
    if player.finished && !seq.looped {
        return;
    }

    player.elapsed_ticks += dt_ticks;
    while player.elapsed_ticks >= seq.ticks_per_frame {
        player.elapsed_ticks -= seq.ticks_per_frame;

        if player.frame_index + 1 < seq.frame_count {
            player.frame_index += 1;
        } else if seq.looped {
            player.frame_index = 0;
        } else {
            player.frame_index = seq.frame_count - 1; // stay on last frame
            player.finished = true;
            break;
        }
    }
}

/// Advance animation playback for every animated entity.
pub fn animation(mut query: Query<(&EntityKind, &mut AnimationPlayer)>, store: Res<AnimationStore>) {
    for (kind, mut player) in query.iter_mut() {
        match store.sequence(*kind, player.action) {
            Ok(seq) => advance(&mut player, seq, 1),
            Err(err) => error!("animation advance skipped: {err}"),
        }
    }
}
