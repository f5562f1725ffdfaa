use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Closed set of animation/behavior states an entity can be in.
///
/// Actions are resolved against the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore) at
/// load time, so a kind missing a sequence for any of these fails before the
/// simulation starts instead of at the tick that first requests it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Idle,
    Run,
    Jump,
    Attack,
    Block,
    Crouch,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Idle,
        ActionKind::Run,
        ActionKind::Jump,
        ActionKind::Attack,
        ActionKind::Block,
        ActionKind::Crouch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Idle => "idle",
            ActionKind::Run => "run",
            ActionKind::Jump => "jump",
            ActionKind::Attack => "attack",
            ActionKind::Block => "block",
            ActionKind::Crouch => "crouch",
        }
    }
}

/// Per-entity playback cursor over a shared, immutable animation sequence.
///
/// The sequence data itself lives in the store and is never mutated by an
/// entity; this component only tracks which action is active and where
/// playback currently is. The frame index is always within
/// `[0, frame_count)` of the active sequence.
#[derive(Component, Debug, Clone)]
pub struct AnimationPlayer {
    pub action: ActionKind,
    pub frame_index: usize,
    pub elapsed_ticks: u32,
    /// Set when a non-looping sequence has clamped at its last frame.
    pub finished: bool,
}

impl AnimationPlayer {
    pub fn new(action: ActionKind) -> Self {
        Self {
            action,
            frame_index: 0,
            elapsed_ticks: 0,
            finished: false,
        }
    }

    /// Rewind playback to the first frame.
    pub fn restart(&mut self) {
        self.frame_index = 0;
        self.elapsed_ticks = 0;
        self.finished = false;
    }

    /// Switch the active action. A changed action always restarts from its
    /// first frame; re-setting the current action is a no-op. Returns whether
    /// the action changed.
    pub fn set_action(&mut self, action: ActionKind) -> bool {
        if action == self.action {
            return false;
        }
        self.action = action;
        self.restart();
        true
    }
}
