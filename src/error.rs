//! Simulation error type.
//!
//! Per-tick systems are infallible under valid preconditions; everything that
//! can fail does so at load or construction time and surfaces a [`SimError`].

use thiserror::Error;

use crate::components::animation::ActionKind;
use crate::components::kind::EntityKind;

#[derive(Debug, Error)]
pub enum SimError {
    /// An action was requested for a kind with no registered sequence.
    /// Surfaced instead of silently substituting another animation, so
    /// asset-pipeline mistakes stay visible.
    #[error("no animation sequence registered for {}/{}", .kind.as_str(), .action.as_str())]
    MissingAnimation {
        kind: EntityKind,
        action: ActionKind,
    },

    /// Entity construction with out-of-domain state (negative size,
    /// non-finite position).
    #[error("invalid entity: {0}")]
    InvalidEntity(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read asset file: {0}")]
    AssetIo(#[from] std::io::Error),

    #[error("failed to parse asset file: {0}")]
    AssetFormat(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_animation_names_kind_and_action() {
        let err = SimError::MissingAnimation {
            kind: EntityKind::PlayerBlue,
            action: ActionKind::Attack,
        };
        let msg = err.to_string();
        assert!(msg.contains("player_blue"));
        assert!(msg.contains("attack"));
    }
}
