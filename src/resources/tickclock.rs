use bevy_ecs::prelude::Resource;

/// Simulation tick counter and the global game-speed scalar.
///
/// `time_scale` uniformly slows all physics integration (1.0 normally,
/// lowered for hit-stop and slow-motion effects). Entities only ever read it;
/// the external driver owns writes.
#[derive(Resource, Clone, Copy)]
pub struct TickClock {
    pub tick: u64,
    pub time_scale: f32,
}

impl Default for TickClock {
    fn default() -> Self {
        TickClock {
            tick: 0,
            time_scale: 1.0,
        }
    }
}

impl TickClock {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
