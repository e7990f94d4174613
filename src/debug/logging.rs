use bevy::prelude::*;

use crate::fracture::{FractureCompleted, FractureStats};

#[derive(Resource, Debug, Clone)]
pub struct DebugLogState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl DebugLogState {
    pub fn new(log_interval: f32) -> Self {
        Self {
            log_interval: log_interval.max(0.1),
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugLogState>, stats: Res<FractureStats>) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "FRACTURE frame={} t={:.3}s frozen={} released={} completions={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.frozen,
            stats.released,
            stats.completions
        );
    }
}

pub fn log_completed_fractures(mut completed: EventReader<FractureCompleted>) {
    for ev in completed.read() {
        debug!(trigger = ?ev.trigger, parent = ?ev.parent, released = ev.released, "FractureCompleted");
    }
}
