//! Debug module: feature gated fracture statistics logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
pub use logging::DebugLogState;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::system::FractureSet;

#[cfg(feature = "debug")]
pub struct FractureDebugPlugin {
    pub log_interval: f32,
}

#[cfg(feature = "debug")]
impl Default for FractureDebugPlugin {
    fn default() -> Self {
        Self { log_interval: 2.0 }
    }
}

#[cfg(feature = "debug")]
impl Plugin for FractureDebugPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DebugLogState::new(self.log_interval))
            .add_systems(
                Update,
                (logging::debug_logging_system, logging::log_completed_fractures)
                    .after(FractureSet::Report),
            );
    }
}
