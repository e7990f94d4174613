pub mod bridge;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::FractureConfig;

/// Wrapper installing Rapier for the demo: fixed-step simulation so contact impulses line up
/// with `Time<Fixed>`, plus gravity from config.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let (ppm, debug) = app
            .world()
            .get_resource::<FractureConfig>()
            .map(|cfg| (cfg.physics.pixels_per_meter, cfg.rapier_debug))
            .unwrap_or((50.0, false));
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(ppm).in_fixed_schedule())
            .add_systems(Update, configure_gravity);
        if debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn configure_gravity(
    mut contexts: Query<&mut RapierConfiguration, Added<RapierConfiguration>>,
    cfg: Res<FractureConfig>,
) {
    for mut rapier_cfg in &mut contexts {
        rapier_cfg.gravity = Vect::new(0.0, cfg.physics.gravity_y);
    }
}
