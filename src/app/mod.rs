pub mod scene;

use bevy::prelude::*;

use crate::core::config::FractureConfig;
use crate::fracture::{FracturePlugin, FractureStats};
use crate::physics::PhysicsSetupPlugin;

/// Everything the demo binary needs on top of `DefaultPlugins`. Expects `FractureConfig` to be
/// inserted beforehand.
#[derive(Default)]
pub struct DemoPlugin {
    /// Exit after this many seconds; `None` or a non-positive value keeps running.
    pub auto_close: Option<f32>,
}

#[derive(Resource, Deref, DerefMut)]
struct ExitTimer(Timer);

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world()
            .get_resource::<FractureConfig>()
            .cloned()
            .unwrap_or_default();

        app.add_plugins((
            PhysicsSetupPlugin,
            FracturePlugin { rng_seed: cfg.rng_seed },
        ));
        if let Some(secs) = self.auto_close.filter(|s| *s > 0.0) {
            info!(seconds = secs, "demo will exit after {secs} seconds");
            app.insert_resource(ExitTimer(Timer::from_seconds(secs, TimerMode::Once)));
        }
        #[cfg(feature = "debug")]
        app.add_plugins(crate::debug::FractureDebugPlugin {
            log_interval: cfg.debug_log_interval,
        });

        app.add_systems(
            Startup,
            (
                log_config_warnings,
                scene::load_debris_sound,
                scene::setup_scene,
                scene::spawn_wall,
                scene::launch_projectile,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                scene::handle_demo_input,
                scene::expire_shockwaves,
                scene::update_stats_text,
                close_after_timeout,
            ),
        );
    }
}

fn log_config_warnings(cfg: Res<FractureConfig>) {
    for w in cfg.validate() {
        warn!("config: {w}");
    }
}

fn close_after_timeout(
    mut commands: Commands,
    time: Res<Time>,
    timer: Option<ResMut<ExitTimer>>,
    stats: Res<FractureStats>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(mut timer) = timer else { return };
    if !timer.tick(time.delta()).finished() {
        return;
    }
    info!(
        frozen = stats.frozen,
        released = stats.released,
        completions = stats.completions,
        "exit timer finished"
    );
    exit.write(AppExit::Success);
    commands.remove_resource::<ExitTimer>();
}
