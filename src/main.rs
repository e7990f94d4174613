use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;

use fracture_release::{DemoPlugin, FractureConfig};

#[derive(Parser, Debug)]
#[command(about = "Pre-fractured wall demo: fragments stay frozen until something hits them hard enough", version)]
struct Args {
    #[arg(long, default_value = "assets/config/fracture.ron")]
    config: PathBuf,
    /// Seed for debris pitch randomness (overrides `rng_seed`).
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds, logging fracture stats.
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut cfg = FractureConfig::load_from_file(&args.config)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(seed) = args.seed {
        cfg.rng_seed = Some(seed);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .add_plugins(DemoPlugin {
            auto_close: args.auto_close,
        })
        .run();
    Ok(())
}
