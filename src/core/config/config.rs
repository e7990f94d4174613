use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::fracture::options::{PitchRange, TriggerOptions};

#[derive(Debug, Deserialize, Serialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Fracture Release".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub pixels_per_meter: f32,
    pub gravity_y: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
            gravity_y: -600.0,
        }
    }
}

/// Defaults applied to every fragment spawned from config.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FragmentSettings {
    pub trigger: TriggerOptions,
    pub unfreeze_all: bool,
    pub kinematic_at_start: bool,
    pub pitch_range: PitchRange,
    pub volume: f32,
    /// Asset path of the debris sound; no sound when omitted.
    pub debris_sound: Option<String>,
}
impl Default for FragmentSettings {
    fn default() -> Self {
        Self {
            trigger: TriggerOptions::default(),
            unfreeze_all: true,
            kinematic_at_start: true,
            pitch_range: PitchRange::default(),
            volume: 0.6,
            debris_sound: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WallLayoutConfig {
    pub columns: u32,
    pub rows: u32,
    pub fragment_size: f32,
    /// Bottom-left corner of the wall.
    pub origin: [f32; 2],
    pub tag: String,
}
impl Default for WallLayoutConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 10,
            fragment_size: 24.0,
            origin: [200.0, -250.0],
            tag: "Fragment".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    pub radius: f32,
    pub speed: f32,
    pub tag: String,
    pub spawn: [f32; 2],
}
impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: 14.0,
            speed: 900.0,
            tag: "Projectile".into(),
            spawn: [-500.0, -120.0],
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct FractureConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub fragments: FragmentSettings,
    pub wall: WallLayoutConfig,
    pub projectile: ProjectileConfig,
    pub rng_seed: Option<u64>,
    pub debug_log_interval: f32,
    pub rapier_debug: bool,
}
impl Default for FractureConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            physics: Default::default(),
            fragments: Default::default(),
            wall: Default::default(),
            projectile: Default::default(),
            rng_seed: None,
            debug_log_interval: 2.0,
            rapier_debug: false,
        }
    }
}

impl FractureConfig {
    /// Reads RON, or TOML when the extension is `.toml`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| format!("read config: {e}"))?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            toml::from_str(&data).map_err(|e| format!("parse TOML: {e}"))
        } else {
            ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
        }
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.physics.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); released fragments will fall upward",
                self.physics.gravity_y
            ));
        }

        let f = &self.fragments;
        if f.trigger.minimum_collision_force < 0.0 {
            w.push(format!(
                "fragments.trigger.minimum_collision_force {} negative; every contact qualifies",
                f.trigger.minimum_collision_force
            ));
        }
        if f.trigger.filter_collisions_by_tag && f.trigger.allowed_tags.is_empty() {
            w.push("fragments.trigger filters by tag but allowed_tags is empty; nothing can release fragments".into());
        }
        if !(0.0..=1.0).contains(&f.volume) {
            w.push(format!("fragments.volume {} outside 0..1 (clamped)", f.volume));
        }
        if !f.pitch_range.is_finite() {
            w.push(format!(
                "fragments.pitch_range ({}, {}) has a non-finite bound; default range used",
                f.pitch_range.min, f.pitch_range.max
            ));
        } else if f.pitch_range.min > f.pitch_range.max {
            w.push(format!(
                "fragments.pitch_range min ({}) greater than max ({})",
                f.pitch_range.min, f.pitch_range.max
            ));
        }
        if f.pitch_range.is_finite() && f.pitch_range.min.min(f.pitch_range.max) <= 0.0 {
            w.push("fragments.pitch_range bounds must be > 0".into());
        }

        if self.wall.columns == 0 || self.wall.rows == 0 {
            w.push("wall has zero columns or rows; nothing will spawn".into());
        }
        if self.wall.fragment_size <= 0.0 {
            w.push("wall.fragment_size must be > 0".into());
        }
        if self.projectile.radius <= 0.0 {
            w.push("projectile.radius must be > 0".into());
        }
        if self.projectile.speed <= 0.0 {
            w.push("projectile.speed must be > 0".into());
        }
        if f.trigger.filter_collisions_by_tag
            && !f.trigger.allowed_tags.is_empty()
            && !f.trigger.allowed_tags.contains(&self.projectile.tag)
        {
            w.push(format!(
                "projectile.tag '{}' not in fragments.trigger.allowed_tags; projectiles will not release fragments",
                self.projectile.tag
            ));
        }
        if self.debug_log_interval <= 0.0 {
            w.push("debug_log_interval must be > 0".into());
        }
        w
    }
}
