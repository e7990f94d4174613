use std::fs;
use std::path::Path;

use fracture_release::core::config::FractureConfig;
use fracture_release::{FragmentSettings, PitchRange, UnfreezeFragment};

#[test]
fn shipped_config_loads_and_validates() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/config/fracture.ron");
    let cfg = FractureConfig::load_from_file(&path).expect("shipped config parses");
    let warnings = cfg.validate();
    assert!(warnings.is_empty(), "shipped config warnings: {warnings:?}");
    assert!(cfg.fragments.trigger.filter_collisions_by_tag);
    assert!(cfg.fragments.trigger.is_tag_allowed(Some(cfg.projectile.tag.as_str())));
}

#[test]
fn ron_overrides_merge_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.ron");
    fs::write(
        &path,
        r#"(
            fragments: (
                unfreeze_all: false,
                volume: 0.25,
                pitch_range: (min: 0.9, max: 1.1),
            ),
            rng_seed: Some(42),
        )"#,
    )
    .expect("write ron");

    let cfg = FractureConfig::load_from_file(&path).expect("parse");
    assert!(!cfg.fragments.unfreeze_all);
    assert_eq!(cfg.fragments.volume, 0.25);
    assert_eq!(cfg.fragments.pitch_range, PitchRange::new(0.9, 1.1));
    assert_eq!(cfg.rng_seed, Some(42));
    assert_eq!(cfg.window, FractureConfig::default().window);
}

#[test]
fn toml_extension_uses_toml_parser() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fracture.toml");
    fs::write(
        &path,
        r#"
rng_seed = 9

[fragments]
kinematic_at_start = false

[fragments.trigger]
minimum_collision_force = 12.5
filter_collisions_by_tag = true
allowed_tags = ["Player", "Projectile"]

[wall]
origin = [0.0, 10.0]
"#,
    )
    .expect("write toml");

    let cfg = FractureConfig::load_from_file(&path).expect("parse toml");
    assert_eq!(cfg.rng_seed, Some(9));
    assert!(!cfg.fragments.kinematic_at_start);
    assert_eq!(cfg.fragments.trigger.minimum_collision_force, 12.5);
    assert_eq!(cfg.fragments.trigger.allowed_tags.len(), 2);
    assert_eq!(cfg.wall.origin, [0.0, 10.0]);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (cfg, err) = FractureConfig::load_or_default(dir.path().join("nope.ron"));
    assert_eq!(cfg, FractureConfig::default());
    assert!(err.expect("error reported").starts_with("read config"));
}

#[test]
fn malformed_ron_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.ron");
    fs::write(&path, "(fragments: (volume: \"loud\"))").expect("write ron");
    let err = FractureConfig::load_from_file(&path).expect_err("should fail");
    assert!(err.starts_with("parse RON"), "got: {err}");
}

#[test]
fn settings_build_fragment_behavior() {
    let settings = FragmentSettings {
        volume: 3.0,
        unfreeze_all: false,
        ..Default::default()
    };
    let behavior = UnfreezeFragment::from_settings(&settings, None);
    assert_eq!(behavior.volume, 1.0, "volume is clamped to 0..=1");
    assert!(!behavior.unfreeze_all);
    assert!(behavior.kinematic_at_start);
    assert!(behavior.debris_sound.is_none());
}
