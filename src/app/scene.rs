//! Demo scene: a pre-fractured wall of frozen fragments, a floor, and projectiles.
//!
//! Keys: Space launch projectile, B shockwave sensor at the wall, R rebuild the wall.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::FractureConfig;
use crate::fracture::{CollisionTag, FractureStats, UnfreezeFragment};

/// Debris clip loaded from `fragments.debris_sound`, if configured.
#[derive(Resource, Default, Clone)]
pub struct DebrisSound(pub Option<Handle<AudioSource>>);

#[derive(Component)]
pub struct FracturedWall;

#[derive(Component)]
pub struct Projectile;

/// Short-lived sensor that releases whatever fragments it overlaps.
#[derive(Component, Deref, DerefMut)]
pub struct Shockwave(Timer);

#[derive(Component)]
pub struct StatsText;

const FLOOR_HALF_HEIGHT: f32 = 10.0;

pub fn load_debris_sound(mut commands: Commands, assets: Res<AssetServer>, cfg: Res<FractureConfig>) {
    let handle = cfg.fragments.debris_sound.as_ref().map(|path| {
        info!(path = %path, "loading debris sound");
        assets.load(path.clone())
    });
    commands.insert_resource(DebrisSound(handle));
}

pub fn setup_scene(mut commands: Commands, cfg: Res<FractureConfig>) {
    commands.spawn(Camera2d);

    let floor_y = cfg.wall.origin[1] - FLOOR_HALF_HEIGHT;
    let floor_width = cfg.window.width;
    commands.spawn((
        Name::new("Floor"),
        Sprite::from_color(Color::srgb(0.25, 0.25, 0.3), Vec2::new(floor_width, FLOOR_HALF_HEIGHT * 2.0)),
        Transform::from_xyz(0.0, floor_y, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(floor_width * 0.5, FLOOR_HALF_HEIGHT),
        CollisionTag::new("Floor"),
    ));

    commands.spawn((
        StatsText,
        Text::new(""),
        TextFont { font_size: 16.0, ..default() },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

pub fn spawn_wall(mut commands: Commands, cfg: Res<FractureConfig>, sound: Res<DebrisSound>) {
    build_wall(&mut commands, &cfg, &sound);
}

/// Spawns the wall root and one frozen fragment per grid cell as its children.
pub fn build_wall(commands: &mut Commands, cfg: &FractureConfig, sound: &DebrisSound) -> Entity {
    let wall = &cfg.wall;
    let half = wall.fragment_size * 0.5;
    let body = if cfg.fragments.kinematic_at_start {
        RigidBody::KinematicPositionBased
    } else {
        RigidBody::Dynamic
    };

    let root = commands
        .spawn((
            Name::new("FracturedWall"),
            FracturedWall,
            Transform::from_xyz(wall.origin[0], wall.origin[1], 0.0),
            Visibility::default(),
        ))
        .id();

    for row in 0..wall.rows {
        for col in 0..wall.columns {
            let local = Vec2::new(
                col as f32 * wall.fragment_size + half,
                row as f32 * wall.fragment_size + half,
            );
            let hue = (row as f32 / wall.rows.max(1) as f32) * 40.0 + 10.0;
            commands.spawn((
                Name::new(format!("Fragment {col},{row}")),
                Sprite::from_color(Color::hsl(hue, 0.55, 0.5), Vec2::splat(wall.fragment_size * 0.96)),
                Transform::from_translation(local.extend(0.0)),
                body,
                Collider::cuboid(half, half),
                LockedAxes::all(),
                UnfreezeFragment::from_settings(&cfg.fragments, sound.0.clone()),
                CollisionTag::new(wall.tag.clone()),
                ChildOf(root),
            ));
        }
    }
    info!(fragments = wall.rows * wall.columns, "spawned fractured wall");
    root
}

pub fn launch_projectile(mut commands: Commands, cfg: Res<FractureConfig>) {
    spawn_projectile(&mut commands, &cfg);
}

fn spawn_projectile(commands: &mut Commands, cfg: &FractureConfig) {
    let p = &cfg.projectile;
    let start = Vec2::from(p.spawn);
    let wall_center = Vec2::from(cfg.wall.origin)
        + Vec2::new(cfg.wall.columns as f32, cfg.wall.rows as f32) * cfg.wall.fragment_size * 0.5;
    let dir = (wall_center - start).normalize_or_zero();
    commands.spawn((
        Name::new("Projectile"),
        Projectile,
        Sprite::from_color(Color::srgb(0.9, 0.9, 0.95), Vec2::splat(p.radius * 2.0)),
        Transform::from_translation(start.extend(1.0)),
        RigidBody::Dynamic,
        Collider::ball(p.radius),
        Velocity::linear(dir * p.speed),
        Ccd::enabled(),
        ActiveEvents::COLLISION_EVENTS,
        CollisionTag::new(p.tag.clone()),
    ));
}

pub fn handle_demo_input(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<FractureConfig>,
    sound: Res<DebrisSound>,
    walls: Query<Entity, With<FracturedWall>>,
    projectiles: Query<Entity, With<Projectile>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        spawn_projectile(&mut commands, &cfg);
    }
    if keys.just_pressed(KeyCode::KeyB) {
        let wall = &cfg.wall;
        let size = Vec2::new(wall.columns as f32, wall.rows as f32) * wall.fragment_size;
        let center = Vec2::from(wall.origin) + size * 0.5;
        commands.spawn((
            Name::new("Shockwave"),
            Shockwave(Timer::from_seconds(0.25, TimerMode::Once)),
            Transform::from_translation(center.extend(0.0)),
            Collider::ball(size.min_element() * 0.35),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            ActiveCollisionTypes::all(),
            CollisionTag::new(cfg.projectile.tag.clone()),
        ));
    }
    if keys.just_pressed(KeyCode::KeyR) {
        for e in walls.iter().chain(projectiles.iter()) {
            commands.entity(e).despawn();
        }
        build_wall(&mut commands, &cfg, &sound);
    }
}

pub fn expire_shockwaves(mut commands: Commands, time: Res<Time>, mut q: Query<(Entity, &mut Shockwave)>) {
    for (e, mut wave) in &mut q {
        wave.tick(time.delta());
        if wave.finished() {
            commands.entity(e).despawn();
        }
    }
}

pub fn update_stats_text(mut q: Query<&mut Text, With<StatsText>>, stats: Res<FractureStats>) {
    if !stats.is_changed() {
        return;
    }
    if let Some(mut text) = q.iter_mut().next() {
        text.0 = format!(
            "Frozen: {}  Released: {}  Fractures: {}\nKeys: Space projectile  B shockwave  R rebuild",
            stats.frozen, stats.released, stats.completions
        );
    }
}
