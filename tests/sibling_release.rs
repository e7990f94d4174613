use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy_rapier2d::prelude::{LockedAxes, RigidBody};
use fracture_release::fracture::*;
use fracture_release::FractureSet;

#[derive(Resource, Default)]
struct Completions(Vec<FractureCompleted>);

#[derive(Resource, Default)]
struct HookRuns(u32);

fn collect_completions(mut reader: EventReader<FractureCompleted>, mut log: ResMut<Completions>) {
    log.0.extend(reader.read().copied());
}

fn count_hook(mut runs: ResMut<HookRuns>) {
    runs.0 += 1;
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(FracturePlugin::seeded(11))
        .init_resource::<Completions>()
        .init_resource::<HookRuns>()
        .add_systems(Update, collect_completions.after(FractureSet::Release));
    app
}

fn fragment(app: &mut App, parent: Entity, behavior: UnfreezeFragment) -> Entity {
    app.world_mut()
        .spawn((
            behavior,
            RigidBody::Dynamic,
            LockedAxes::all(),
            Transform::default(),
            ChildOf(parent),
        ))
        .id()
}

/// Root with `n` fragments; returns (root, fragments).
fn wall(app: &mut App, n: usize, behavior: UnfreezeFragment) -> (Entity, Vec<Entity>) {
    let root = app.world_mut().spawn((Name::new("Wall"), Transform::default())).id();
    let frags = (0..n).map(|_| fragment(app, root, behavior.clone())).collect();
    app.update();
    (root, frags)
}

fn strike(app: &mut App, fragment: Entity) {
    app.world_mut().send_event(FragmentOverlap {
        fragment,
        other: Entity::PLACEHOLDER,
    });
}

fn frozen(app: &App, e: Entity) -> bool {
    app.world().get::<FragmentState>(e).unwrap().is_frozen()
}

#[test]
fn unfreeze_all_releases_every_sibling_with_one_completion() {
    let mut app = test_app();
    let (root, frags) = wall(&mut app, 6, UnfreezeFragment::default());

    strike(&mut app, frags[2]);
    app.update();

    for f in &frags {
        assert!(!frozen(&app, *f), "fragment {f:?} still frozen");
        assert_eq!(app.world().get::<LockedAxes>(*f), Some(&LockedAxes::empty()));
    }
    let log = &app.world().resource::<Completions>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].trigger, frags[2]);
    assert_eq!(log[0].parent, Some(root));
    assert_eq!(log[0].released, 6);
}

#[test]
fn nested_fragments_under_parent_are_released() {
    let mut app = test_app();
    let root = app.world_mut().spawn(Transform::default()).id();
    let trigger = fragment(&mut app, root, UnfreezeFragment::default());
    let cluster = app.world_mut().spawn((Transform::default(), ChildOf(root))).id();
    let nested = fragment(&mut app, cluster, UnfreezeFragment::default());
    app.update();

    strike(&mut app, trigger);
    app.update();

    assert!(!frozen(&app, trigger));
    assert!(!frozen(&app, nested));
}

#[test]
fn self_only_leaves_siblings_frozen() {
    let mut app = test_app();
    let (_root, frags) = wall(&mut app, 4, UnfreezeFragment::default().self_only());

    strike(&mut app, frags[0]);
    app.update();

    assert!(!frozen(&app, frags[0]));
    for f in &frags[1..] {
        assert!(frozen(&app, *f));
        assert_eq!(app.world().get::<LockedAxes>(*f), Some(&LockedAxes::all()));
    }
    assert_eq!(app.world().resource::<FractureStats>().frozen, 3);
}

#[test]
fn non_fragment_siblings_are_untouched() {
    let mut app = test_app();
    let (root, frags) = wall(&mut app, 2, UnfreezeFragment::default());
    let prop = app
        .world_mut()
        .spawn((RigidBody::Fixed, LockedAxes::all(), ChildOf(root)))
        .id();
    app.update();

    strike(&mut app, frags[1]);
    app.update();

    assert_eq!(app.world().get::<LockedAxes>(prop), Some(&LockedAxes::all()));
    assert_eq!(app.world().get::<RigidBody>(prop), Some(&RigidBody::Fixed));
}

#[test]
fn simultaneous_hits_on_siblings_complete_once() {
    let mut app = test_app();
    let (_root, frags) = wall(&mut app, 5, UnfreezeFragment::default());

    for f in &frags {
        strike(&mut app, *f);
    }
    app.update();

    assert_eq!(app.world().resource::<Completions>().0.len(), 1);
    assert_eq!(app.world().resource::<FractureStats>().released, 5);
}

#[test]
fn kinematic_at_start_turns_dynamic_on_release() {
    let mut app = test_app();
    let (_root, frags) = wall(&mut app, 2, UnfreezeFragment::default());
    for f in &frags {
        assert_eq!(app.world().get::<RigidBody>(*f), Some(&RigidBody::KinematicPositionBased));
    }

    strike(&mut app, frags[0]);
    app.update();

    for f in &frags {
        assert_eq!(app.world().get::<RigidBody>(*f), Some(&RigidBody::Dynamic));
    }
}

#[test]
fn body_type_kept_without_kinematic_at_start() {
    let mut app = test_app();
    let behavior = UnfreezeFragment {
        kinematic_at_start: false,
        ..default()
    };
    let root = app.world_mut().spawn(Transform::default()).id();
    let frag = app
        .world_mut()
        .spawn((behavior, RigidBody::KinematicPositionBased, LockedAxes::all(), ChildOf(root)))
        .id();
    app.update();

    strike(&mut app, frag);
    app.update();

    assert!(!frozen(&app, frag));
    assert_eq!(app.world().get::<RigidBody>(frag), Some(&RigidBody::KinematicPositionBased));
    assert_eq!(app.world().get::<LockedAxes>(frag), Some(&LockedAxes::empty()));
}

#[test]
fn fragment_without_parent_releases_itself() {
    let mut app = test_app();
    let frag = app
        .world_mut()
        .spawn((UnfreezeFragment::default(), RigidBody::Dynamic, LockedAxes::all()))
        .id();
    app.update();

    strike(&mut app, frag);
    app.update();

    assert!(!frozen(&app, frag));
    let log = &app.world().resource::<Completions>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].parent, None);
    assert_eq!(log[0].released, 1);
}

#[test]
fn fragment_without_body_still_releases() {
    let mut app = test_app();
    let root = app.world_mut().spawn(Transform::default()).id();
    let frag = app
        .world_mut()
        .spawn((UnfreezeFragment::default(), Transform::default(), ChildOf(root)))
        .id();
    app.update();

    assert!(frozen(&app, frag));
    assert!(app.world().get::<RigidBody>(frag).is_none());

    strike(&mut app, frag);
    app.update();

    assert!(!frozen(&app, frag));
    assert!(app.world().get::<RigidBody>(frag).is_none(), "release never invents a body");
    let log = &app.world().resource::<Completions>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].released, 1);
}

#[test]
fn completion_hook_runs_once_per_release() {
    let mut app = test_app();
    let hook = app.register_system(count_hook);
    let (_root, frags) = wall(&mut app, 3, UnfreezeFragment::default().on_completed(hook));

    strike(&mut app, frags[0]);
    strike(&mut app, frags[1]);
    app.update();
    strike(&mut app, frags[2]);
    app.update();

    assert_eq!(app.world().resource::<HookRuns>().0, 1);
}

#[test]
fn sibling_lookup_includes_fragment_parent() {
    let mut app = test_app();
    let parent = app.world_mut().spawn((UnfreezeFragment::default(), RigidBody::Dynamic)).id();
    let child = fragment(&mut app, parent, UnfreezeFragment::default());
    app.update();

    let group = app
        .world_mut()
        .run_system_once(move |children: Query<&Children>, frags: Query<(), With<UnfreezeFragment>>| {
            release::sibling_fragments(parent, &children, |e| frags.contains(e)).to_vec()
        })
        .expect("run sibling lookup");
    assert_eq!(group, vec![parent, child]);
}
