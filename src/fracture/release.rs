//! Release: frees a fragment (or its whole sibling group) and reports completion.

use bevy::audio::Volume;
use bevy::prelude::*;
use bevy_rapier2d::prelude::{LockedAxes, RigidBody};
use smallvec::SmallVec;

use crate::fracture::components::{DebrisEmitter, FragmentState, UnfreezeFragment};
use crate::fracture::events::{FractureCompleted, FragmentReleased, ReleaseRequest};
use crate::fracture::stats::FractureStats;
use crate::fracture::FractureRng;

type FragmentGroup = SmallVec<[Entity; 16]>;

type ReleasableFragment<'a> = (
    &'a UnfreezeFragment,
    &'a mut FragmentState,
    Option<&'a mut RigidBody>,
    Option<&'a mut LockedAxes>,
);

/// Every fragment under `parent` (nested ones included), plus the parent itself if it is one.
pub fn sibling_fragments<F>(parent: Entity, children: &Query<&Children>, is_fragment: F) -> FragmentGroup
where
    F: Fn(Entity) -> bool,
{
    let mut group = FragmentGroup::new();
    if is_fragment(parent) {
        group.push(parent);
    }
    group.extend(children.iter_descendants(parent).filter(|e| is_fragment(*e)));
    group
}

#[allow(clippy::too_many_arguments)]
pub fn release_fragments(
    mut commands: Commands,
    mut requests: EventReader<ReleaseRequest>,
    mut fragments: Query<ReleasableFragment>,
    parents: Query<&ChildOf>,
    children: Query<&Children>,
    mut rng: ResMut<FractureRng>,
    mut stats: ResMut<FractureStats>,
    mut released_writer: EventWriter<FragmentReleased>,
    mut completed_writer: EventWriter<FractureCompleted>,
) {
    for request in requests.read() {
        let trigger = request.fragment;
        let Ok((behavior, state, _, _)) = fragments.get(trigger) else { continue };
        if !state.is_frozen() {
            continue;
        }
        let unfreeze_all = behavior.unfreeze_all;
        let hook = behavior.on_completed;
        let parent = parents.get(trigger).ok().map(|c| c.parent());

        let group: FragmentGroup = match parent {
            Some(parent) if unfreeze_all => {
                sibling_fragments(parent, &children, |e| fragments.contains(e))
            }
            _ => smallvec::smallvec![trigger],
        };

        let mut released = 0usize;
        for entity in group {
            let Ok(fragment) = fragments.get_mut(entity) else { continue };
            if let Some(pitch) = unfreeze_one(&mut commands, entity, fragment, &mut rng) {
                released += 1;
                released_writer.write(FragmentReleased { fragment: entity, pitch });
            }
        }

        stats.released += released as u64;
        stats.completions += 1;
        info!(?trigger, ?parent, released, "fracture completed");
        completed_writer.write(FractureCompleted { trigger, parent, released });
        if let Some(hook) = hook {
            commands.run_system(hook);
        }
    }
}

/// Frees a single fragment. Returns `None` when it was already free, otherwise the pitch of
/// the debris sound that was started (if any).
fn unfreeze_one(
    commands: &mut Commands,
    entity: Entity,
    (behavior, mut state, body, locked): (
        &UnfreezeFragment,
        Mut<FragmentState>,
        Option<Mut<RigidBody>>,
        Option<Mut<LockedAxes>>,
    ),
    rng: &mut FractureRng,
) -> Option<Option<f32>> {
    if !state.is_frozen() {
        return None;
    }
    if let Some(mut locked) = locked {
        *locked = LockedAxes::empty();
    }
    if behavior.kinematic_at_start {
        if let Some(mut body) = body {
            if matches!(*body, RigidBody::KinematicPositionBased | RigidBody::KinematicVelocityBased) {
                *body = RigidBody::Dynamic;
            }
        }
    }
    state.frozen = false;

    let pitch = behavior.debris_sound.as_ref().map(|sound| {
        let pitch = behavior.pitch_range.sample(&mut rng.0);
        commands.spawn((
            Name::new("DebrisSound"),
            DebrisEmitter { pitch },
            AudioPlayer::new(sound.clone()),
            PlaybackSettings::DESPAWN
                .with_volume(Volume::Linear(behavior.volume))
                .with_speed(pitch),
            Transform::default(),
            ChildOf(entity),
        ));
        pitch
    });
    trace!(fragment = ?entity, ?pitch, "fragment unfrozen");
    Some(pitch)
}
