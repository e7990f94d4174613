use bevy::prelude::*;
use bevy_rapier2d::prelude::{ActiveEvents, ContactForceEventThreshold, RigidBody};

use crate::fracture::components::UnfreezeFragment;

type NewFragment<'a> = (
    Entity,
    &'a UnfreezeFragment,
    Option<&'a mut RigidBody>,
    Option<&'a ActiveEvents>,
    Has<ContactForceEventThreshold>,
);

/// Prepares freshly added fragments: kinematic-at-start bodies are made kinematic and the
/// collider is asked to report collisions and contact forces.
pub fn validate_new_fragments(
    mut commands: Commands,
    mut fragments: Query<NewFragment, Added<UnfreezeFragment>>,
) {
    for (entity, behavior, body, events, has_threshold) in &mut fragments {
        match body {
            Some(mut body) if behavior.kinematic_at_start => {
                *body = RigidBody::KinematicPositionBased;
            }
            Some(_) => {}
            None => warn!(fragment = ?entity, "fragment has no RigidBody; release will only clear its frozen flag"),
        }

        let wanted = ActiveEvents::COLLISION_EVENTS | ActiveEvents::CONTACT_FORCE_EVENTS;
        let active = events.copied().unwrap_or(ActiveEvents::empty()) | wanted;
        let mut entity_commands = commands.entity(entity);
        entity_commands.insert(active);
        if !has_threshold {
            entity_commands.insert(ContactForceEventThreshold(0.0));
        }
    }
}
