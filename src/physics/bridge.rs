//! Rapier -> fragment event bridge.
//!
//! `CollisionEvent::Started` is the "enter" moment. Sensor pairs become `FragmentOverlap`;
//! solid pairs become `FragmentContact` carrying the impulse recovered from the
//! `ContactForceEvent` of the same pair (force x fixed timestep), or zero when the solver
//! reported no force this frame. A frame running several fixed steps reports one force per
//! step; only the strongest is kept, never their sum.

use bevy::prelude::*;
use bevy_rapier2d::prelude::{CollisionEvent, ContactForceEvent};
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use std::collections::HashMap;

use crate::fracture::components::UnfreezeFragment;
use crate::fracture::events::{FragmentContact, FragmentOverlap};

#[inline]
fn pair_key(a: Entity, b: Entity) -> (Entity, Entity) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The fragment a collider belongs to: the collider itself, or its direct parent.
pub fn resolve_fragment(
    collider: Entity,
    fragments: &Query<(), With<UnfreezeFragment>>,
    parents: &Query<&ChildOf>,
) -> Option<Entity> {
    if fragments.contains(collider) {
        return Some(collider);
    }
    parents
        .get(collider)
        .ok()
        .map(|c| c.parent())
        .filter(|p| fragments.contains(*p))
}

pub fn bridge_rapier_events(
    time: Res<Time<Fixed>>,
    mut collisions: EventReader<CollisionEvent>,
    mut forces: EventReader<ContactForceEvent>,
    fragments: Query<(), With<UnfreezeFragment>>,
    parents: Query<&ChildOf>,
    mut contacts: EventWriter<FragmentContact>,
    mut overlaps: EventWriter<FragmentOverlap>,
) {
    let mut pair_forces: HashMap<(Entity, Entity), Vec2> = HashMap::new();
    for ev in forces.read() {
        let strongest = pair_forces.entry(pair_key(ev.collider1, ev.collider2)).or_default();
        if ev.total_force.length_squared() > strongest.length_squared() {
            *strongest = ev.total_force;
        }
    }

    let timestep = time.timestep().as_secs_f32();
    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, flags) = *ev else { continue };
        let sensor = flags.contains(CollisionEventFlags::SENSOR);
        let impulse = pair_forces
            .get(&pair_key(e1, e2))
            .copied()
            .unwrap_or(Vec2::ZERO)
            * timestep;

        for (me, other) in [(e1, e2), (e2, e1)] {
            let Some(fragment) = resolve_fragment(me, &fragments, &parents) else { continue };
            if sensor {
                overlaps.write(FragmentOverlap { fragment, other });
            } else {
                contacts.write(FragmentContact { fragment, other, impulse, contact_count: 1 });
            }
        }
    }
}
