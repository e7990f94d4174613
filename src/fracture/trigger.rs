//! Trigger evaluation: turns contacts and overlaps into release requests.
//!
//! * Contacts need at least one contact point, a force (impulse / fixed timestep) strictly
//!   above the fragment's minimum, and a passing tag filter.
//! * Overlaps only need the tag filter.
//! * Already unfrozen fragments are skipped; the release system guards again so several
//!   requests in one frame still free a group once.

use bevy::prelude::*;

use crate::fracture::components::{CollisionTag, FragmentState, UnfreezeFragment};
use crate::fracture::events::{FragmentContact, FragmentOverlap, ReleaseRequest};

/// Force of a contact given its impulse over one fixed step (F = I / T).
pub fn collision_force(impulse: Vec2, timestep: f32) -> f32 {
    if timestep <= 0.0 {
        return 0.0;
    }
    impulse.length() / timestep
}

pub fn evaluate_contacts(
    time: Res<Time<Fixed>>,
    mut contacts: EventReader<FragmentContact>,
    fragments: Query<(&UnfreezeFragment, &FragmentState)>,
    tags: Query<&CollisionTag>,
    mut requests: EventWriter<ReleaseRequest>,
) {
    let timestep = time.timestep().as_secs_f32();
    for contact in contacts.read() {
        let Ok((behavior, state)) = fragments.get(contact.fragment) else { continue };
        if !state.is_frozen() || contact.contact_count == 0 {
            continue;
        }
        let force = collision_force(contact.impulse, timestep);
        let tag = tags.get(contact.other).ok().map(|t| t.as_str());
        if behavior.trigger.contact_qualifies(force, tag) {
            debug!(
                fragment = ?contact.fragment,
                other = ?contact.other,
                force,
                "fragment contact qualifies for release"
            );
            requests.write(ReleaseRequest { fragment: contact.fragment });
        } else {
            trace!(fragment = ?contact.fragment, force, ?tag, "contact below release threshold");
        }
    }
}

pub fn evaluate_overlaps(
    mut overlaps: EventReader<FragmentOverlap>,
    fragments: Query<(&UnfreezeFragment, &FragmentState)>,
    tags: Query<&CollisionTag>,
    mut requests: EventWriter<ReleaseRequest>,
) {
    for overlap in overlaps.read() {
        let Ok((behavior, state)) = fragments.get(overlap.fragment) else { continue };
        if !state.is_frozen() {
            continue;
        }
        let tag = tags.get(overlap.other).ok().map(|t| t.as_str());
        if behavior.trigger.overlap_qualifies(tag) {
            debug!(fragment = ?overlap.fragment, other = ?overlap.other, "fragment overlap qualifies for release");
            requests.write(ReleaseRequest { fragment: overlap.fragment });
        }
    }
}
