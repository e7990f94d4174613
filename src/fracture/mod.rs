//! fracture: fragments that stay frozen until a qualifying collision or overlap frees them.
//!
//! Responsibilities:
//! * Prepare new fragments (kinematic at start, collision + contact force reporting).
//! * Evaluate contacts (force + tag) and overlaps (tag only) into release requests.
//! * Release a fragment or its whole sibling group, start debris sounds, report completion.
//!
//! The physics engine is reached through `crate::physics::bridge`, which turns Rapier events
//! into `FragmentContact` / `FragmentOverlap`. Hosts using another source of contacts can send
//! those events directly.

use bevy::prelude::*;
use bevy_rapier2d::prelude::{CollisionEvent, ContactForceEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod components;
pub mod events;
pub mod options;
pub mod release;
pub mod stats;
pub mod trigger;
pub mod validate;

pub use components::{CollisionTag, DebrisEmitter, FragmentState, UnfreezeFragment};
pub use events::{FractureCompleted, FragmentContact, FragmentOverlap, FragmentReleased, ReleaseRequest};
pub use options::{PitchRange, TriggerOptions};
pub use stats::FractureStats;

use crate::core::system::FractureSet;
use crate::physics::bridge::bridge_rapier_events;

/// Random stream used for debris pitch.
#[derive(Resource)]
pub struct FractureRng(pub StdRng);

impl FractureRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

#[derive(Default)]
pub struct FracturePlugin {
    pub rng_seed: Option<u64>,
}

impl FracturePlugin {
    pub fn seeded(seed: u64) -> Self {
        Self { rng_seed: Some(seed) }
    }
}

impl Plugin for FracturePlugin {
    fn build(&self, app: &mut App) {
        FractureSet::configure(app);

        // Rapier registers these too; adding them here keeps the plugin usable without it.
        app.add_event::<CollisionEvent>()
            .add_event::<ContactForceEvent>()
            .add_event::<FragmentContact>()
            .add_event::<FragmentOverlap>()
            .add_event::<ReleaseRequest>()
            .add_event::<FragmentReleased>()
            .add_event::<FractureCompleted>()
            .init_resource::<FractureStats>()
            .insert_resource(FractureRng::from_seed(self.rng_seed));

        app.add_systems(
            Update,
            (
                (validate::validate_new_fragments, bridge_rapier_events)
                    .chain()
                    .in_set(FractureSet::Detect),
                (trigger::evaluate_contacts, trigger::evaluate_overlaps).in_set(FractureSet::Evaluate),
                release::release_fragments.in_set(FractureSet::Release),
                stats::count_frozen_fragments.in_set(FractureSet::Report),
            ),
        );
    }
}
