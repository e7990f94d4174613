use bevy::ecs::system::SystemId;
use bevy::prelude::*;

use crate::core::config::FragmentSettings;
use crate::fracture::options::{PitchRange, TriggerOptions};

/// Frozen flag of a fragment. Starts frozen and flips to unfrozen exactly once.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentState {
    pub frozen: bool,
}

impl Default for FragmentState {
    fn default() -> Self {
        Self { frozen: true }
    }
}

impl FragmentState {
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Host-side tag of an entity, matched against `TriggerOptions::allowed_tags`.
#[derive(Component, Debug, Clone, PartialEq, Eq, Deref)]
pub struct CollisionTag(pub String);

impl CollisionTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

/// Behavior of a fragment that stays frozen until a qualifying hit.
#[derive(Component, Debug, Clone)]
#[require(FragmentState)]
pub struct UnfreezeFragment {
    pub trigger: TriggerOptions,
    /// Release every fragment under the same parent, not just this one.
    pub unfreeze_all: bool,
    /// Body is kept kinematic until release.
    pub kinematic_at_start: bool,
    pub debris_sound: Option<Handle<AudioSource>>,
    pub pitch_range: PitchRange,
    /// Linear volume in 0..=1.
    pub volume: f32,
    /// Run once after a release started from this fragment.
    pub on_completed: Option<SystemId>,
}

impl Default for UnfreezeFragment {
    fn default() -> Self {
        Self {
            trigger: TriggerOptions::default(),
            unfreeze_all: true,
            kinematic_at_start: true,
            debris_sound: None,
            pitch_range: PitchRange::default(),
            volume: 0.6,
            on_completed: None,
        }
    }
}

impl UnfreezeFragment {
    pub fn from_settings(settings: &FragmentSettings, debris_sound: Option<Handle<AudioSource>>) -> Self {
        Self {
            trigger: settings.trigger.clone(),
            unfreeze_all: settings.unfreeze_all,
            kinematic_at_start: settings.kinematic_at_start,
            debris_sound,
            pitch_range: settings.pitch_range,
            volume: settings.volume.clamp(0.0, 1.0),
            on_completed: None,
        }
    }

    pub fn with_trigger(mut self, trigger: TriggerOptions) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn self_only(mut self) -> Self {
        self.unfreeze_all = false;
        self
    }

    pub fn with_sound(mut self, sound: Handle<AudioSource>) -> Self {
        self.debris_sound = Some(sound);
        self
    }

    pub fn with_pitch_range(mut self, range: PitchRange) -> Self {
        self.pitch_range = range;
        self
    }

    pub fn on_completed(mut self, hook: SystemId) -> Self {
        self.on_completed = Some(hook);
        self
    }
}

/// Transient child entity playing a debris sound; despawned when playback ends.
#[derive(Component, Debug, Clone, Copy)]
pub struct DebrisEmitter {
    pub pitch: f32,
}
