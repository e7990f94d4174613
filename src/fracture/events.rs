use bevy::prelude::*;

/// A collision started between a fragment and another collider.
#[derive(Event, Debug, Clone, Copy)]
pub struct FragmentContact {
    pub fragment: Entity,
    pub other: Entity,
    /// Total impulse applied over the step.
    pub impulse: Vec2,
    pub contact_count: usize,
}

/// Another collider entered a sensor volume involving a fragment.
#[derive(Event, Debug, Clone, Copy)]
pub struct FragmentOverlap {
    pub fragment: Entity,
    pub other: Entity,
}

/// Trigger rules passed for this fragment.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub fragment: Entity,
}

/// One fragment went from frozen to free.
#[derive(Event, Debug, Clone, Copy)]
pub struct FragmentReleased {
    pub fragment: Entity,
    /// Playback speed of the debris sound, when one was started.
    pub pitch: Option<f32>,
}

/// Sent once per accepted release request, whatever the number of siblings freed.
#[derive(Event, Debug, Clone, Copy)]
pub struct FractureCompleted {
    pub trigger: Entity,
    pub parent: Option<Entity>,
    pub released: usize,
}
