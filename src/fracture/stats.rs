use bevy::prelude::*;

use crate::fracture::components::FragmentState;

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct FractureStats {
    /// Fragments currently frozen (refreshed every frame).
    pub frozen: usize,
    /// Fragments released since startup.
    pub released: u64,
    /// Completion notifications sent since startup.
    pub completions: u64,
}

pub fn count_frozen_fragments(mut stats: ResMut<FractureStats>, q: Query<&FragmentState>) {
    let frozen = q.iter().filter(|s| s.is_frozen()).count();
    if stats.frozen != frozen {
        stats.frozen = frozen;
    }
}
