//! Central system ordering labels to make the fracture update sequence explicit.
//! Stages (high-level):
//! 1. Detect (new fragments validated, physics events translated)
//! 2. Evaluate (trigger rules applied to contacts and overlaps)
//! 3. Release (fragments freed, sounds started, completion events sent)
//! 4. Report (stats refreshed for logging)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FractureSet {
    Detect,
    Evaluate,
    Release,
    Report,
}

impl FractureSet {
    pub fn configure(app: &mut App) {
        app.configure_sets(
            Update,
            (
                FractureSet::Detect,
                FractureSet::Evaluate,
                FractureSet::Release,
                FractureSet::Report,
            )
                .chain(),
        );
    }
}
