pub mod app;
pub mod core;
pub mod debug;
pub mod fracture;
pub mod physics;

// Curated re-exports
pub use app::DemoPlugin;
pub use core::config::{FractureConfig, FragmentSettings};
pub use core::system::FractureSet;
pub use fracture::{
    CollisionTag, FractureCompleted, FracturePlugin, FractureStats, FragmentContact, FragmentOverlap,
    FragmentReleased, FragmentState, PitchRange, TriggerOptions, UnfreezeFragment,
};
