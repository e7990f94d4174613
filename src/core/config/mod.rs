pub mod config;

pub use config::{
    FractureConfig, FragmentSettings, PhysicsConfig, ProjectileConfig, WallLayoutConfig, WindowConfig,
};
