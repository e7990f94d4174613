//! Plain configuration values read by the trigger and release systems.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which collisions are allowed to release a frozen fragment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TriggerOptions {
    /// Contact force (impulse / fixed timestep) that must be exceeded.
    pub minimum_collision_force: f32,
    /// When false every tag (and the lack of one) passes.
    pub filter_collisions_by_tag: bool,
    pub allowed_tags: Vec<String>,
}

impl TriggerOptions {
    pub fn is_tag_allowed(&self, tag: Option<&str>) -> bool {
        match tag {
            Some(tag) => self.allowed_tags.iter().any(|t| t == tag),
            None => false,
        }
    }

    #[inline]
    pub fn tag_passes(&self, tag: Option<&str>) -> bool {
        !self.filter_collisions_by_tag || self.is_tag_allowed(tag)
    }

    /// Physical contact rule: force strictly above the minimum and the tag filter passes.
    pub fn contact_qualifies(&self, force: f32, tag: Option<&str>) -> bool {
        force > self.minimum_collision_force && self.tag_passes(tag)
    }

    /// Volume overlap rule: only the tag filter applies.
    pub fn overlap_qualifies(&self, tag: Option<&str>) -> bool {
        self.tag_passes(tag)
    }
}

/// Playback speed range for debris sounds.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PitchRange {
    pub min: f32,
    pub max: f32,
}

impl Default for PitchRange {
    fn default() -> Self {
        Self { min: 0.8, max: 1.2 }
    }
}

impl PitchRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Bounds in ascending order; a reversed range is sampled the same as its mirror.
    pub fn ordered(&self) -> (f32, f32) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn contains(&self, pitch: f32) -> bool {
        let (lo, hi) = self.ordered();
        (lo..=hi).contains(&pitch)
    }

    /// Random pitch between the bounds. A range with a NaN or infinite bound samples the
    /// default range instead.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if !self.is_finite() {
            return Self::default().sample(rng);
        }
        let (lo, hi) = self.ordered();
        if (hi - lo).abs() < f32::EPSILON {
            return lo;
        }
        rng.gen_range(lo..=hi)
    }
}
