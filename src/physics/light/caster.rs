//! Keeps the ray set in step with the light.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::{ecs::system::Resource, log::debug};

use super::{ray::RaySet, scene::Scene, types::Circle};
use crate::config::SceneConfig;

/// Owns the rays for the current light position.
/// The rays are thrown away and cast again whenever the light or the occluders change,
/// never patched, so a drawn ray always starts at the light's current center.
#[derive(Resource, Debug, Clone)]
pub struct ShadowCaster {
    /// How many rays to cast
    ray_count: usize,
    /// Length of an unobstructed ray
    max_ray_length: f64,
    /// The rays from the last update
    rays: RaySet,
    /// The light the rays were cast from, None before the first update
    light: Option<Circle>,
    /// The occluders the rays were truncated against
    occluders: Vec<Circle>,
}

impl ShadowCaster {
    /// Create a caster that hasn't cast anything yet
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            ray_count: config.ray_count(),
            max_ray_length: config.max_ray_length(),
            rays: RaySet::default(),
            light: None,
            occluders: Vec::new(),
        }
    }

    /// The rays from the last update
    pub fn rays(&self) -> &RaySet {
        &self.rays
    }

    /// Cast again if `light` or `occluders` differ from last time.
    /// Returns true when the rays were recomputed.
    pub fn update(&mut self, light: &Circle, occluders: &[Circle]) -> bool {
        if self.light.as_ref() == Some(light) && self.occluders == occluders {
            return false;
        }
        let mut rays = RaySet::generate(light, self.ray_count, self.max_ray_length);
        rays.truncate_excluding(occluders, light);
        debug!(
            "Cast {} rays from ({:.1}, {:.1}) against {} occluders",
            rays.len(),
            light.center.x,
            light.center.y,
            occluders.len()
        );
        self.rays = rays;
        self.light = Some(*light);
        self.occluders = occluders.to_vec();
        true
    }

    /// [`ShadowCaster::update`] for a whole scene
    pub fn update_scene(&mut self, scene: &Scene) -> bool {
        self.update(&scene.light, &scene.occluders)
    }
}
