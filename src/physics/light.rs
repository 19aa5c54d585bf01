use bevy::{
    app::{App, Plugin, Update},
    ecs::{
        change_detection::DetectChanges,
        schedule::{IntoSystemConfigs, SystemSet},
        system::{Res, ResMut},
    },
};

pub mod caster;
pub mod intersection;
pub mod ray;
pub mod scene;
#[warn(missing_docs)]
#[warn(clippy::missing_docs_in_private_items)]
pub mod types;

use self::{caster::ShadowCaster, scene::Scene};

/// The plugin for the light physics.
/// Expects a [`Scene`] and a [`ShadowCaster`] resource to be inserted by the app.
pub struct LightPlugin;

/// Implement the bevy plugin trait for the light plugin.
impl Plugin for LightPlugin {
    /// Build the light plugin.
    fn build(&self, app: &mut App) {
        app.add_systems(Update, Self::cast_system.in_set(LightSet::Cast));
    }
}

/// Ordering for systems that read the rays
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LightSet {
    /// Rays are recast in here
    Cast,
}

/// Bevy Systems
impl LightPlugin {
    /// Recast the rays if the scene changed since last frame
    pub fn cast_system(scene: Res<Scene>, mut caster: ResMut<ShadowCaster>) {
        if scene.is_changed() {
            caster.update_scene(&scene);
        }
    }
}
