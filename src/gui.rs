//! This module contains all the bevy facing code.
//! Things that turn input into scene changes and put the finished frame on screen.

use bevy::app::{PluginGroup, PluginGroupBuilder};

use crate::physics::light::LightPlugin;

pub mod canvas;
pub mod pointer;

/// Everything needed to run the scene, on top of bevy's DefaultPlugins.
/// Expects [`crate::config::SceneConfig`], [`crate::physics::light::scene::Scene`] and
/// [`crate::physics::light::caster::ShadowCaster`] resources.
pub struct ShadowRaysPluginGroup;

impl PluginGroup for ShadowRaysPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(LightPlugin)
            .add(pointer::PointerPlugin)
            .add(canvas::CanvasPlugin)
    }
}
