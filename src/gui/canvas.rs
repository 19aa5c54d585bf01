//! The full window image the scene is rasterized into.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::{
    app::{App, Plugin, Startup, Update},
    asset::{Assets, Handle},
    core_pipeline::core_2d::Camera2dBundle,
    ecs::{
        schedule::IntoSystemConfigs,
        system::{Commands, Res, ResMut, Resource},
    },
    log::warn,
    render::texture::Image,
    sprite::SpriteBundle,
};

use crate::{
    config::SceneConfig,
    physics::light::{caster::ShadowCaster, scene::Scene, LightSet},
    render::{frame::render_frame, image::PixelBuffer},
};

/// The CPU side frame buffer
#[derive(Resource, Debug, Clone)]
pub struct Canvas {
    /// What gets drawn into every frame
    pub buffer: PixelBuffer,
    /// The texture the buffer is copied into for display
    pub image: Handle<Image>,
}

/// The plugin that owns the canvas
pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup_canvas);
        app.add_systems(Update, Self::render_system.after(LightSet::Cast));
    }
}

/// Bevy Systems
impl CanvasPlugin {
    /// Create the buffer, its texture, a camera, and a sprite to show it on
    pub fn setup_canvas(
        mut commands: Commands,
        mut images: ResMut<Assets<Image>>,
        config: Res<SceneConfig>,
    ) {
        let buffer = PixelBuffer::new(
            config.width(),
            config.height(),
            config.palette().background,
        );
        let image = images.add(buffer.to_bevy_image());
        commands.spawn(Camera2dBundle::default());
        commands.spawn(SpriteBundle {
            texture: image.clone(),
            ..Default::default()
        });
        commands.insert_resource(Canvas { buffer, image });
    }

    /// Draw the scene and hand the pixels to the texture
    pub fn render_system(
        scene: Res<Scene>,
        caster: Res<ShadowCaster>,
        config: Res<SceneConfig>,
        canvas: Option<ResMut<Canvas>>,
        mut images: ResMut<Assets<Image>>,
    ) {
        let Some(mut canvas) = canvas else {
            return;
        };
        let canvas = canvas.as_mut();
        render_frame(&mut canvas.buffer, &scene, caster.rays(), &config);
        match images.get_mut(&canvas.image) {
            Some(image) => {
                if !canvas.buffer.copy_to_bevy_image(image) {
                    warn!("Canvas image no longer matches the buffer size");
                }
            }
            None => warn!("Canvas image asset is missing"),
        }
    }
}
