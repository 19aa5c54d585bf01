use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use shadow_rays::config::SceneConfig;
use shadow_rays::gui::ShadowRaysPluginGroup;
use shadow_rays::physics::light::caster::ShadowCaster;
use shadow_rays::physics::light::scene::Scene;
use shadow_rays::physics::light::types::CircleError;

fn main() -> Result<(), CircleError> {
    let config = SceneConfig::default();
    let scene = Scene::reference()?;
    let caster = ShadowCaster::new(&config);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Raytracing".to_string(),
                        resolution: WindowResolution::new(
                            config.width() as f32,
                            config.height() as f32,
                        ),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,shadow_rays=debug".to_string(),
                    ..Default::default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(config)
        .insert_resource(scene)
        .insert_resource(caster)
        .add_plugins(ShadowRaysPluginGroup)
        .run();
    Ok(())
}
