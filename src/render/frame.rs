//! Drawing a whole frame.

use bevy::log::trace;

use super::{color::Rgba, disc::fill_disc, image::PixelTarget, line::draw_ray_segments};
use crate::{config::SceneConfig, physics::light::ray::RaySet, physics::light::scene::Scene};

/// Clear `target` and draw the scene back to front: rays, then occluders, then the light.
/// `rays` must have been cast for the scene's current light position.
pub fn render_frame<T: PixelTarget + ?Sized>(
    target: &mut T,
    scene: &Scene,
    rays: &RaySet,
    config: &SceneConfig,
) {
    let palette = config.palette();
    debug_assert!(
        rays.is_empty() || rays.origin() == scene.light.center,
        "Rays were cast from {:?} but the light is at {:?}",
        rays.origin(),
        scene.light.center
    );

    clear(target, palette.background);
    draw_ray_segments(target, rays, palette.ray);
    for occluder in &scene.occluders {
        fill_disc(target, occluder, palette.occluder, config.draw_mode());
    }
    fill_disc(target, &scene.light, palette.light, config.draw_mode());
    trace!(
        "Drew {} rays and {} circles in {} mode",
        rays.len(),
        scene.occluders.len() + 1,
        config.draw_mode()
    );
}

/// Set every pixel of `target` to `color`
pub fn clear<T: PixelTarget + ?Sized>(target: &mut T, color: Rgba) {
    let (width, height) = (target.width() as i64, target.height() as i64);
    for y in 0..height {
        for x in 0..width {
            target.set_pixel(x, y, color);
        }
    }
}
