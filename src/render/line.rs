//! Hard edged lines, used for the rays.

use bevy::math::DVec2;

use super::{color::Rgba, image::PixelTarget};
use crate::physics::light::ray::RaySet;

/// Cut the segment `from -> to` down to the part inside `[min, max]` (Liang-Barsky).
/// Returns None if none of it is inside.
fn clip_segment(from: DVec2, to: DVec2, min: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    let delta = to - from;
    let mut enter = 0.0_f64;
    let mut exit = 1.0_f64;
    for (p, q) in [
        (-delta.x, from.x - min.x),
        (delta.x, max.x - from.x),
        (-delta.y, from.y - min.y),
        (delta.y, max.y - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            enter = enter.max(r);
        } else {
            exit = exit.min(r);
        }
        if enter > exit {
            return None;
        }
    }
    Some((from + delta * enter, from + delta * exit))
}

/// Bresenham's line between two pixel coordinates, both ends included
pub fn draw_pixel_line<T: PixelTarget + ?Sized>(
    target: &mut T,
    from: (i64, i64),
    to: (i64, i64),
    color: Rgba,
) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let step_x = if x < to.0 { 1 } else { -1 };
    let step_y = if y < to.1 { 1 } else { -1 };
    let mut error = dx + dy;
    loop {
        target.set_pixel(x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

/// Draw the segment between two scene points.
/// Only the part over the target is walked, so very long segments stay cheap.
pub fn draw_line<T: PixelTarget + ?Sized>(target: &mut T, from: DVec2, to: DVec2, color: Rgba) {
    if !from.is_finite() || !to.is_finite() {
        return;
    }
    // One pixel of slack so rounding at the border doesn't drop the edge pixels
    let min = DVec2::splat(-1.0);
    let max = DVec2::new(target.width() as f64, target.height() as f64);
    let Some((from, to)) = clip_segment(from, to, min, max) else {
        return;
    };
    draw_pixel_line(
        target,
        (from.x.round() as i64, from.y.round() as i64),
        (to.x.round() as i64, to.y.round() as i64),
        color,
    );
}

/// Draw every ray from its origin to its current endpoint, in angle order
pub fn draw_ray_segments<T: PixelTarget + ?Sized>(target: &mut T, rays: &RaySet, color: Rgba) {
    for ray in rays {
        draw_line(target, ray.origin(), ray.endpoint, color);
    }
}
