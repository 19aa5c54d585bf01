//! Filled circles.
//!
//! Pixel `(x, y)` is sampled at the point `(x, y)`, so a circle centered on whole
//! numbers is symmetric on screen. Draw calls that overlap blend back to front in
//! the order they are made.

use bevy::log::trace;
use itertools::iproduct;

use super::{color::Rgba, enums::DiscDrawMode, image::PixelTarget};
use crate::physics::light::types::Circle;

/// Half the width of the blended edge band
const EDGE_HALF_WIDTH: f64 = 0.5;

/// Every on-target pixel whose sample point could be within `margin` of the circle's rim,
/// along with its distance to the center
fn bounding_pixels(
    circle: &Circle,
    margin: f64,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (i64, i64, f64)> {
    let reach = circle.radius + margin;
    let clamp_x = |v: f64| num_traits::clamp(v, -1.0, width as f64) as i64;
    let clamp_y = |v: f64| num_traits::clamp(v, -1.0, height as f64) as i64;
    let min_x = clamp_x((circle.center.x - reach).floor()).max(0);
    let max_x = clamp_x((circle.center.x + reach).ceil()).min(width as i64 - 1);
    let min_y = clamp_y((circle.center.y - reach).floor()).max(0);
    let max_y = clamp_y((circle.center.y + reach).ceil()).min(height as i64 - 1);
    let center = circle.center;
    iproduct!(min_y..=max_y, min_x..=max_x).map(move |(y, x)| {
        let distance = (x as f64 - center.x).hypot(y as f64 - center.y);
        (x, y, distance)
    })
}

/// Fill a disc with a hard edge.
/// A pixel is drawn when its distance to the center is strictly less than the radius.
pub fn fill_solid<T: PixelTarget + ?Sized>(target: &mut T, circle: &Circle, color: Rgba) {
    if circle.is_degenerate() {
        trace!("Skipping degenerate circle {:?}", circle);
        return;
    }
    let (width, height) = (target.width(), target.height());
    for (x, y, distance) in bounding_pixels(circle, 0.0, width, height) {
        if distance < circle.radius {
            target.set_pixel(x, y, color);
        }
    }
}

/// Coverage of a pixel at `distance` from the center of a disc of `radius`,
/// 255 inside, 0 outside, a linear ramp across the one pixel edge band
pub fn edge_coverage(distance: f64, radius: f64) -> u8 {
    if distance < radius - EDGE_HALF_WIDTH {
        255
    } else if distance < radius + EDGE_HALF_WIDTH {
        let alpha = ((radius + EDGE_HALF_WIDTH - distance) * 255.0).round();
        num_traits::clamp(alpha, 0.0, 255.0) as u8
    } else {
        0
    }
}

/// Fill a disc with a one pixel wide blended edge.
/// Interior pixels are overwritten with the opaque color, edge pixels are blended over
/// whatever is already in the target.
pub fn fill_anti_aliased<T: PixelTarget + ?Sized>(target: &mut T, circle: &Circle, color: Rgba) {
    if circle.is_degenerate() {
        trace!("Skipping degenerate circle {:?}", circle);
        return;
    }
    let (width, height) = (target.width(), target.height());
    for (x, y, distance) in bounding_pixels(circle, EDGE_HALF_WIDTH, width, height) {
        match edge_coverage(distance, circle.radius) {
            0 => {}
            255 => target.set_pixel(x, y, color.opaque()),
            alpha => {
                if let Some(existing) = target.get_pixel(x, y) {
                    target.set_pixel(x, y, color.blend_over(existing, alpha));
                }
            }
        }
    }
}

/// Fill a disc the way `mode` says to
pub fn fill_disc<T: PixelTarget + ?Sized>(
    target: &mut T,
    circle: &Circle,
    color: Rgba,
    mode: DiscDrawMode,
) {
    match mode {
        DiscDrawMode::Solid => fill_solid(target, circle, color),
        DiscDrawMode::AntiAliased => fill_anti_aliased(target, circle, color),
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::DVec2;

    use super::*;
    use crate::render::image::PixelBuffer;

    fn distance_to(circle: &Circle, x: usize, y: usize) -> f64 {
        (x as f64 - circle.center.x).hypot(y as f64 - circle.center.y)
    }

    fn pixel(buffer: &PixelBuffer, x: usize, y: usize) -> Rgba {
        buffer.get_pixel(x as i64, y as i64).unwrap()
    }

    #[test]
    fn test_anti_aliased_radius_50() {
        let circle = Circle::new(DVec2::new(60.0, 60.0), 50.0).unwrap();
        let mut buffer = PixelBuffer::new(120, 120, Rgba::BLACK);
        fill_anti_aliased(&mut buffer, &circle, Rgba::WHITE);

        let mut edge_pixels = 0;
        for y in 0..120 {
            for x in 0..120 {
                let distance = distance_to(&circle, x, y);
                let p = pixel(&buffer, x, y);
                if distance <= 49.5 {
                    assert_eq!(p, Rgba::WHITE, "({}, {}) at {}", x, y, distance);
                } else if distance >= 50.5 {
                    assert_eq!(p, Rgba::BLACK, "({}, {}) at {}", x, y, distance);
                } else {
                    edge_pixels += 1;
                    assert!(p.r > 0 && p.r < 255, "({}, {}) was {:?}", x, y, p);
                    assert_eq!(p.a, 255);
                }
            }
        }
        assert!(edge_pixels > 0);
    }

    #[test]
    fn test_anti_aliased_is_stable_inside() {
        let circle = Circle::new(DVec2::new(60.0, 60.0), 50.0).unwrap();
        let mut buffer = PixelBuffer::new(120, 120, Rgba::BLACK);
        fill_anti_aliased(&mut buffer, &circle, Rgba::WHITE);
        let once = buffer.clone();
        fill_anti_aliased(&mut buffer, &circle, Rgba::WHITE);
        for y in 0..120 {
            for x in 0..120 {
                if distance_to(&circle, x, y) < 49.5 {
                    assert_eq!(pixel(&buffer, x, y), pixel(&once, x, y));
                }
            }
        }
    }

    #[test]
    fn test_edge_blends_over_existing() {
        let circle = Circle::new(DVec2::new(10.0, 10.0), 5.0).unwrap();
        let mut buffer = PixelBuffer::new(20, 20, Rgba::rgb(0, 0, 200));
        fill_anti_aliased(&mut buffer, &circle, Rgba::rgb(200, 0, 0));
        // (15, 10) sits right on the rim, half covered
        let p = pixel(&buffer, 15, 10);
        assert!(p.r > 0 && p.r < 200);
        assert!(p.b > 0 && p.b < 200);
        assert_eq!(p.r as u16 + p.b as u16, 200);
    }

    #[test]
    fn test_edge_coverage() {
        assert_eq!(edge_coverage(0.0, 10.0), 255);
        assert_eq!(edge_coverage(9.4, 10.0), 255);
        assert_eq!(edge_coverage(10.0, 10.0), 128);
        assert_eq!(edge_coverage(10.5, 10.0), 0);
        assert_eq!(edge_coverage(20.0, 10.0), 0);
    }

    #[test]
    fn test_solid_hard_edge() {
        let circle = Circle::new(DVec2::new(10.0, 10.0), 5.0).unwrap();
        let mut buffer = PixelBuffer::new(20, 20, Rgba::BLACK);
        fill_solid(&mut buffer, &circle, Rgba::WHITE);
        for y in 0..20 {
            for x in 0..20 {
                let expected = if distance_to(&circle, x, y) < 5.0 {
                    Rgba::WHITE
                } else {
                    Rgba::BLACK
                };
                assert_eq!(pixel(&buffer, x, y), expected);
            }
        }
        // Exactly on the radius is outside
        assert_eq!(pixel(&buffer, 15, 10), Rgba::BLACK);
    }

    #[test]
    fn test_clipped_at_edges() {
        let circle = Circle::new(DVec2::new(0.0, 0.0), 10.0).unwrap();
        let mut buffer = PixelBuffer::new(8, 8, Rgba::BLACK);
        fill_anti_aliased(&mut buffer, &circle, Rgba::WHITE);
        assert_eq!(pixel(&buffer, 0, 0), Rgba::WHITE);
        fill_solid(&mut buffer, &circle, Rgba::WHITE);
        assert_eq!(pixel(&buffer, 7, 7), Rgba::WHITE);
    }

    #[test]
    fn test_off_screen_draws_nothing() {
        let circle = Circle::new(DVec2::new(-100.0, 500.0), 10.0).unwrap();
        let mut buffer = PixelBuffer::new(8, 8, Rgba::BLACK);
        fill_disc(&mut buffer, &circle, Rgba::WHITE, DiscDrawMode::AntiAliased);
        fill_disc(&mut buffer, &circle, Rgba::WHITE, DiscDrawMode::Solid);
        assert!(buffer.iter().all(|p| *p == Rgba::BLACK));
    }

    #[test]
    fn test_degenerate_draws_nothing() {
        let mut buffer = PixelBuffer::new(8, 8, Rgba::BLACK);
        for radius in [0.0, -4.0, f64::NAN] {
            let circle = Circle {
                center: DVec2::new(4.0, 4.0),
                radius,
            };
            fill_anti_aliased(&mut buffer, &circle, Rgba::WHITE);
            fill_solid(&mut buffer, &circle, Rgba::WHITE);
        }
        assert!(buffer.iter().all(|p| *p == Rgba::BLACK));
    }
}
