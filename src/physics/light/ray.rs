//! Rays cast from the light and the set they are generated in.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::f64::consts::TAU;

use bevy::math::DVec2;

use super::intersection::{ray_circle_intersection, Intersection};
use super::types::Circle;

/// A single ray leaving the light.
/// The origin and angle are fixed once generated, only the endpoint moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: DVec2,
    angle: f64,
    /// Where the ray currently stops
    pub endpoint: DVec2,
}

impl Ray {
    /// Create a ray of length `length` at `angle` radians from `origin`
    pub fn new(origin: DVec2, angle: f64, length: f64) -> Self {
        let direction = DVec2::from_angle(angle);
        Self {
            origin,
            angle,
            endpoint: origin + direction * length,
        }
    }

    /// Where the ray starts
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// The ray's angle in radians, counter clockwise from +x
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The unit direction of the ray
    pub fn direction(&self) -> DVec2 {
        DVec2::from_angle(self.angle)
    }

    /// Distance from the origin to the current endpoint
    pub fn length(&self) -> f64 {
        self.origin.distance(self.endpoint)
    }

    /// Closest positive hit against any of `occluders`
    pub fn nearest_hit<'a, I>(&self, occluders: I) -> Intersection
    where
        I: IntoIterator<Item = &'a Circle>,
    {
        let direction = self.direction();
        occluders
            .into_iter()
            .map(|occluder| ray_circle_intersection(self.origin, direction, occluder))
            .fold(Intersection::Miss, Intersection::nearest)
    }
}

/// Every ray cast from one light position, in increasing angle order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaySet {
    rays: Vec<Ray>,
    origin: DVec2,
    max_length: f64,
}

/* =================
 * Initialization
 * ================= */
impl RaySet {
    /// Cast `count` evenly spaced rays of length `max_length` from the light's center.
    ///
    /// `max_length` should be longer than the scene diagonal so unobstructed rays
    /// always leave the scene. A count of zero or a degenerate light gives no rays.
    pub fn generate(light: &Circle, count: usize, max_length: f64) -> Self {
        if count == 0 || light.is_degenerate() || !max_length.is_finite() || max_length <= 0.0 {
            return Self {
                rays: Vec::new(),
                origin: light.center,
                max_length: 0.0,
            };
        }
        let step = TAU / count as f64;
        let rays = (0..count)
            .map(|i| Ray::new(light.center, i as f64 * step, max_length))
            .collect();
        Self {
            rays,
            origin: light.center,
            max_length,
        }
    }
}

/* ======================================
 * Simple Getters
 * ====================================== */
impl RaySet {
    /// The light center these rays were generated from
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Length of an unobstructed ray
    pub fn max_length(&self) -> f64 {
        self.max_length
    }

    /// Number of rays
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    /// True when there are no rays
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Iterate the rays in angle order
    pub fn iter(&self) -> std::slice::Iter<Ray> {
        self.rays.iter()
    }

    /// The rays as a slice
    pub fn as_slice(&self) -> &[Ray] {
        &self.rays
    }
}

impl<'a> IntoIterator for &'a RaySet {
    type Item = &'a Ray;
    type IntoIter = std::slice::Iter<'a, Ray>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/* ======================================
 * Truncation
 * ====================================== */
impl RaySet {
    /// Stop every ray at the nearest occluder it hits.
    /// Rays that hit nothing are put back to full length, so calling this twice
    /// with the same occluders gives the same endpoints.
    pub fn truncate(&mut self, occluders: &[Circle]) {
        self.truncate_filtered(occluders.iter());
    }

    /// Like [`RaySet::truncate`] but ignores any occluder equal to `light`, for scenes
    /// where the light circle is also listed as an occluder.
    pub fn truncate_excluding(&mut self, occluders: &[Circle], light: &Circle) {
        self.truncate_filtered(occluders.iter().filter(|occluder| *occluder != light));
    }

    /// Shared body of the truncation methods
    fn truncate_filtered<'a, I>(&mut self, occluders: I)
    where
        I: Iterator<Item = &'a Circle> + Clone,
    {
        let max_length = self.max_length;
        for ray in self.rays.iter_mut() {
            let length = match ray.nearest_hit(occluders.clone()) {
                Intersection::Hit { t } => t.min(max_length),
                Intersection::Miss => max_length,
            };
            ray.endpoint = ray.origin + ray.direction() * length;
        }
    }
}
