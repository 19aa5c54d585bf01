//! Types for light physics.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::math::DVec2;
use derive_more::Display;

/// Raised when a circle would be built from a radius that can't be drawn or cast against
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum CircleError {
    /// The radius was zero or negative
    #[display(fmt = "circle radius must be positive, got {}", _0)]
    NonPositiveRadius(f64),
    /// The center or radius was NaN or infinite
    #[display(fmt = "circle at ({}, {}) with radius {} is not finite", _0, _1, _2)]
    NonFinite(f64, f64, f64),
}

impl std::error::Error for CircleError {}

/// A circle in scene space, used both for the light and for the occluders.
/// Which one is the light is decided by whoever holds it.
///
/// The fields are public so the event layer can move circles in place.
/// Anything that bypasses [`Circle::new`] may end up degenerate, so the
/// engine checks [`Circle::is_degenerate`] and skips those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// The center of the circle
    pub center: DVec2,
    /// The radius of the circle, positive for any circle that is drawn
    pub radius: f64,
}

impl Circle {
    /// Create a circle, rejecting radii that are not strictly positive
    pub fn new(center: DVec2, radius: f64) -> Result<Self, CircleError> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(CircleError::NonFinite(center.x, center.y, radius));
        }
        if radius <= 0.0 {
            return Err(CircleError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// True when the circle can't take part in casting or drawing
    pub fn is_degenerate(&self) -> bool {
        !self.radius.is_finite() || self.radius <= 0.0 || !self.center.is_finite()
    }

    /// Move the circle so it is centered on `center`. The radius is kept.
    pub fn move_to(&mut self, center: DVec2) {
        self.center = center;
    }

    /// Whether `point` lies strictly inside the circle
    pub fn contains(&self, point: DVec2) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }
}
