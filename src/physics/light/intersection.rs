//! Ray against circle intersection.
//! This is the 2d version of the usual line/sphere quadratic.

use bevy::math::DVec2;

use super::types::Circle;

/// The outcome of casting a ray at a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The ray never crosses the circle ahead of its origin
    Miss,
    /// Distance along the ray direction to the first crossing, always > 0
    Hit {
        /// How many direction lengths to travel from the origin
        t: f64,
    },
}

impl Intersection {
    /// The hit parameter, if any
    pub fn t(&self) -> Option<f64> {
        match self {
            Intersection::Miss => None,
            Intersection::Hit { t } => Some(*t),
        }
    }

    /// Keep whichever of the two is closer to the origin
    pub fn nearest(self, other: Intersection) -> Intersection {
        match (self.t(), other.t()) {
            (Some(a), Some(b)) if b < a => other,
            (Some(_), _) => self,
            (None, _) => other,
        }
    }
}

/// Cast a ray from `origin` along `direction` and return the first crossing of
/// `circle` strictly ahead of the origin.
///
/// `direction` doesn't need to be normalized, `t` is in units of its length.
/// An origin sitting exactly on the surface (t = 0) doesn't count as a hit.
pub fn ray_circle_intersection(origin: DVec2, direction: DVec2, circle: &Circle) -> Intersection {
    if circle.is_degenerate() {
        return Intersection::Miss;
    }
    let a = direction.length_squared();
    if a == 0.0 || !a.is_finite() {
        return Intersection::Miss;
    }

    let oc = origin - circle.center;
    let b = 2.0 * direction.dot(oc);
    let c = oc.length_squared() - circle.radius * circle.radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Intersection::Miss;
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    if t1 > 0.0 {
        Intersection::Hit { t: t1 }
    } else if t2 > 0.0 {
        Intersection::Hit { t: t2 }
    } else {
        Intersection::Miss
    }
}
