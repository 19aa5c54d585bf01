//! The circles in the scene.

use bevy::{ecs::system::Resource, math::DVec2};

use super::types::{Circle, CircleError};

/// The light and every occluder.
/// Owned by the render loop, the caster and the rasterizer only ever see it by reference
/// for the length of one frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Scene {
    /// The circle the rays are cast from
    pub light: Circle,
    /// Circles that block rays
    pub occluders: Vec<Circle>,
}

impl Scene {
    /// Create a scene from already validated circles
    pub fn new(light: Circle, occluders: Vec<Circle>) -> Self {
        Self { light, occluders }
    }

    /// Light at (200, 200) with radius 80 and one occluder at (650, 300) with radius 120,
    /// sized for a 900x600 window
    pub fn reference() -> Result<Self, CircleError> {
        Ok(Self::new(
            Circle::new(DVec2::new(200.0, 200.0), 80.0)?,
            vec![Circle::new(DVec2::new(650.0, 300.0), 120.0)?],
        ))
    }

    /// Move the light. Returns true if it actually moved.
    pub fn move_light(&mut self, center: DVec2) -> bool {
        if self.light.center == center {
            return false;
        }
        self.light.move_to(center);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene() {
        let scene = Scene::reference().unwrap();
        assert_eq!(scene.light.center, DVec2::new(200.0, 200.0));
        assert_eq!(scene.light.radius, 80.0);
        assert_eq!(scene.occluders.len(), 1);
        assert_eq!(scene.occluders[0].radius, 120.0);
    }

    #[test]
    fn test_move_light_reports_change() {
        let mut scene = Scene::reference().unwrap();
        assert!(!scene.move_light(DVec2::new(200.0, 200.0)));
        assert!(scene.move_light(DVec2::new(10.0, 10.0)));
        assert_eq!(scene.light.center, DVec2::new(10.0, 10.0));
    }
}
