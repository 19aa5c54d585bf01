//! Scene wide settings.
//! Everything that used to be a process wide constant lives here and is handed to
//! the caster and the rasterizer, so both can be run against any scene size.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::ecs::system::Resource;

use crate::render::{color::Rgba, enums::DiscDrawMode};

/// Default window width in pixels
pub const DEFAULT_WIDTH: usize = 900;
/// Default window height in pixels
pub const DEFAULT_HEIGHT: usize = 600;
/// Default number of rays cast from the light
pub const DEFAULT_RAY_COUNT: usize = 150;

/// The colors a frame is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// What the buffer is cleared to
    pub background: Rgba,
    /// The rays
    pub ray: Rgba,
    /// The light circle
    pub light: Rgba,
    /// Every occluder circle
    pub occluder: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::BLACK,
            ray: Rgba::RAY_YELLOW,
            light: Rgba::from_argb_u32(0xffffffff),
            occluder: Rgba::from_argb_u32(0xffffffff),
        }
    }
}

/// Settings for one scene
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    width: usize,
    height: usize,
    ray_count: usize,
    max_ray_length: f64,
    palette: Palette,
    draw_mode: DiscDrawMode,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfigBuilder::new().build()
    }
}

impl SceneConfig {
    /// Width of the scene and its pixel buffer
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height of the scene and its pixel buffer
    pub fn height(&self) -> usize {
        self.height
    }
    /// How many rays the light casts
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }
    /// How long a ray is when nothing stops it
    pub fn max_ray_length(&self) -> f64 {
        self.max_ray_length
    }
    /// Colors to draw with
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    /// How discs are filled
    pub fn draw_mode(&self) -> DiscDrawMode {
        self.draw_mode
    }
    /// Switch how discs are filled
    pub fn set_draw_mode(&mut self, draw_mode: DiscDrawMode) {
        self.draw_mode = draw_mode;
    }
    /// Length of the scene diagonal
    pub fn diagonal(&self) -> f64 {
        (self.width as f64).hypot(self.height as f64)
    }
}

/// A builder for SceneConfig
pub struct SceneConfigBuilder {
    width: usize,
    height: usize,
    ray_count: usize,
    max_ray_length: Option<f64>,
    palette: Palette,
    draw_mode: DiscDrawMode,
}

impl Default for SceneConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneConfigBuilder {
    /// Start here
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ray_count: DEFAULT_RAY_COUNT,
            max_ray_length: None,
            palette: Palette::default(),
            draw_mode: DiscDrawMode::default(),
        }
    }
    /// Width of the scene in pixels
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
    /// Height of the scene in pixels
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
    /// Number of rays. More rays give a smoother shadow edge and cost more per frame.
    pub fn ray_count(mut self, ray_count: usize) -> Self {
        self.ray_count = ray_count;
        self
    }
    /// Length of an unobstructed ray.
    /// Anything shorter than the scene diagonal is raised to just past it.
    pub fn max_ray_length(mut self, max_ray_length: f64) -> Self {
        self.max_ray_length = Some(max_ray_length);
        self
    }
    /// Colors to draw with
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
    /// How discs are filled
    pub fn draw_mode(mut self, draw_mode: DiscDrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    /// Finish the config
    pub fn build(self) -> SceneConfig {
        let past_diagonal = (self.width as f64).hypot(self.height as f64).ceil() + 1.0;
        let max_ray_length = match self.max_ray_length {
            Some(length) if length.is_finite() && length >= past_diagonal => length,
            _ => past_diagonal,
        };
        SceneConfig {
            width: self.width,
            height: self.height,
            ray_count: self.ray_count,
            max_ray_length,
            palette: self.palette,
            draw_mode: self.draw_mode,
        }
    }
}
