//! An 8 bit RGBA color, laid out the way bevy's `Rgba8UnormSrgb` textures expect.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::render::color::Color;
use bytemuck::{Pod, Zeroable};

/// One pixel's worth of color
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha, 255 is opaque
    pub a: u8,
}

/// Convienient constants
impl Rgba {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Nothing at all
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// The color the rays are drawn in by default
    pub const RAY_YELLOW: Self = Self::rgb(255, 212, 59);
}

impl Rgba {
    /// From all four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// From a packed `0xAARRGGBB` value, the format SDL surfaces use
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Same color, fully opaque
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Paint `self` over `existing` with coverage `alpha` (0 leaves `existing`, 255 is `self`).
    /// The result is always opaque.
    pub fn blend_over(self, existing: Rgba, alpha: u8) -> Rgba {
        let coverage = alpha as f64 / 255.0;
        let channel = |src: u8, dst: u8| -> u8 {
            let mixed = src as f64 * coverage + dst as f64 * (1.0 - coverage);
            num_traits::clamp(mixed.round(), 0.0, 255.0) as u8
        };
        Rgba::rgb(
            channel(self.r, existing.r),
            channel(self.g, existing.g),
            channel(self.b, existing.b),
        )
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.as_rgba_u8();
        Self::new(r, g, b, a)
    }
}
