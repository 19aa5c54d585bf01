//! Image utilities
//! The rasterizers draw into anything that implements [`PixelTarget`], which
//! keeps us from having to use specific bevy types in the drawing code.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::render::{
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::Image,
};
use derive_more::Display;
use ndarray::Array2;

use super::color::Rgba;

/// Something pixels can be read from and written to.
/// Coordinates are signed so callers can address pixels off the edge; reads there
/// give `None` and writes there are dropped.
pub trait PixelTarget {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// The pixel at `(x, y)`, if it is inside the target
    fn get_pixel(&self, x: i64, y: i64) -> Option<Rgba>;
    /// Overwrite the pixel at `(x, y)`, does nothing outside the target
    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba);

    /// Whether `(x, y)` addresses a pixel
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width() as u64 && (y as u64) < self.height() as u64
    }
}

/// Defines when the user has simply exceeded the bounds of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "({}, {}) is outside the {}x{} buffer", x, y, width, height)]
pub struct PixelOutOfBoundsError {
    /// Requested column
    pub x: i64,
    /// Requested row
    pub y: i64,
    /// Buffer width
    pub width: usize,
    /// Buffer height
    pub height: usize,
}

impl std::error::Error for PixelOutOfBoundsError {}

/// A row major RGBA image in memory.
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    /// Indexed by `[row, column]`
    pixels: Array2<Rgba>,
}

/// Create an empty image
impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new(0, 0, Rgba::TRANSPARENT)
    }
}

impl PixelBuffer {
    /// Create a `width` by `height` buffer filled with `fill`
    pub fn new(width: usize, height: usize, fill: Rgba) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), fill),
        }
    }

    /// Set every pixel to `color`
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Gets the pixel at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, x: i64, y: i64) -> Result<Rgba, PixelOutOfBoundsError> {
        self.get_pixel(x, y).ok_or(PixelOutOfBoundsError {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// Iterate every pixel, row by row
    pub fn iter(&self) -> impl Iterator<Item = &Rgba> {
        self.pixels.iter()
    }

    /// The raw RGBA bytes, row by row
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels
            .as_slice()
            .map(bytemuck::cast_slice)
            .unwrap_or_default()
    }

    /// Copy the pixels into an existing bevy image of the same size.
    /// Returns false and leaves the image alone if the sizes differ.
    pub fn copy_to_bevy_image(&self, image: &mut Image) -> bool {
        let bytes = self.as_bytes();
        if image.data.len() != bytes.len() {
            return false;
        }
        image.data.copy_from_slice(bytes);
        true
    }

    /// Convert to a bevy image
    /// Load this into an asset server to get a texture like the following
    /// ```ignore
    /// let buffer = PixelBuffer::new(900, 600, Rgba::BLACK);
    /// let image_handle: Handle<Image> = images.add(buffer.to_bevy_image());
    /// ```
    pub fn to_bevy_image(&self) -> Image {
        let size = Extent3d {
            width: self.width() as u32,
            height: self.height() as u32,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            self.as_bytes().to_vec(),
            TextureFormat::Rgba8UnormSrgb,
        )
    }

    /// Row and column of `(x, y)` if it is inside the buffer
    fn index(&self, x: i64, y: i64) -> Option<[usize; 2]> {
        if self.in_bounds(x, y) {
            Some([y as usize, x as usize])
        } else {
            None
        }
    }
}

impl PixelTarget for PixelBuffer {
    fn width(&self) -> usize {
        self.pixels.ncols()
    }

    fn height(&self) -> usize {
        self.pixels.nrows()
    }

    fn get_pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }
}

/// Draw straight into a bevy texture.
/// Only meaningful for 4 byte per pixel RGBA formats, which is what [`PixelBuffer::to_bevy_image`] makes.
impl PixelTarget for Image {
    fn width(&self) -> usize {
        self.texture_descriptor.size.width as usize
    }

    fn height(&self) -> usize {
        self.texture_descriptor.size.height as usize
    }

    fn get_pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let start = (y as usize * PixelTarget::width(self) + x as usize) * 4;
        let bytes = self.data.get(start..start + 4)?;
        Some(Rgba::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if !self.in_bounds(x, y) {
            return;
        }
        let start = (y as usize * PixelTarget::width(self) + x as usize) * 4;
        if let Some(bytes) = self.data.get_mut(start..start + 4) {
            bytes.copy_from_slice(bytemuck::bytes_of(&color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_filled() {
        let buffer = PixelBuffer::new(3, 2, Rgba::WHITE);
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert!(buffer.iter().all(|p| *p == Rgba::WHITE));
    }

    #[test]
    fn test_set_get() {
        let mut buffer = PixelBuffer::new(4, 4, Rgba::BLACK);
        buffer.set_pixel(3, 1, Rgba::WHITE);
        assert_eq!(buffer.get_pixel(3, 1), Some(Rgba::WHITE));
        assert_eq!(buffer.get_pixel(1, 3), Some(Rgba::BLACK));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut buffer = PixelBuffer::new(4, 4, Rgba::BLACK);
        let before = buffer.clone();
        buffer.set_pixel(-1, 0, Rgba::WHITE);
        buffer.set_pixel(0, 4, Rgba::WHITE);
        buffer.set_pixel(i64::MAX, i64::MIN, Rgba::WHITE);
        assert_eq!(buffer, before);
        assert_eq!(buffer.get_pixel(4, 0), None);
    }

    #[test]
    fn test_checked_get() {
        let buffer = PixelBuffer::new(2, 2, Rgba::BLACK);
        assert_eq!(buffer.checked_get(1, 1), Ok(Rgba::BLACK));
        let err = buffer.checked_get(2, 0).unwrap_err();
        assert_eq!(err.to_string(), "(2, 0) is outside the 2x2 buffer");
    }

    #[test]
    fn test_bytes_are_row_major() {
        let mut buffer = PixelBuffer::new(2, 2, Rgba::TRANSPARENT);
        buffer.set_pixel(1, 0, Rgba::new(1, 2, 3, 4));
        buffer.set_pixel(0, 1, Rgba::new(5, 6, 7, 8));
        assert_eq!(
            buffer.as_bytes(),
            &[0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_clear() {
        let mut buffer = PixelBuffer::new(2, 2, Rgba::WHITE);
        buffer.clear(Rgba::BLACK);
        assert!(buffer.iter().all(|p| *p == Rgba::BLACK));
    }

    #[test]
    fn test_bevy_image_round_trip() {
        let mut buffer = PixelBuffer::new(3, 2, Rgba::BLACK);
        buffer.set_pixel(2, 1, Rgba::WHITE);
        let mut image = buffer.to_bevy_image();
        assert_eq!(PixelTarget::width(&image), 3);
        assert_eq!(PixelTarget::height(&image), 2);
        assert_eq!(image.get_pixel(2, 1), Some(Rgba::WHITE));
        assert_eq!(image.get_pixel(3, 1), None);

        image.set_pixel(0, 0, Rgba::RAY_YELLOW);
        buffer.clear(Rgba::WHITE);
        assert!(buffer.copy_to_bevy_image(&mut image));
        assert_eq!(image.get_pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_copy_to_mismatched_image() {
        let buffer = PixelBuffer::new(3, 2, Rgba::BLACK);
        let mut image = PixelBuffer::new(2, 2, Rgba::BLACK).to_bevy_image();
        assert!(!buffer.copy_to_bevy_image(&mut image));
    }
}
