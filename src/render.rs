//! Software rasterization into pixel buffers.
//! Nothing in here talks to the GPU, the finished buffer is handed to bevy as an image.

pub mod color;
pub mod disc;
pub mod enums;
pub mod frame;
pub mod image;
pub mod line;
