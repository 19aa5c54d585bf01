//! Casts a fan of rays from a light circle, stops each one at the nearest occluding
//! circle, and rasterizes the result with anti-aliased discs.

pub mod config;
pub mod gui;
pub mod physics;
pub mod render;
