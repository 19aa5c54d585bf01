//! This module contains all the geometry for casting shadows.
//!
//! When contributing to this module, please keep the following things in mind:
//! * I try to maintain this module as "game engine agnostic" as possible.
//!   bevy only shows up for resources and plugins, the math uses plain types.
//! * Physics should be highly unit tested.

pub mod light;
