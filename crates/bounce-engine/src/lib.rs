//! Bounce engine crate.
//!
//! 2D affine transforms, boundary-reflecting motion and the platform + GPU
//! runtime that draws textured sprites with them.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod transform;
pub mod motion;
pub mod scene;
