//! Textured sprite rendering.
//!
//! Each sprite is a unit quad scaled to its pixel footprint and positioned by
//! the `Mat3` produced by the scene. The renderer never composes transforms
//! itself.

mod common;
mod image;
mod renderer;

pub use image::SpriteImage;
pub use renderer::{SpriteDraw, SpriteRenderer, TextureId};
