//! Scene context.
//!
//! Responsibilities:
//! - own every sprite's motion state and user parameters
//! - tick sprites in a stable order
//! - produce one final matrix per sprite for the renderer

mod context;
mod controls;
mod sprite;

pub use context::{Scene, SpriteId};
pub use controls::SpriteControls;
pub use sprite::{Sprite, SpriteParams};
