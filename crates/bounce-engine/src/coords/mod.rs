//! Coordinate types shared by the transform, motion and render layers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Conversion to NDC happens through `transform::Mat3::projection`, not in
//! the shaders.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
