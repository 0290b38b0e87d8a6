//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, textures) and draw
//! into a `RenderTarget` supplied by the frame context.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The CPU-side `Mat3` maps pixels to NDC; shaders only apply it.

mod ctx;
pub mod sprite;

pub use ctx::{RenderCtx, RenderTarget};
