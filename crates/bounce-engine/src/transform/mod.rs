//! 2D affine transforms.
//!
//! `Mat3` is the only matrix type; sprites build theirs through
//! `SpriteTransform`, which fixes the composition order.

mod mat3;
mod sprite;

pub use mat3::Mat3;
pub use sprite::SpriteTransform;
