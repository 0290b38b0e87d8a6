use crate::coords::{Vec2, Viewport};
use crate::motion::MotionState;
use crate::transform::{Mat3, SpriteTransform};

/// User-adjustable transform parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteParams {
    /// Object-space offset applied before scale and rotation.
    pub translate: Vec2,
    pub scale: f32,
    pub rotation_radians: f32,
}

impl Default for SpriteParams {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_radians: 0.0,
        }
    }
}

/// A moving, textured drawable.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub motion: MotionState,
    pub params: SpriteParams,
    /// Index into the renderer's texture table.
    pub texture: usize,
}

impl Sprite {
    pub fn new(motion: MotionState) -> Self {
        Self {
            motion,
            params: SpriteParams::default(),
            texture: 0,
        }
    }

    pub fn with_params(mut self, params: SpriteParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_texture(mut self, texture: usize) -> Self {
        self.texture = texture;
        self
    }

    pub fn transform(&self) -> SpriteTransform {
        SpriteTransform {
            offset: self.motion.position,
            rotation_radians: self.params.rotation_radians,
            scale: self.params.scale,
            translate: self.params.translate,
        }
    }

    /// Final pixel-to-NDC matrix for this frame.
    pub fn matrix(&self, viewport: Viewport) -> Mat3 {
        self.transform().final_matrix(viewport)
    }
}
