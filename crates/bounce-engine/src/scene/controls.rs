use crate::coords::Vec2;

use super::Sprite;

/// Pending user edits to a sprite, applied between ticks.
///
/// Values are taken as-is; range checking is the caller's concern.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SpriteControls {
    pub translate: Option<Vec2>,
    pub scale: Option<f32>,
    /// Degrees; converted to radians when applied.
    pub rotation_degrees: Option<f32>,
    pub speed: Option<f32>,
    pub texture: Option<usize>,
}

impl SpriteControls {
    pub fn is_empty(&self) -> bool {
        *self == SpriteControls::default()
    }

    pub fn apply(&self, sprite: &mut Sprite) {
        if let Some(t) = self.translate {
            sprite.params.translate = t;
        }
        if let Some(s) = self.scale {
            sprite.params.scale = s;
        }
        if let Some(deg) = self.rotation_degrees {
            sprite.params.rotation_radians = deg.to_radians();
        }
        if let Some(speed) = self.speed {
            sprite.motion.speed = speed;
        }
        if let Some(tex) = self.texture {
            sprite.texture = tex;
        }
    }
}
