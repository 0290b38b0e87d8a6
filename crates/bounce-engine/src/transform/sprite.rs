use crate::coords::{Vec2, Viewport};

use super::Mat3;

/// Inputs for one drawable's combined transform.
///
/// - `offset`: animated position, outermost spatial transform
/// - `rotation_radians`, `scale`: user controls applied about the local origin
/// - `translate`: user offset in object space, applied before scale/rotation
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteTransform {
    pub offset: Vec2,
    pub rotation_radians: f32,
    pub scale: f32,
    pub translate: Vec2,
}

impl Default for SpriteTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation_radians: 0.0,
            scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

impl SpriteTransform {
    /// `identity * T(offset) * R(rotation) * S(scale, scale) * T(translate)`.
    ///
    /// The order is fixed; swapping any two factors moves the sprite.
    pub fn world_matrix(&self) -> Mat3 {
        Mat3::chain([
            Mat3::IDENTITY,
            Mat3::from_translation(self.offset),
            Mat3::rotation(self.rotation_radians),
            Mat3::scaling(self.scale, self.scale),
            Mat3::from_translation(self.translate),
        ])
    }

    /// World matrix followed by the viewport projection (pixels -> NDC).
    pub fn final_matrix(&self, viewport: Viewport) -> Mat3 {
        Mat3::projection_for(viewport) * self.world_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    fn sample() -> SpriteTransform {
        SpriteTransform {
            offset: Vec2::new(100.0, 50.0),
            rotation_radians: FRAC_PI_2,
            scale: 2.0,
            translate: Vec2::new(10.0, 0.0),
        }
    }

    #[test]
    fn default_world_matrix_is_identity() {
        assert_eq!(SpriteTransform::default().world_matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn local_translate_is_scaled_and_rotated() {
        // (0,0) -> translate (10,0) -> scale (20,0) -> rotate (0,20) -> offset (100,70)
        let p = sample().world_matrix().transform_point(Vec2::ZERO);
        assert!(close(p, Vec2::new(100.0, 70.0)), "{p:?}");
    }

    #[test]
    fn swapping_factors_changes_result() {
        let t = sample();
        let swapped = Mat3::chain([
            Mat3::from_translation(t.translate),
            Mat3::rotation(t.rotation_radians),
            Mat3::scaling(t.scale, t.scale),
            Mat3::from_translation(t.offset),
        ]);
        let p = Vec2::new(3.0, 4.0);
        assert!(!close(t.world_matrix().transform_point(p), swapped.transform_point(p)));
    }

    #[test]
    fn final_matrix_lands_in_ndc() {
        let vp = Viewport::new(300.0, 150.0);
        let t = SpriteTransform {
            offset: Vec2::new(150.0, 75.0),
            ..SpriteTransform::default()
        };
        let p = t.final_matrix(vp).transform_point(Vec2::ZERO);
        assert!(close(p, Vec2::ZERO), "{p:?}");
    }
}
