use core::ops::{Add, Mul, Neg, Sub};

/// 2D vector in logical pixels (positions, offsets, footprints) or a unitless
/// direction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `radians`, measured from +X.
    #[inline]
    pub fn from_angle(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Zero-length input yields NaN components.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_angle_is_unit() {
        for i in 0..16 {
            let v = Vec2::from_angle(i as f32 * 0.4);
            assert!((v.length() - 1.0).abs() < 1e-6, "{v:?}");
        }
    }

    #[test]
    fn normalized_diagonal() {
        let v = Vec2::new(1.0, 1.0).normalized();
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!((v.x - h).abs() < 1e-6);
        assert!((v.y - h).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_is_nan() {
        assert!(!Vec2::ZERO.normalized().is_finite());
    }

    #[test]
    fn neg_and_sub() {
        let a = Vec2::new(3.0, -2.0);
        assert_eq!(-a, Vec2::new(-3.0, 2.0));
        assert_eq!(a - a, Vec2::ZERO);
    }
}
