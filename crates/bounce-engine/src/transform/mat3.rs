use core::ops::Mul;

use crate::coords::{Vec2, Viewport};

/// 3x3 homogeneous transform over 2D space.
///
/// Storage is a flat `[f32; 9]` in **column-major** order: element `(row, col)`
/// lives at `m[col * 3 + row]`. This is the layout handed to the GPU
/// (see [`to_cols_array`](Self::to_cols_array)) and the only one used anywhere
/// in the engine.
///
/// Points are column vectors `(x, y, 1)`, so `a * b` applied to `p` is
/// `a * (b * p)`: the right-hand operand acts on the point first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    m: [f32; 9],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from three columns.
    #[inline]
    pub const fn from_cols(c0: [f32; 3], c1: [f32; 3], c2: [f32; 3]) -> Self {
        Self {
            m: [c0[0], c0[1], c0[2], c1[0], c1[1], c1[2], c2[0], c2[1], c2[2]],
        }
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Maps pixel space `[0, width] x [0, height]` (origin top-left, +Y down)
    /// to NDC `[-1, 1]^2` (+Y up).
    #[inline]
    pub fn projection(width: f32, height: f32) -> Self {
        Self::from_cols(
            [2.0 / width, 0.0, 0.0],
            [0.0, -2.0 / height, 0.0],
            [-1.0, 1.0, 1.0],
        )
    }

    #[inline]
    pub fn projection_for(viewport: Viewport) -> Self {
        Self::projection(viewport.width, viewport.height)
    }

    #[inline]
    pub fn translation(dx: f32, dy: f32) -> Self {
        Self::from_cols([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [dx, dy, 1.0])
    }

    #[inline]
    pub fn from_translation(offset: Vec2) -> Self {
        Self::translation(offset.x, offset.y)
    }

    /// Counter-clockwise rotation about the origin. Takes radians only.
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_cols([c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0])
    }

    #[inline]
    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self::from_cols([sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0])
    }

    #[inline]
    pub fn from_scale(scale: Vec2) -> Self {
        Self::scaling(scale.x, scale.y)
    }

    // ── composition ───────────────────────────────────────────────────────

    /// Matrix product `a * b`.
    pub fn multiply(a: Mat3, b: Mat3) -> Mat3 {
        let mut out = [0.0f32; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = a.at(row, 0) * b.at(0, col)
                    + a.at(row, 1) * b.at(1, col)
                    + a.at(row, 2) * b.at(2, col);
            }
        }
        Mat3 { m: out }
    }

    /// Left-to-right product of every matrix in `mats`.
    ///
    /// `chain([a, b, c]) == a * b * c`, so `c` is applied to a point first.
    /// An empty sequence yields the identity.
    pub fn chain<I>(mats: I) -> Mat3
    where
        I: IntoIterator<Item = Mat3>,
    {
        mats.into_iter().fold(Mat3::IDENTITY, Mat3::multiply)
    }

    /// Applies the transform to `p` as the homogeneous point `(x, y, 1)`.
    ///
    /// The homogeneous coordinate is dropped; it stays 1 for affine matrices.
    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 2),
            self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 2),
        )
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn at(self, row: usize, col: usize) -> f32 {
        self.m[col * 3 + row]
    }

    #[inline]
    pub fn col(self, col: usize) -> [f32; 3] {
        [self.m[col * 3], self.m[col * 3 + 1], self.m[col * 3 + 2]]
    }

    pub fn determinant(self) -> f32 {
        let [a, d, g, b, e, h, c, f, i] = self.m;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Inverse, or `None` when the matrix is singular (e.g. zero scale).
    pub fn inverse(self) -> Option<Mat3> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        let [a, d, g, b, e, h, c, f, i] = self.m;

        // Transposed cofactors, written column-major.
        Some(Mat3::from_cols(
            [(e * i - f * h) * inv, (f * g - d * i) * inv, (d * h - e * g) * inv],
            [(c * h - b * i) * inv, (a * i - c * g) * inv, (b * g - a * h) * inv],
            [(b * f - c * e) * inv, (c * d - a * f) * inv, (a * e - b * d) * inv],
        ))
    }

    /// Element-wise comparison within `eps`.
    pub fn approx_eq(self, other: Mat3, eps: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn is_finite(self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }

    // ── backend handoff ───────────────────────────────────────────────────

    /// The nine floats in column-major order.
    #[inline]
    pub const fn to_cols_array(self) -> [f32; 9] {
        self.m
    }

    /// Columns padded to 16 bytes each, the layout of a WGSL `mat3x3<f32>`
    /// inside a uniform buffer.
    #[inline]
    pub fn to_gpu_columns(self) -> [[f32; 4]; 3] {
        let [c0, c1, c2] = [self.col(0), self.col(1), self.col(2)];
        [
            [c0[0], c0[1], c0[2], 0.0],
            [c1[0], c1[1], c1[2], 0.0],
            [c2[0], c2[1], c2[2], 0.0],
        ]
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3::multiply(self, rhs)
    }
}
