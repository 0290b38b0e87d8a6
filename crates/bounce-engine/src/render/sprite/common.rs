//! GPU-side types shared by the sprite pipeline.

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::transform::Mat3;

// ── blend ─────────────────────────────────────────────────────────────────

/// Straight-alpha blending; decoded images are not premultiplied.
pub(super) fn straight_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState::ALPHA_BLENDING
}

// ── per-sprite uniform ────────────────────────────────────────────────────

/// Mirrors `SpriteUniform` in `sprite.wgsl`.
///
/// `mat3x3<f32>` occupies three 16-byte columns; `size` follows at offset 48.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct SpriteUniform {
    pub transform: [[f32; 4]; 3],
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

impl SpriteUniform {
    pub(super) fn new(transform: Mat3, size: Vec2) -> Self {
        Self {
            transform: transform.to_gpu_columns(),
            size: [size.x, size.y],
            _pad: [0.0; 2],
        }
    }

    pub(super) fn min_binding_size() -> Option<std::num::NonZeroU64> {
        std::num::NonZeroU64::new(std::mem::size_of::<SpriteUniform>() as u64)
    }
}

/// Rounds `size` up to a multiple of `align` (a power of two).
pub(super) fn align_up(size: u64, align: u64) -> u64 {
    debug_assert!(align.is_power_of_two());
    (size + align - 1) & !(align - 1)
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    /// Corner in [0,1]^2; doubles as the texture coordinate.
    pub corner: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { corner: [0.0, 0.0] },
    QuadVertex { corner: [1.0, 0.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Rejects images the device cannot hold as a single 2D texture.
pub(super) fn check_texture_extent(
    width: u32,
    height: u32,
    max_dimension: u32,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        width <= max_dimension && height <= max_dimension,
        "sprite texture {width}x{height} exceeds device limit {max_dimension}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<SpriteUniform>(), 64);
        assert_eq!(std::mem::offset_of!(SpriteUniform, size), 48);
    }

    #[test]
    fn uniform_carries_translation_column() {
        let u = SpriteUniform::new(Mat3::translation(3.0, 4.0), Vec2::new(150.0, 150.0));
        assert_eq!(u.transform[2], [3.0, 4.0, 1.0, 0.0]);
        assert_eq!(u.size, [150.0, 150.0]);
    }

    #[test]
    fn align_up_rounds_to_multiple() {
        assert_eq!(align_up(64, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
    }

    #[test]
    fn texture_extent_respects_device_limit() {
        assert!(check_texture_extent(2048, 2048, 2048).is_ok());
        let err = check_texture_extent(4096, 16, 2048).unwrap_err();
        assert!(err.to_string().contains("4096x16"));
        assert!(check_texture_extent(16, 2049, 2048).is_err());
    }
}
