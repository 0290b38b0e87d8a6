/// One acquired swapchain image plus the encoder recording into it.
///
/// Short-lived: the surface texture must be released (via `Gpu::submit`)
/// before the next frame can be acquired.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
