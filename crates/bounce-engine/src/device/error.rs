/// What the frame driver should do after a failed surface acquire.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame may render.
    Reconfigured,
    /// Transient failure; drop this frame and keep ticking.
    SkipFrame,
    /// Unrecoverable (out of memory); shut the runtime down.
    Fatal,
}
