//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per presented frame. The
//! resulting `FrameTime::dt_millis()` is what gets fed to `Scene::tick`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
