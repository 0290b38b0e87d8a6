//! Contracts between the runtime loop and applications.
//!
//! The runtime owns the window, GPU and clock; applications only see the
//! per-frame context and return an `AppControl`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
