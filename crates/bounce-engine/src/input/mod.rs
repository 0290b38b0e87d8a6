//! Keyboard and focus input.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window events for the runtime.

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
