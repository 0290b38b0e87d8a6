//! Motion controller.
//!
//! Advances a position along a unit direction each tick and reflects the
//! direction when the position leaves `[0, viewport - size]` on either axis.

mod bounds;
mod state;

pub use bounds::Bounds;
pub use state::{MotionState, Reflection, StepRule};
