use rand::Rng;

use crate::coords::{Vec2, Viewport};

use super::Bounds;

/// How a tick converts elapsed time into displacement.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum StepRule {
    /// `position += direction * elapsed_ms + speed` per axis.
    ///
    /// `speed` is added as a constant per-tick nudge on top of the
    /// time-scaled term, independent of elapsed time and of direction.
    #[default]
    TimeScaledWithNudge,

    /// `position += direction * elapsed_ms * speed` per axis.
    TimeScaled,
}

impl StepRule {
    #[inline]
    fn displacement(self, direction: f32, elapsed_ms: f32, speed: f32) -> f32 {
        match self {
            StepRule::TimeScaledWithNudge => direction * elapsed_ms + speed,
            StepRule::TimeScaled => direction * elapsed_ms * speed,
        }
    }
}

/// Axes that reflected during one tick.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Position and heading of one moving object.
///
/// `direction` is a unit vector. Reflection only flips the sign of a
/// component, so its length never drifts and is never renormalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionState {
    /// Top-left corner in logical pixels.
    pub position: Vec2,
    pub direction: Vec2,
    /// Pixels per millisecond (see [`StepRule`] for how it is applied).
    pub speed: f32,
    /// Object footprint used for the far-edge bound.
    pub size: Vec2,
}

impl MotionState {
    #[inline]
    pub const fn new(position: Vec2, direction: Vec2, speed: f32, size: Vec2) -> Self {
        Self { position, direction, speed, size }
    }

    /// Starts at `position` heading in a uniformly random direction.
    pub fn with_random_direction<R>(rng: &mut R, position: Vec2, speed: f32, size: Vec2) -> Self
    where
        R: Rng + ?Sized,
    {
        let heading = rng.gen_range(0.0..std::f32::consts::TAU);
        Self::new(position, Vec2::from_angle(heading), speed, size)
    }

    /// Advances one tick against the current viewport.
    pub fn step(&mut self, elapsed_ms: f32, viewport: Viewport, rule: StepRule) -> Reflection {
        self.step_within(elapsed_ms, Bounds::from_viewport(viewport, self.size), rule)
    }

    /// Advances one tick against explicit bounds.
    ///
    /// Axes are updated and reflected independently; both may reflect in the
    /// same tick.
    pub fn step_within(&mut self, elapsed_ms: f32, bounds: Bounds, rule: StepRule) -> Reflection {
        self.position.x += rule.displacement(self.direction.x, elapsed_ms, self.speed);
        self.position.y += rule.displacement(self.direction.y, elapsed_ms, self.speed);

        Reflection {
            x: reflect_axis(&mut self.position.x, &mut self.direction.x, bounds.far.x),
            y: reflect_axis(&mut self.position.y, &mut self.direction.y, bounds.far.y),
        }
    }
}

/// Clamps `pos` into `[0, far]`, flipping `dir` when it was outside.
///
/// The far edge is tested first; with a negative `far` the near check is
/// skipped on that tick.
fn reflect_axis(pos: &mut f32, dir: &mut f32, far: f32) -> bool {
    if *pos > far {
        *dir = -*dir;
        *pos = far;
        true
    } else if *pos < 0.0 {
        *dir = -*dir;
        *pos = 0.0;
        true
    } else {
        false
    }
}
