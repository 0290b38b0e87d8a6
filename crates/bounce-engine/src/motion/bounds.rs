use crate::coords::{Vec2, Viewport};

/// Per-axis travel range `[0, far]` for an object's origin.
///
/// `far` is the viewport extent minus the object footprint, so the object's
/// far edge stays on screen. A viewport smaller than the object produces a
/// negative `far`; that is not corrected here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub far: Vec2,
}

impl Bounds {
    #[inline]
    pub const fn new(far: Vec2) -> Self {
        Self { far }
    }

    #[inline]
    pub fn from_viewport(viewport: Viewport, size: Vec2) -> Self {
        Self::new(viewport.size() - size)
    }

    /// Closed-range containment on both axes.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.far.x && p.y <= self.far.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_is_subtracted() {
        let b = Bounds::from_viewport(Viewport::new(300.0, 150.0), Vec2::new(150.0, 150.0));
        assert_eq!(b.far, Vec2::new(150.0, 0.0));
    }

    #[test]
    fn contains_edges_inclusive() {
        let b = Bounds::new(Vec2::new(10.0, 5.0));
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(10.0, 5.0)));
        assert!(!b.contains(Vec2::new(10.5, 5.0)));
        assert!(!b.contains(Vec2::new(-0.1, 1.0)));
    }

    #[test]
    fn oversized_object_yields_negative_far() {
        let b = Bounds::from_viewport(Viewport::new(100.0, 100.0), Vec2::new(150.0, 150.0));
        assert_eq!(b.far, Vec2::new(-50.0, -50.0));
    }
}
