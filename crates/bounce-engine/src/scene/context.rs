use crate::coords::Viewport;
use crate::motion::StepRule;
use crate::transform::Mat3;

use super::{Sprite, SpriteControls};

/// Stable handle to a sprite inside a [`Scene`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SpriteId(usize);

impl SpriteId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every animated sprite and the step rule they share.
///
/// Sprites are ticked and drawn in insertion order. Each sprite owns its own
/// motion state; nothing is shared between them.
#[derive(Debug, Default)]
pub struct Scene {
    sprites: Vec<Sprite>,
    rule: StepRule,
}

impl Scene {
    pub fn new(rule: StepRule) -> Self {
        Self {
            sprites: Vec::new(),
            rule,
        }
    }

    pub fn push(&mut self, sprite: Sprite) -> SpriteId {
        self.sprites.push(sprite);
        SpriteId(self.sprites.len() - 1)
    }

    #[inline]
    pub fn rule(&self) -> StepRule {
        self.rule
    }

    #[inline]
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Applies `controls` to every sprite.
    pub fn apply_controls(&mut self, controls: &SpriteControls) {
        for sprite in &mut self.sprites {
            controls.apply(sprite);
        }
    }

    /// Advances every sprite by `elapsed_ms` against `viewport`.
    pub fn tick(&mut self, elapsed_ms: f32, viewport: Viewport) {
        for (i, sprite) in self.sprites.iter_mut().enumerate() {
            let hit = sprite.motion.step(elapsed_ms, viewport, self.rule);
            if hit.any() {
                log::trace!(
                    "sprite {i} reflected (x: {}, y: {}) at {:?}",
                    hit.x,
                    hit.y,
                    sprite.motion.position
                );
            }
        }
    }

    /// Final matrices, in draw order.
    pub fn transforms(&self, viewport: Viewport) -> Vec<Mat3> {
        self.sprites.iter().map(|s| s.matrix(viewport)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::motion::MotionState;
    use crate::scene::SpriteParams;

    fn sprite_at(x: f32, y: f32) -> Sprite {
        Sprite::new(MotionState::new(
            Vec2::new(x, y),
            Vec2::new(1.0, 0.0),
            0.0,
            Vec2::new(10.0, 10.0),
        ))
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn transforms_follow_insertion_order() {
        let vp = Viewport::new(256.0, 128.0);
        let mut scene = Scene::new(StepRule::default());
        let a = scene.push(sprite_at(0.0, 0.0));
        let b = scene.push(sprite_at(128.0, 64.0));

        let mats = scene.transforms(vp);
        assert_eq!(mats.len(), 2);
        assert_eq!(mats[a.index()].transform_point(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(mats[b.index()].transform_point(Vec2::ZERO), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn tick_moves_each_sprite_independently() {
        let vp = Viewport::new(100.0, 100.0);
        let mut scene = Scene::new(StepRule::TimeScaledWithNudge);
        let a = scene.push(sprite_at(0.0, 0.0));
        let b = scene.push(sprite_at(85.0, 0.0));

        scene.tick(10.0, vp);

        assert_eq!(scene.get(a).unwrap().motion.position.x, 10.0);
        // 85 + 10 = 95 > 90 (100 - footprint)
        let sb = &scene.get(b).unwrap().motion;
        assert_eq!(sb.position.x, 90.0);
        assert_eq!(sb.direction.x, -1.0);
    }

    #[test]
    fn resized_viewport_takes_effect_next_tick() {
        let mut scene = Scene::new(StepRule::TimeScaledWithNudge);
        let id = scene.push(sprite_at(80.0, 0.0));

        scene.tick(0.0, Viewport::new(100.0, 100.0));
        assert_eq!(scene.get(id).unwrap().motion.position.x, 80.0);

        scene.tick(0.0, Viewport::new(50.0, 100.0));
        assert_eq!(scene.get(id).unwrap().motion.position.x, 40.0);
    }

    // ── controls ──────────────────────────────────────────────────────────

    #[test]
    fn controls_convert_degrees_and_update_speed() {
        let mut scene = Scene::new(StepRule::default());
        let id = scene.push(sprite_at(0.0, 0.0));

        scene.apply_controls(&SpriteControls {
            rotation_degrees: Some(180.0),
            speed: Some(0.5),
            texture: Some(2),
            ..SpriteControls::default()
        });

        let s = scene.get(id).unwrap();
        assert!((s.params.rotation_radians - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(s.motion.speed, 0.5);
        assert_eq!(s.texture, 2);
        assert_eq!(s.params.scale, 1.0);
    }

    #[test]
    fn empty_controls_change_nothing() {
        let mut s = sprite_at(3.0, 4.0).with_params(SpriteParams {
            translate: Vec2::new(1.0, 1.0),
            scale: 2.0,
            rotation_radians: 0.5,
        });
        let before = s.clone();
        let controls = SpriteControls::default();

        assert!(controls.is_empty());
        controls.apply(&mut s);
        assert_eq!(s, before);
    }

    #[test]
    fn scale_control_feeds_world_matrix() {
        let mut s = sprite_at(0.0, 0.0);
        SpriteControls { scale: Some(3.0), ..Default::default() }.apply(&mut s);

        let p = s.transform().world_matrix().transform_point(Vec2::new(10.0, 0.0));
        assert_eq!(p, Vec2::new(30.0, 0.0));
    }

    // ── threading ─────────────────────────────────────────────────────────

    #[test]
    fn core_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<crate::transform::Mat3>();
        assert_send_sync::<MotionState>();
        assert_send_sync::<Sprite>();
        assert_send_sync::<Scene>();
    }
}
