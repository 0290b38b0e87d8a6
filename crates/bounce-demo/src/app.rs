use anyhow::Result;

use bounce_engine::coords::Viewport;
use bounce_engine::core::{App, AppControl, FrameCtx};
use bounce_engine::input::Key;
use bounce_engine::render::sprite::{SpriteDraw, SpriteImage, SpriteRenderer, TextureId};
use bounce_engine::render::RenderCtx;
use bounce_engine::scene::Scene;

use crate::controls::ControlPanel;

/// The bouncing-sprite demo: owns the scene, its textures and the controls.
pub struct BounceApp {
    scene: Scene,
    panel: ControlPanel,
    renderer: SpriteRenderer,
    /// Decoded images waiting for the GPU; drained in `on_gpu_ready`.
    pending: Vec<SpriteImage>,
    clear: [f64; 4],
    paused: bool,
}

impl BounceApp {
    pub fn new(scene: Scene, panel: ControlPanel, images: Vec<SpriteImage>, clear: [f64; 4]) -> Self {
        Self {
            scene,
            panel,
            renderer: SpriteRenderer::new(),
            pending: images,
            clear,
            paused: false,
        }
    }
}

/// Ticks `scene` unless paused or the viewport is degenerate (minimized).
fn advance(scene: &mut Scene, elapsed_ms: f32, viewport: Viewport, paused: bool) -> bool {
    if paused || !viewport.is_valid() {
        return false;
    }
    scene.tick(elapsed_ms, viewport);
    true
}

/// One draw per sprite, in scene order.
fn draws_for(scene: &Scene, viewport: Viewport) -> Vec<SpriteDraw> {
    scene
        .sprites()
        .iter()
        .zip(scene.transforms(viewport))
        .map(|(sprite, matrix)| SpriteDraw {
            matrix,
            size: sprite.motion.size,
            texture: TextureId(sprite.texture),
        })
        .collect()
}

impl App for BounceApp {
    fn on_gpu_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        for image in self.pending.drain(..) {
            self.renderer.add_texture(ctx, &image)?;
        }
        self.panel.set_texture_count(self.renderer.texture_count());
        log::info!("{} textures uploaded", self.renderer.texture_count());
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let input = ctx.input_frame;
        if input.pressed(Key::Escape) {
            return AppControl::Exit;
        }
        if input.pressed(Key::Space) {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "paused" } else { "resumed" });
        }

        let controls = self.panel.handle(input, ctx.input.modifiers.shift);
        if !controls.is_empty() {
            log::debug!("controls: {controls:?}");
            self.scene.apply_controls(&controls);
        }

        let viewport = ctx.viewport();
        advance(&mut self.scene, ctx.time.dt_millis(), viewport, self.paused);

        let draws = draws_for(&self.scene, viewport);
        let renderer = &mut self.renderer;
        ctx.render(self.clear, |rctx, target| renderer.render(rctx, target, &draws))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_engine::coords::Vec2;
    use bounce_engine::motion::{MotionState, StepRule};
    use bounce_engine::scene::{Sprite, SpriteParams};

    fn sprite_at(x: f32, y: f32, texture: usize) -> Sprite {
        let motion = MotionState::new(Vec2::new(x, y), Vec2::new(1.0, 0.0), 0.0, Vec2::new(150.0, 150.0));
        Sprite::new(motion).with_texture(texture)
    }

    #[test]
    fn draws_follow_scene_order_and_textures() {
        let mut scene = Scene::new(StepRule::default());
        scene.push(sprite_at(0.0, 0.0, 2));
        scene.push(sprite_at(10.0, 20.0, 0));

        let vp = Viewport::new(300.0, 150.0);
        let draws = draws_for(&scene, vp);

        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].texture, TextureId(2));
        assert_eq!(draws[1].texture, TextureId(0));
        assert_eq!(draws[0].size, Vec2::new(150.0, 150.0));
        assert_eq!(draws[1].matrix, scene.sprites()[1].matrix(vp));
    }

    #[test]
    fn draw_matrix_places_origin_at_sprite_offset() {
        let mut scene = Scene::new(StepRule::default());
        scene.push(sprite_at(150.0, 0.0, 0).with_params(SpriteParams::default()));

        let draws = draws_for(&scene, Viewport::new(300.0, 150.0));
        let p = draws[0].matrix.transform_point(Vec2::ZERO);
        // x = 150 of 300 maps to the NDC center.
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    // ── frame advance ────────────────────────────────────────────────────────

    fn moving_sprite() -> Sprite {
        let motion = MotionState::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(0.6, 0.8),
            0.08,
            Vec2::new(150.0, 150.0),
        );
        Sprite::new(motion)
    }

    #[test]
    fn minimized_viewport_freezes_motion() {
        let mut scene = Scene::new(StepRule::default());
        scene.push(moving_sprite());

        for _ in 0..3 {
            assert!(!advance(&mut scene, 16.0, Viewport::new(0.0, 0.0), false));
        }

        let m = scene.sprites()[0].motion;
        assert_eq!(m.position, Vec2::new(100.0, 100.0));
        assert_eq!(m.direction, Vec2::new(0.6, 0.8));
    }

    #[test]
    fn paused_scene_does_not_move() {
        let mut scene = Scene::new(StepRule::default());
        scene.push(moving_sprite());

        assert!(!advance(&mut scene, 16.0, Viewport::new(800.0, 600.0), true));
        assert_eq!(scene.sprites()[0].motion.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn valid_viewport_advances() {
        let mut scene = Scene::new(StepRule::default());
        scene.push(moving_sprite());

        assert!(advance(&mut scene, 10.0, Viewport::new(800.0, 600.0), false));
        let p = scene.sprites()[0].motion.position;
        assert!((p.x - (100.0 + 6.0 + 0.08)).abs() < 1e-4);
        assert!((p.y - (100.0 + 8.0 + 0.08)).abs() < 1e-4);
    }
}
