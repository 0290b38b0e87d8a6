//! Keyboard control surface.
//!
//! Arrows move the translate offset, `Q`/`E` rotate, `-`/`=` scale,
//! `[`/`]` change speed, digits pick a texture and `R` restores the initial
//! values. Holding Shift makes every step coarser.

use bounce_engine::coords::Vec2;
use bounce_engine::input::{InputFrame, Key};
use bounce_engine::scene::SpriteControls;

const TRANSLATE_STEP: f32 = 10.0;
const ROTATE_STEP_DEG: f32 = 15.0;
const SCALE_FACTOR: f32 = 1.1;
const SPEED_STEP: f32 = 0.02;
const COARSE: f32 = 5.0;

/// Current control values, edited by key presses.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    pub translate: Vec2,
    pub scale: f32,
    pub rotation_degrees: f32,
    pub speed: f32,
    pub texture: usize,
    texture_count: usize,
    initial: Snapshot,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Snapshot {
    translate: Vec2,
    scale: f32,
    rotation_degrees: f32,
    speed: f32,
    texture: usize,
}

impl ControlPanel {
    pub fn new(
        translate: Vec2,
        scale: f32,
        rotation_degrees: f32,
        speed: f32,
        texture: usize,
        texture_count: usize,
    ) -> Self {
        Self {
            translate,
            scale,
            rotation_degrees,
            speed,
            texture,
            texture_count,
            initial: Snapshot {
                translate,
                scale,
                rotation_degrees,
                speed,
                texture,
            },
        }
    }

    pub fn set_texture_count(&mut self, count: usize) {
        self.texture_count = count;
    }

    /// Edits from this frame's key activity. Only touched fields are set.
    pub fn handle(&mut self, frame: &InputFrame, shift: bool) -> SpriteControls {
        let k = if shift { COARSE } else { 1.0 };
        let taps = |key: Key| frame.activations(key) as f32;
        let mut out = SpriteControls::default();

        if frame.pressed(Key::R) {
            let initial = self.initial;
            self.translate = initial.translate;
            self.scale = initial.scale;
            self.rotation_degrees = initial.rotation_degrees;
            self.speed = initial.speed;
            self.texture = initial.texture;
            return SpriteControls {
                translate: Some(self.translate),
                scale: Some(self.scale),
                rotation_degrees: Some(self.rotation_degrees),
                speed: Some(self.speed),
                texture: Some(self.texture),
            };
        }

        let dx = taps(Key::ArrowRight) - taps(Key::ArrowLeft);
        let dy = taps(Key::ArrowDown) - taps(Key::ArrowUp);
        if dx != 0.0 || dy != 0.0 {
            self.translate = self.translate + Vec2::new(dx, dy) * (TRANSLATE_STEP * k);
            out.translate = Some(self.translate);
        }

        let turns = taps(Key::E) - taps(Key::Q);
        if turns != 0.0 {
            self.rotation_degrees = (self.rotation_degrees + turns * ROTATE_STEP_DEG * k) % 360.0;
            out.rotation_degrees = Some(self.rotation_degrees);
        }

        let zoom = taps(Key::Equal) - taps(Key::Minus);
        if zoom != 0.0 {
            self.scale *= SCALE_FACTOR.powf(zoom * k);
            out.scale = Some(self.scale);
        }

        let accel = taps(Key::BracketRight) - taps(Key::BracketLeft);
        if accel != 0.0 {
            self.speed += accel * SPEED_STEP * k;
            out.speed = Some(self.speed);
        }

        // Digits are 1-based on the keyboard.
        let picked = frame
            .keys_pressed
            .iter()
            .filter_map(|key| key.digit())
            .filter(|d| *d >= 1)
            .map(|d| d as usize - 1)
            .filter(|i| *i < self.texture_count)
            .min();
        if let Some(i) = picked {
            self.texture = i;
            out.texture = Some(i);
        }

        out
    }
}
