use anyhow::Result;

/// CPU-side RGBA8 pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SpriteImage {
    /// Wraps tightly packed RGBA8 data.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "image has zero size ({width}x{height})");
        let expected = width as usize * height as usize * 4;
        anyhow::ensure!(
            pixels.len() == expected,
            "expected {expected} bytes for {width}x{height} RGBA8, got {}",
            pixels.len()
        );
        Ok(Self { width, height, pixels })
    }

    /// Fills every pixel from `f(x, y)`.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    /// Two-colour checkerboard with square cells of `cell` pixels.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = cell.max(1);
        Self::from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 { a } else { b }
        })
    }

    /// Linear blend from `top` to `bottom`.
    pub fn vertical_gradient(width: u32, height: u32, top: [u8; 4], bottom: [u8; 4]) -> Self {
        let span = height.saturating_sub(1).max(1) as f32;
        Self::from_fn(width, height, |_, y| {
            let t = y as f32 / span;
            let mut px = [0u8; 4];
            for (i, out) in px.iter_mut().enumerate() {
                let v = top[i] as f32 + (bottom[i] as f32 - top[i] as f32) * t;
                *out = v.round() as u8;
            }
            px
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].try_into().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn rejects_wrong_length() {
        assert!(SpriteImage::from_rgba8(2, 2, vec![0; 15]).is_err());
        assert!(SpriteImage::from_rgba8(0, 2, vec![]).is_err());
        assert!(SpriteImage::from_rgba8(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let img = SpriteImage::checkerboard(4, 4, 2, RED, BLUE);
        assert_eq!(img.pixel(0, 0), Some(RED));
        assert_eq!(img.pixel(1, 1), Some(RED));
        assert_eq!(img.pixel(2, 0), Some(BLUE));
        assert_eq!(img.pixel(2, 2), Some(RED));
        assert_eq!(img.pixel(4, 0), None);
    }

    #[test]
    fn gradient_hits_both_ends() {
        let img = SpriteImage::vertical_gradient(1, 3, RED, BLUE);
        assert_eq!(img.pixel(0, 0), Some(RED));
        assert_eq!(img.pixel(0, 2), Some(BLUE));
        assert_eq!(img.pixel(0, 1), Some([128, 0, 128, 255]));
    }
}
