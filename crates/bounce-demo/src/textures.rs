use std::path::Path;

use anyhow::{Context, Result};

use bounce_engine::render::sprite::SpriteImage;

/// Edge length of the built-in patterns.
const BUILTIN_SIZE: u32 = 64;

/// Decodes `paths` into RGBA8 images, or returns the built-in set when empty.
pub fn load_all(paths: &[impl AsRef<Path>]) -> Result<Vec<SpriteImage>> {
    if paths.is_empty() {
        return Ok(builtin());
    }
    paths.iter().map(|p| decode(p.as_ref())).collect()
}

/// Decodes one image file.
pub fn decode(path: &Path) -> Result<SpriteImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode texture {}", path.display()))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    log::debug!("texture {} decoded ({w}x{h})", path.display());
    SpriteImage::from_rgba8(w, h, img.into_raw())
}

/// Three distinguishable patterns used when no image files are configured.
pub fn builtin() -> Vec<SpriteImage> {
    let n = BUILTIN_SIZE;
    vec![
        SpriteImage::checkerboard(n, n, 8, [240, 240, 240, 255], [40, 40, 48, 255]),
        SpriteImage::vertical_gradient(n, n, [250, 170, 60, 255], [200, 40, 90, 255]),
        rings(n),
    ]
}

fn rings(n: u32) -> SpriteImage {
    let c = n as f32 / 2.0;
    SpriteImage::from_fn(n, n, |x, y| {
        let dx = x as f32 + 0.5 - c;
        let dy = y as f32 + 0.5 - c;
        let band = ((dx * dx + dy * dy).sqrt() / 6.0) as u32;
        if band % 2 == 0 {
            [60, 110, 230, 255]
        } else {
            [245, 245, 255, 255]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_has_three_square_textures() {
        let set = builtin();
        assert_eq!(set.len(), 3);
        for img in &set {
            assert_eq!((img.width(), img.height()), (BUILTIN_SIZE, BUILTIN_SIZE));
            assert_eq!(img.pixels().len(), (BUILTIN_SIZE * BUILTIN_SIZE * 4) as usize);
        }
    }

    #[test]
    fn empty_path_list_falls_back_to_builtin() {
        let paths: [&Path; 0] = [];
        assert_eq!(load_all(&paths).unwrap().len(), 3);
    }

    #[test]
    fn rings_alternate_from_center() {
        let img = rings(64);
        assert_eq!(img.pixel(32, 32), Some([60, 110, 230, 255]));
        assert_eq!(img.pixel(32 + 8, 32), Some([245, 245, 255, 255]));
    }

    #[test]
    fn decode_round_trips_png() {
        let path = std::env::temp_dir().join("bounce-demo-decode-test.png");
        let src = image::RgbaImage::from_fn(3, 2, |x, y| image::Rgba([x as u8 * 80, y as u8 * 100, 7, 255]));
        src.save(&path).unwrap();

        let img = decode(&path).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.pixel(2, 1), Some([160, 100, 7, 255]));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = decode(Path::new("/nonexistent/texture.png")).unwrap_err();
        assert!(format!("{err:#}").contains("texture.png"));
    }
}
