//! PNG output.

use std::fs;
use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{Result, ShotError};

/// Flatten a composited canvas to opaque RGB and write it as a PNG,
/// creating parent directories as needed. Compositing happens over an
/// opaque backdrop, so dropping the alpha channel loses nothing and
/// keeps files smaller.
pub fn write_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ShotError::Io {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
    rgb.save(path).map_err(|e| ShotError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_writes_opaque_rgb_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        let canvas = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        write_png(&canvas, &path).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.color(), image::ColorType::Rgb8);
        assert_eq!(back.to_rgb8().get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/out.png");
        let canvas = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        write_png(&canvas, &path).unwrap();
        assert!(path.is_file());
    }
}
