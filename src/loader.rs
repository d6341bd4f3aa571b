//! Image loading.
//!
//! Decodes any format the `image` crate supports into an RGBA buffer, then
//! optionally shrinks it so its longer side fits within a maximum.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{Result, SwatchError};
use crate::types::Region;

/// Default bound on the longer image side.
pub const DEFAULT_MAX_DIM: u32 = 1600;

/// Dimensions after fitting `width` x `height` within `max_dim`.
///
/// Aspect ratio is preserved; each side is rounded to the nearest pixel and
/// kept at least 1. A `max_dim` of 0 disables the bound.
pub fn fit_dimensions(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let longest = width.max(height);
    if max_dim == 0 || longest <= max_dim {
        return (width, height);
    }

    let scale = max_dim as f64 / longest as f64;
    let w = (width as f64 * scale).round().max(1.0) as u32;
    let h = (height as f64 * scale).round().max(1.0) as u32;
    (w, h)
}

/// Shrink `image` to fit within `max_dim`, or return it unchanged.
pub fn downscale(image: RgbaImage, max_dim: u32) -> RgbaImage {
    let (w, h) = fit_dimensions(image.width(), image.height(), max_dim);
    if (w, h) == image.dimensions() {
        return image;
    }
    imageops::resize(&image, w, h, FilterType::Triangle)
}

/// Decode `path` to RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SwatchError::Io {
            path: path.to_path_buf(),
            message: "File not found".to_string(),
        });
    }

    let img = image::open(path).map_err(|e| SwatchError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })?;

    Ok(img.to_rgba8())
}

/// Decode `path` and fit it within `max_dim`.
pub fn load_image(path: &Path, max_dim: u32) -> Result<RgbaImage> {
    Ok(downscale(load_rgba(path)?, max_dim))
}

/// Cut `region` out of `image` at its current resolution.
///
/// Regions thinner than two pixels or reaching past the image are rejected.
pub fn crop(image: &RgbaImage, region: Region) -> Result<RgbaImage> {
    region.validate()?;
    region.check_bounds(image.width(), image.height())?;

    Ok(imageops::crop_imm(image, region.x, region.y, region.w, region.h).to_image())
}

/// Encode `image` to `path`; the format follows the extension.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| SwatchError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fit_within_bound_is_unchanged() {
        assert_eq!(fit_dimensions(800, 600, 1600), (800, 600));
        assert_eq!(fit_dimensions(1600, 1600, 1600), (1600, 1600));
    }

    #[test]
    fn test_fit_landscape() {
        assert_eq!(fit_dimensions(3200, 1000, 1600), (1600, 500));
        assert_eq!(fit_dimensions(4000, 3000, 1600), (1600, 1200));
    }

    #[test]
    fn test_fit_portrait_rounds() {
        // 1601 * (1600 / 2001) = 1280.2
        assert_eq!(fit_dimensions(1601, 2001, 1600), (1280, 1600));
    }

    #[test]
    fn test_fit_keeps_one_pixel() {
        assert_eq!(fit_dimensions(10000, 1, 100), (100, 1));
    }

    #[test]
    fn test_fit_disabled() {
        assert_eq!(fit_dimensions(5000, 5000, 0), (5000, 5000));
    }

    #[test]
    fn test_downscale_image() {
        let img = RgbaImage::from_pixel(40, 20, image::Rgba([10, 20, 30, 255]));
        let small = downscale(img, 10);

        assert_eq!(small.dimensions(), (10, 5));
        assert_eq!(small.get_pixel(3, 2).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_crop_keeps_full_resolution() {
        let mut img = RgbaImage::from_pixel(6, 4, image::Rgba([0, 0, 0, 255]));
        img.put_pixel(4, 3, image::Rgba([9, 8, 7, 255]));

        let cropped = crop(&img, Region::new(3, 2, 3, 2)).unwrap();
        assert_eq!(cropped.dimensions(), (3, 2));
        assert_eq!(cropped.get_pixel(1, 1).0, [9, 8, 7, 255]);
    }

    #[test]
    fn test_crop_rejects_bad_regions() {
        let img = RgbaImage::from_pixel(6, 4, image::Rgba([0, 0, 0, 255]));

        let err = crop(&img, Region::new(0, 0, 1, 4)).unwrap_err();
        assert!(matches!(err, SwatchError::InvalidRegion { .. }));

        let err = crop(&img, Region::new(5, 0, 2, 2)).unwrap_err();
        assert!(matches!(err, SwatchError::RegionOutOfBounds { .. }));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.png");

        let mut img = RgbaImage::from_pixel(3, 2, image::Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 1, image::Rgba([200, 100, 50, 255]));
        save_image(&img, &path).unwrap();

        let loaded = load_image(&path, DEFAULT_MAX_DIM).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_rgba(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(matches!(err, SwatchError::Io { .. }));
    }

    #[test]
    fn test_load_not_an_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bogus.png");
        std::fs::write(&path, b"not a png").unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, SwatchError::Image { .. }));
    }
}
