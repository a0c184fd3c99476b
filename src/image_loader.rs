use crate::config::{THUMBNAIL_MAX_HEIGHT, THUMBNAIL_MAX_WIDTH};
use crate::error::{AppError, Result};
use image::imageops::FilterType;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Scales `(width, height)` down to fit inside `(max_width, max_height)`.
///
/// Uses `scale = min(max_w / w, max_h / h, 1.0)`, so images are never
/// enlarged. Truncated dimensions are kept at one pixel or more.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let scale = (max_width as f64 / width as f64)
        .min(max_height as f64 / height as f64)
        .min(1.0);

    let scaled_width = ((width as f64 * scale) as u32).max(1);
    let scaled_height = ((height as f64 * scale) as u32).max(1);
    (scaled_width, scaled_height)
}

/// Decodes an image and shrinks it to thumbnail size.
///
/// Returns RGB8 bytes with the thumbnail dimensions.
pub fn load_thumbnail_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .decode()?;

    let (width, height) = fit_within(
        img.width(),
        img.height(),
        THUMBNAIL_MAX_WIDTH,
        THUMBNAIL_MAX_HEIGHT,
    );

    let img = if (width, height) == (img.width(), img.height()) {
        img
    } else {
        img.resize_exact(width, height, FilterType::Lanczos3)
    };

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width, height))
}

/// Wraps RGB8 bytes in a Slint image.
pub fn create_slint_image(data: &[u8], width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(data, width, height);
    Image::from_rgb8(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    const SIZES: [(u32, u32); 8] = [
        (1, 1),
        (160, 120),
        (100, 50),
        (320, 240),
        (4000, 3000),
        (50, 1000),
        (1000, 7),
        (161, 121),
    ];

    #[test]
    fn fit_never_grows_or_exceeds_bounds() {
        for (w, h) in SIZES {
            let (fw, fh) = fit_within(w, h, 160, 120);
            assert!(fw <= w && fh <= h, "{w}x{h} grew to {fw}x{fh}");
            assert!(fw <= 160 && fh <= 120, "{w}x{h} -> {fw}x{fh} out of bounds");
        }
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        for (w, h) in SIZES {
            let (fw, fh) = fit_within(w, h, 160, 120);
            let original = w as f64 / h as f64;
            let fitted = fw as f64 / fh as f64;
            // Truncation moves each side by under one pixel.
            let tolerance = original * (1.0 / fw as f64 + 1.0 / fh as f64) + 1e-9;
            assert!(
                (original - fitted).abs() <= tolerance,
                "{w}x{h} -> {fw}x{fh}"
            );
        }
    }

    #[test]
    fn fit_examples() {
        assert_eq!(fit_within(320, 240, 160, 120), (160, 120));
        assert_eq!(fit_within(400, 100, 160, 120), (160, 40));
        assert_eq!(fit_within(60, 240, 160, 120), (30, 120));
        assert_eq!(fit_within(80, 60, 160, 120), (80, 60));
    }

    #[test]
    fn thumbnail_is_decoded_and_shrunk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.png");
        RgbImage::from_pixel(640, 240, Rgb([200, 10, 10]))
            .save(&path)
            .unwrap();

        let (data, width, height) = load_thumbnail_blocking(&path).unwrap();
        assert_eq!((width, height), (160, 60));
        assert_eq!(data.len(), (width * height * 3) as usize);
    }

    #[test]
    fn undecodable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(load_thumbnail_blocking(&path).is_err());
    }
}
