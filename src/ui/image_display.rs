//! Thumbnail loading for the window.
//!
//! Decoding happens on the UI thread; results are kept in the
//! [`ThumbnailCache`] so each file is decoded once per session.

use crate::error::Result;
use crate::file_utils::PathExt;
use crate::image_cache::{CachedThumbnail, ThumbnailCache};
use crate::image_loader;
use log::debug;
use std::path::Path;

/// Returns the thumbnail of `path`, decoding it on a cache miss.
pub fn thumbnail_for(path: &Path, cache: &mut ThumbnailCache) -> Result<slint::Image> {
    if let Some(cached) = cache.get(path) {
        return Ok(image_loader::create_slint_image(
            &cached.data,
            cached.width,
            cached.height,
        ));
    }

    let (data, width, height) = image_loader::load_thumbnail_blocking(path)?;
    let image = image_loader::create_slint_image(&data, width, height);
    cache.put(
        path.to_path_buf(),
        CachedThumbnail::new(data, width, height),
    );
    Ok(image)
}

/// Thumbnail of `path` if it exists and decodes, otherwise `None`.
///
/// A missing or unreadable file is shown as a placeholder, so failures are
/// only logged.
pub fn try_thumbnail(path: &Path, cache: &mut ThumbnailCache) -> Option<slint::Image> {
    if !path.is_file() {
        debug!("Image not found: {}", path.format_for_log());
        return None;
    }

    thumbnail_for(path, cache)
        .map_err(|e| debug!("Cannot show {}: {}", path.format_for_log(), e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn missing_file_has_no_thumbnail() {
        let dir = tempdir().unwrap();
        let mut cache = ThumbnailCache::new(4);
        let gone = dir.path().join("shoes").join("boot1.png");

        assert!(try_thumbnail(&gone, &mut cache).is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn undecodable_file_has_no_thumbnail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring1.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let mut cache = ThumbnailCache::new(4);

        assert!(try_thumbnail(&path, &mut cache).is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shirt1.png");
        RgbImage::from_pixel(320, 240, Rgb([10, 120, 200]))
            .save(&path)
            .unwrap();
        let mut cache = ThumbnailCache::new(4);

        assert!(try_thumbnail(&path, &mut cache).is_some());
        assert_eq!(cache.len(), 1);

        std::fs::write(&path, b"overwritten").unwrap();
        let again = try_thumbnail(&path, &mut cache);
        assert!(again.is_some());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&path).map(|t| (t.width, t.height)), Some((160, 120)));
    }
}
