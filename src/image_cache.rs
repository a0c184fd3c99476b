//! Thumbnail cache for fast stepping.
//!
//! Keeps decoded, already shrunk RGB8 thumbnails under an LRU policy so that
//! cycling back to an image or reviewing saved outfits does not decode the
//! file again.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Decoded thumbnail pixels.
#[derive(Clone)]
pub struct CachedThumbnail {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CachedThumbnail {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// LRU cache for storing decoded thumbnails.
pub struct ThumbnailCache {
    cache: LruCache<PathBuf, CachedThumbnail>,
}

impl ThumbnailCache {
    /// Creates a new cache; a zero capacity is raised to one entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Retrieves a thumbnail if it is cached.
    pub fn get(&mut self, path: &Path) -> Option<CachedThumbnail> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Cache HIT: {}", path.display());
        } else {
            log::debug!("Cache MISS: {}", path.display());
        }
        result
    }

    pub fn put(&mut self, path: PathBuf, thumbnail: CachedThumbnail) {
        log::debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            thumbnail.width,
            thumbnail.height
        );
        self.cache.put(path, thumbnail);
    }

    /// Drops every entry, e.g. after switching to another image root.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(width: u32) -> CachedThumbnail {
        CachedThumbnail::new(vec![0; (width * 3) as usize], width, 1)
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = ThumbnailCache::new(2);
        cache.put(PathBuf::from("a.png"), thumb(1));
        cache.put(PathBuf::from("b.png"), thumb(2));
        assert!(cache.get(Path::new("a.png")).is_some());

        cache.put(PathBuf::from("c.png"), thumb(3));
        assert!(cache.get(Path::new("b.png")).is_none());
        assert_eq!(cache.get(Path::new("a.png")).map(|t| t.width), Some(1));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let mut cache = ThumbnailCache::new(0);
        cache.put(PathBuf::from("a.png"), thumb(1));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
