//! Per-category image lists and current selections.

use super::navigation::{Direction, ImageCursor};
use crate::category::Category;
use crate::file_utils::{self, PathExt};
use crate::outfit::OutfitRecord;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Images of every category under one image root.
#[derive(Debug, Clone)]
pub struct Wardrobe {
    image_root: PathBuf,
    cursors: [ImageCursor; Category::COUNT],
}

impl Wardrobe {
    /// Scans `<image_root>/<category>/` for every category.
    pub fn load(image_root: impl Into<PathBuf>) -> Self {
        let image_root = image_root.into();
        let start = std::time::Instant::now();

        let cursors = Category::ALL
            .map(|category| ImageCursor::new(file_utils::list_category_images(&image_root, category)));

        info!(
            "Loaded wardrobe {} in {:?}: {}",
            image_root.format_for_log(),
            start.elapsed(),
            Category::ALL
                .iter()
                .map(|c| format!("{}={}", c, cursors[c.index()].image_count()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self {
            image_root,
            cursors,
        }
    }

    /// Rescans from `image_root`, resetting every selection to the first image.
    pub fn reload(&mut self, image_root: impl Into<PathBuf>) {
        *self = Self::load(image_root);
    }

    pub fn image_root(&self) -> &Path {
        &self.image_root
    }

    pub fn next(&mut self, category: Category) -> Option<&Path> {
        self.navigate(category, Direction::Next)
    }

    pub fn prev(&mut self, category: Category) -> Option<&Path> {
        self.navigate(category, Direction::Previous)
    }

    fn navigate(&mut self, category: Category, direction: Direction) -> Option<&Path> {
        let path = self.cursors[category.index()].navigate(direction);
        debug!("{:?} {} -> {:?}", direction, category, path);
        path
    }

    /// Selected image of `category`, or `None` when it has no images.
    pub fn current(&self, category: Category) -> Option<&Path> {
        self.cursors[category.index()].current()
    }

    /// Selected position and image count of `category`.
    pub fn position(&self, category: Category) -> (usize, usize) {
        let cursor = &self.cursors[category.index()];
        (cursor.index(), cursor.image_count())
    }

    /// Captures the selected file name of every category.
    pub fn snapshot(&self) -> OutfitRecord {
        let mut record = OutfitRecord::default();
        for category in Category::ALL {
            record.set(
                category,
                self.current(category).and_then(file_utils::file_name_of),
            );
        }
        record
    }

    /// Where a saved file name of `category` is expected on disk.
    pub fn resolve(&self, category: Category, file_name: &str) -> PathBuf {
        file_utils::category_dir(&self.image_root, category).join(file_name)
    }
}
