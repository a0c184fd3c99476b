//! Cursor over an ordered list with wrap-around stepping.

use log::debug;
use std::path::{Path, PathBuf};

/// Direction for stepping through a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Moves `index` one step in this direction, wrapping modulo `len`.
    ///
    /// Returns `index` unchanged when `len` is zero.
    pub fn step(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return index;
        }
        match self {
            Direction::Next => (index % len + 1) % len,
            Direction::Previous => (index % len + len - 1) % len,
        }
    }
}

/// Image files of one category and the position currently shown.
#[derive(Debug, Default, Clone)]
pub struct ImageCursor {
    image_files: Vec<PathBuf>,
    index: usize,
}

impl ImageCursor {
    pub fn new(image_files: Vec<PathBuf>) -> Self {
        Self {
            image_files,
            index: 0,
        }
    }

    /// Moves one image in `direction`. No-op on an empty list.
    pub fn navigate(&mut self, direction: Direction) -> Option<&Path> {
        if self.image_files.is_empty() {
            debug!("No images available for navigation");
            return None;
        }
        self.index = direction.step(self.index, self.image_files.len());
        self.current()
    }

    /// Path at the current position, or `None` when there are no images.
    pub fn current(&self) -> Option<&Path> {
        self.image_files.get(self.index).map(PathBuf::as_path)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn image_count(&self) -> usize {
        self.image_files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(names: &[&str]) -> ImageCursor {
        ImageCursor::new(names.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn step_wraps_both_ways() {
        assert_eq!(Direction::Next.step(2, 3), 0);
        assert_eq!(Direction::Previous.step(0, 3), 2);
        assert_eq!(Direction::Previous.step(0, 1), 0);
        assert_eq!(Direction::Next.step(4, 0), 4);
    }

    #[test]
    fn stepping_len_times_returns_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let mut forward = start;
                let mut backward = start;
                for _ in 0..len {
                    forward = Direction::Next.step(forward, len);
                    backward = Direction::Previous.step(backward, len);
                }
                assert_eq!(forward, start);
                assert_eq!(backward, start);
            }
        }
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for len in 1..8 {
            for i in 0..len {
                let there = Direction::Next.step(i, len);
                assert_eq!(Direction::Previous.step(there, len), i);
                let back = Direction::Previous.step(i, len);
                assert_eq!(Direction::Next.step(back, len), i);
            }
        }
    }

    #[test]
    fn empty_cursor_has_no_current_image() {
        let mut empty = ImageCursor::default();
        assert!(empty.current().is_none());
        assert!(empty.navigate(Direction::Next).is_none());
        assert!(empty.navigate(Direction::Previous).is_none());
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn cursor_cycles_through_files() {
        let mut tops = cursor(&["tops/a.jpg", "tops/b.jpg"]);
        assert_eq!(tops.current(), Some(Path::new("tops/a.jpg")));
        assert_eq!(tops.navigate(Direction::Next), Some(Path::new("tops/b.jpg")));
        assert_eq!(tops.navigate(Direction::Next), Some(Path::new("tops/a.jpg")));
        assert_eq!(tops.navigate(Direction::Previous), Some(Path::new("tops/b.jpg")));
    }
}
