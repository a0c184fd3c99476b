use crate::category::Category;
use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Path formatting for log lines.
pub trait PathExt {
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn format_for_log(&self) -> String {
        format!("\"{}\"", self.display())
    }
}

/// Whether the file name ends in a supported extension, ignoring case.
///
/// Matches on the whole name, so a file called just `.png` counts.
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .map(|name| {
            SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .any(|ext| name.ends_with(&format!(".{}", ext)))
        })
        .unwrap_or(false)
}

/// Lists supported image files in `dir`, sorted by file name.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(image_files)
}

/// Directory holding the images of one category.
pub fn category_dir(image_root: &Path, category: Category) -> PathBuf {
    image_root.join(category.as_str())
}

/// Lists the images of one category.
///
/// A missing directory is a valid empty category. Any other read failure is
/// logged and also treated as empty.
pub fn list_category_images(image_root: &Path, category: Category) -> Vec<PathBuf> {
    let dir = category_dir(image_root, category);
    if !dir.exists() {
        return Vec::new();
    }

    scan_directory(&dir).unwrap_or_else(|e| {
        warn!("Cannot scan {}: {}", dir.format_for_log(), e);
        Vec::new()
    })
}

/// Final path component as an owned string.
pub fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn scan_keeps_only_supported_extensions_sorted() {
        let dir = tempdir().unwrap();
        for name in ["b.JPG", "a.png", "c.jpeg", "notes.txt", "d.gif"] {
            touch(&dir.path().join(name));
        }
        fs::create_dir(dir.path().join("z.png")).unwrap();

        let names: Vec<String> = scan_directory(dir.path())
            .unwrap()
            .iter()
            .filter_map(|p| file_name_of(p))
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.jpeg"]);
    }

    #[test]
    fn missing_category_directory_is_empty() {
        let dir = tempdir().unwrap();
        assert!(list_category_images(dir.path(), Category::Shoes).is_empty());
    }

    #[test]
    fn category_images_come_from_category_folder() {
        let dir = tempdir().unwrap();
        let tops = category_dir(dir.path(), Category::Tops);
        fs::create_dir(&tops).unwrap();
        touch(&tops.join("shirt1.png"));
        touch(&dir.path().join("stray.png"));

        let images = list_category_images(dir.path(), Category::Tops);
        assert_eq!(images, vec![tops.join("shirt1.png")]);
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("x/Ring.JPEG")));
        assert!(!is_supported_image(Path::new("x/ring.webp")));
        assert!(!is_supported_image(Path::new("x/ring")));
        assert!(!is_supported_image(Path::new("x/png")));
    }

    #[test]
    fn bare_extension_name_is_an_image() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join(".png"));
        touch(&dir.path().join("a.jpg"));

        assert!(is_supported_image(Path::new("tops/.PNG")));
        let names: Vec<String> = scan_directory(dir.path())
            .unwrap()
            .iter()
            .filter_map(|p| file_name_of(p))
            .collect();
        assert_eq!(names, vec![".png", "a.jpg"]);
    }
}
