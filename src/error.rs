//! Unified error types for the outfit scroller.

use std::fmt;
use std::path::PathBuf;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Error scanning directory for image files
    DirectoryScan(String),
    /// Saved outfits file could not be read or written
    StoreIo { path: PathBuf, message: String },
    /// Saved outfits file exists but is not a valid document
    StoreParse { path: PathBuf, message: String },
    /// Save requested with a blank group name
    EmptyGroupName,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "Directory scan error: {}", msg),
            AppError::StoreIo { path, message } => {
                write!(f, "Cannot access {}: {}", path.display(), message)
            }
            AppError::StoreParse { path, message } => {
                write!(f, "Malformed outfits file {}: {}", path.display(), message)
            }
            AppError::EmptyGroupName => write!(f, "No group name entered."),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_file() {
        let err = AppError::StoreParse {
            path: PathBuf::from("saved_outfits.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("saved_outfits.json"));
        assert!(text.contains("line 1"));
    }

    #[test]
    fn io_error_converts_to_directory_scan() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(AppError::from(io), AppError::DirectoryScan(_)));
    }
}
