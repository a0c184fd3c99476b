//! Application configuration constants.

/// Supported image file extensions for scanning category directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Image library root used when none is given on the command line.
pub const DEFAULT_IMAGE_ROOT: &str = "outfits";

/// Saved outfits file used when none is given on the command line.
pub const DEFAULT_SAVE_FILE: &str = "saved_outfits.json";

/// Thumbnail bounding box.
pub const THUMBNAIL_MAX_WIDTH: u32 = 160;
pub const THUMBNAIL_MAX_HEIGHT: u32 = 120;

/// Number of decoded thumbnails kept in memory.
pub const THUMBNAIL_CACHE_CAPACITY: usize = 64;
