use crate::config::{DEFAULT_IMAGE_ROOT, DEFAULT_SAVE_FILE};
use crate::file_utils::PathExt;
use std::ffi::OsString;
use std::path::PathBuf;

/// Filesystem locations used for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPaths {
    pub image_root: PathBuf,
    pub save_file: PathBuf,
}

impl Default for LaunchPaths {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from(DEFAULT_IMAGE_ROOT),
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
        }
    }
}

impl LaunchPaths {
    /// Reads `[IMAGE_ROOT [SAVE_FILE]]` from positional arguments.
    ///
    /// Flags (anything starting with `-`) are skipped.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut positional = args.into_iter().filter(|arg| {
            let arg_str = arg.to_string_lossy();
            !arg_str.starts_with('-')
        });

        let defaults = Self::default();
        let paths = Self {
            image_root: positional
                .next()
                .map(PathBuf::from)
                .unwrap_or(defaults.image_root),
            save_file: positional
                .next()
                .map(PathBuf::from)
                .unwrap_or(defaults.save_file),
        };

        log::info!(
            "Image root {}, outfits file {}",
            paths.image_root.format_for_log(),
            paths.save_file.format_for_log()
        );
        paths
    }
}

/// Paths for this process, taken from the command line.
pub fn launch_paths() -> LaunchPaths {
    LaunchPaths::from_args(std::env::args_os().skip(1))
}
